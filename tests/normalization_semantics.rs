use fologic::normalize::{get_clause_set, get_cnf, get_prenex_nnf, is_cnf, is_nnf, is_pnf};
use fologic::parser::{parse, parse_sentence};
use fologic::syntax::{Clause, PredSym, Signature};
use fologic::LogicError;

// === Parser ===

#[test]
fn canonical_text_round_trips() {
    for text in [
        "P(x)",
        "Loves(x, mother(x))",
        "Rain()",
        "¬Bites(a)",
        "∀x ∃y Loves(x, y)",
        "((P(x) ∧ Q(x)) → ¬R(x))",
        "(P(c()) ↔ ¬∀z Q(z))",
        "¬(P(x) ∨ Q(f(g(x), y)))",
    ] {
        assert_eq!(parse_sentence(text).unwrap().to_string(), text);
    }
}

#[test]
fn whitespace_is_normalized() {
    let s = parse_sentence("∀x(  P( x ,y )∧Q(x) )").unwrap();
    assert_eq!(s.to_string(), "∀x (P(x, y) ∧ Q(x))");
}

#[test]
fn unbalanced_brackets_abort() {
    assert!(matches!(
        parse_sentence("(P(x) ∧ Q(x)"),
        Err(LogicError::Bracket { .. })
    ));
    assert!(matches!(parse_sentence("P(x))"), Err(LogicError::Bracket { .. })));
}

#[test]
fn missing_operand_is_a_syntax_error() {
    assert!(matches!(parse_sentence("(P(x) ∧)"), Err(LogicError::Syntax(_))));
}

#[test]
fn signature_checking_is_optional() {
    let mut signature = Signature::empty();
    signature.add_predicate(PredSym::new("P", 1));
    assert!(parse("P(x)", &signature, true).is_ok());
    assert_eq!(
        parse("Q(x)", &signature, true).unwrap_err(),
        LogicError::Signature("Q".to_string())
    );
    assert!(parse("Q(x)", &signature, false).is_ok());
}

// === Prenex ===

#[test]
fn prenex_of_implication() {
    let s = parse_sentence("∀x ((Hund(x) ∧ Bellen(x)) → ¬Beissen(x))").unwrap();
    assert_eq!(
        get_prenex_nnf(&s, None).unwrap().to_string(),
        "∀x ((¬Hund(x) ∨ ¬Bellen(x)) ∨ ¬Beissen(x))"
    );
}

#[test]
fn prenex_pulls_quantifiers_from_conjunction() {
    let s = parse_sentence("(∀x P(x) ∧ ∃y Q(y))").unwrap();
    let p = get_prenex_nnf(&s, None).unwrap();
    assert_eq!(p.to_string(), "∀x ∃y (Q(y) ∧ P(x))");
    assert!(is_pnf(&p) && is_nnf(&p));
}

#[test]
fn prenex_renames_clashing_bound_variables() {
    let s = parse_sentence("(∀x P(x) ∨ ∃x Q(x))").unwrap();
    let p = get_prenex_nnf(&s, None).unwrap();
    assert!(is_pnf(&p));
    let vars: Vec<_> = p
        .quantifiers_below(p.root())
        .into_iter()
        .filter_map(|q| p.quantifier_of(q).map(|q| q.var.clone()))
        .collect();
    assert_eq!(vars.len(), 2);
    assert_ne!(vars[0], vars[1]);
}

#[test]
fn negated_quantifier_flips() {
    let s = parse_sentence("¬∀x P(x)").unwrap();
    assert_eq!(get_prenex_nnf(&s, None).unwrap().to_string(), "∃x ¬P(x)");
}

#[test]
fn rewrite_limit_aborts() {
    let s = parse_sentence("¬¬¬¬(P(x) → Q(x))").unwrap();
    assert!(matches!(
        get_prenex_nnf(&s, Some(1)),
        Err(LogicError::RewriteLimit(1))
    ));
}

// === CNF and clauses ===

#[test]
fn cnf_distributes_disjunction() {
    let s = parse_sentence("((P(x) ∧ Q(x)) ∨ R(x))").unwrap();
    let cnf = get_cnf(&s, None).unwrap();
    assert!(is_cnf(&cnf));
    let clauses = get_clause_set(&s, None).unwrap();
    assert_eq!(clauses.len(), 2);
    assert!(clauses.iter().all(|c| c.len() == 2));
}

#[test]
fn dog_rule_is_one_clause() {
    let s = parse_sentence("∀x ((Dog(x) ∧ Barks(x)) → ¬Bites(x))").unwrap();
    let clauses = get_clause_set(&s, None).unwrap();
    assert_eq!(clauses.to_string(), "{{¬Dog(x), ¬Barks(x), ¬Bites(x)}}");
}

#[test]
fn clause_deduplicates_literals() {
    let mut clause = Clause::new();
    assert!(clause.add_literal(parse_sentence("P(x)").unwrap()).unwrap());
    assert!(!clause.add_literal(parse_sentence("P(x)").unwrap()).unwrap());
    assert_eq!(clause.len(), 1);
}

#[test]
fn clause_rejects_non_literal() {
    let mut clause = Clause::new();
    let err = clause
        .add_literal(parse_sentence("(P(x) ∧ Q(x))").unwrap())
        .unwrap_err();
    assert!(matches!(err, LogicError::NotLiteral(_)));
    assert!(clause.is_empty());
}
