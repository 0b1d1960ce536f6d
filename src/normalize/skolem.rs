//! Skolemization of prenex sentences against one interpretation.

use std::collections::HashMap;

use super::{is_pnf, matrix};
use crate::error::{LogicError, Result};
use crate::semantics::{ElementId, Function, Interpretation, VariableAssignment};
use crate::syntax::{fresh_name, FnSym, NodeId, QuantifierKind, Sentence, Term, Var};
use crate::unify::Substitution;

/// A Skolemized sentence and the function symbols introduced for it, outermost first.
#[derive(Debug, Clone)]
pub struct Skolemized {
    pub sentence: Sentence,
    pub functions: Vec<FnSym>,
}

/// Terms of every atom below quantifier `q` that mentions its variable.
fn scope_terms(s: &Sentence, q: NodeId) -> Vec<&Term> {
    let Some(var) = s.quantifier_of(q).map(|quant| &quant.var) else {
        return Vec::new();
    };
    s.leaves(q)
        .into_iter()
        .filter_map(|leaf| s.atom(leaf))
        .filter(|atom| atom.terms.iter().any(|t| t.occurs(var)))
        .flat_map(|atom| atom.terms.iter())
        .collect()
}

/// For each existential of the prefix, the universal variables before it whose scope shares a variable with its own.
///
/// Entries are listed innermost existential first; dependencies are in prefix order.
pub fn quantifier_dependencies(sentence: &Sentence) -> Vec<(Var, Vec<Var>)> {
    let prefix = prefix(sentence);
    let mut out = Vec::new();
    for (i, q) in prefix.iter().enumerate().rev() {
        let Some(quant) = sentence.quantifier_of(*q) else { continue };
        if quant.kind != QuantifierKind::Existential {
            continue;
        }
        let lower = scope_terms(sentence, *q);
        let deps = prefix[..i]
            .iter()
            .filter_map(|outer| sentence.quantifier_of(*outer).map(|oq| (*outer, oq)))
            .filter(|(_, oq)| oq.kind == QuantifierKind::Universal)
            .filter(|(outer, _)| {
                let higher = scope_terms(sentence, *outer);
                lower.iter().any(|l| higher.iter().any(|h| h.shares_variable(l)))
            })
            .map(|(_, oq)| oq.var.clone())
            .collect();
        out.push((quant.var.clone(), deps));
    }
    out
}

fn prefix(sentence: &Sentence) -> Vec<NodeId> {
    let end = matrix(sentence);
    let mut out = Vec::new();
    let mut id = sentence.root();
    while id != end {
        out.push(id);
        match sentence.p(id) {
            Some(body) => id = body,
            None => break,
        }
    }
    out
}

/// The first element each variable is bound to, taken from the atoms of a true evaluation.
pub(crate) fn witness_map(
    sentence: &Sentence,
    interpretation: &Interpretation,
    assignment: &VariableAssignment,
) -> HashMap<Var, ElementId> {
    let truth = interpretation.evaluate(sentence, assignment);
    let leaves = sentence.leaves(sentence.root());
    if leaves.len() != truth.witnesses.len() {
        log::warn!(
            "{} atoms but {} witness tuples for {}",
            leaves.len(),
            truth.witnesses.len(),
            sentence
        );
    }
    let mut map = HashMap::new();
    for (leaf, witness) in leaves.into_iter().zip(truth.witnesses) {
        let Some(atom) = sentence.atom(leaf) else { continue };
        for (term, element) in atom.terms.iter().zip(witness) {
            if let (Term::Var(v), Some(e)) = (term, element) {
                map.entry(v.clone()).or_insert(e);
            }
        }
    }
    map
}

/// Replace every existential quantifier of a prenex sentence by a fresh function of its dependencies.
///
/// Each Skolem function is registered in `interpretation`, mapping the
/// witnessed elements of its dependencies to the witness of the existential.
/// With `strip_universals` the remaining universal prefix is dropped as well.
pub fn skolemize(
    sentence: &Sentence,
    interpretation: &mut Interpretation,
    assignment: &VariableAssignment,
    strip_universals: bool,
) -> Result<Skolemized> {
    if !is_pnf(sentence) {
        return Err(LogicError::FormNotPrenex(sentence.to_string()));
    }
    let mut out = sentence.copy();
    let witnesses = witness_map(&out, interpretation, assignment);
    let dependencies = quantifier_dependencies(&out);
    let mut functions = Vec::new();

    for (var, deps) in dependencies {
        let Some(q) = prefix(&out)
            .into_iter()
            .find(|id| out.quantifier_of(*id).map_or(false, |quant| quant.var == var))
        else {
            continue;
        };
        let sym = FnSym::new(fresh_name("sk"), deps.len());
        let args: Option<Vec<ElementId>> = deps.iter().map(|d| witnesses.get(d).copied()).collect();
        let mapping = match (args, witnesses.get(&var)) {
            (Some(args), Some(image)) => vec![(args, *image)],
            _ => {
                log::warn!("no witness for {} in {}; {} is left empty", var, out, sym);
                Vec::new()
            }
        };
        interpretation.register_function(sym.clone(), Function::new(mapping));

        let term = Term::App(sym.clone(), deps.iter().cloned().map(Term::Var).collect());
        log::debug!("skolemizing {} as {}", var, term);
        if let Some(body) = out.p(q) {
            let inner = out.subtree(body);
            out.replace_with_equivalent(q, &inner);
        }
        Substitution::singleton(var, term).apply(&mut out);
        out.compact();
        functions.push(sym);
    }
    functions.reverse();

    if strip_universals {
        let m = matrix(&out);
        out = out.subtree(m);
    }
    Ok(Skolemized {
        sentence: out,
        functions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_sentence;
    use crate::semantics::{read, Element, MapUniverse, PredicateRelation, Structure, Universe};
    use crate::syntax::PredSym;

    fn interpretation_with(pairs: &[(usize, usize)], labels: &[&str]) -> (Interpretation, Vec<ElementId>) {
        let mut universe = MapUniverse::new();
        let mut ids = Vec::new();
        for l in labels {
            let e = Element::new(*l);
            ids.push(e.id());
            universe.add_element(e);
        }
        let mut interpretation = Interpretation::new(Structure::new(universe).into_shared());
        let tuples = pairs.iter().map(|(a, b)| vec![ids[*a], ids[*b]]);
        interpretation.register_relation(PredSym::new("P", 2), PredicateRelation::new(tuples));
        (interpretation, ids)
    }

    // === Dependencies ===

    #[test]
    fn test_existential_depends_on_shared_universal() {
        let s = parse_sentence("∀x ∃y P(x, y)").unwrap();
        assert_eq!(
            quantifier_dependencies(&s),
            vec![(Var::new("y"), vec![Var::new("x")])]
        );
    }

    #[test]
    fn test_existential_independent_of_unrelated_universal() {
        let s = parse_sentence("∀x ∃y (P(x, x) ∧ Q(y))").unwrap();
        assert_eq!(quantifier_dependencies(&s), vec![(Var::new("y"), vec![])]);
    }

    #[test]
    fn test_dependencies_listed_innermost_first() {
        let s = parse_sentence("∃u ∀x ∃y P(x, y, u)").unwrap();
        let deps = quantifier_dependencies(&s);
        assert_eq!(deps[0], (Var::new("y"), vec![Var::new("x")]));
        assert_eq!(deps[1], (Var::new("u"), vec![]));
    }

    // === Skolemization ===

    #[test]
    fn test_rejects_non_prenex_input() {
        let (mut i, _) = interpretation_with(&[], &["a"]);
        let s = parse_sentence("(Q(z) ∧ ∃y P(z, y))").unwrap();
        let err = skolemize(&s, &mut i, &VariableAssignment::new(), false).unwrap_err();
        assert!(matches!(err, LogicError::FormNotPrenex(_)));
    }

    #[test]
    fn test_skolem_function_replaces_existential() {
        let (mut i, ids) = interpretation_with(&[(0, 1), (1, 0)], &["a", "b"]);
        let s = parse_sentence("∀x ∃y P(x, y)").unwrap();
        let out = skolemize(&s, &mut i, &VariableAssignment::new(), false).unwrap();
        assert_eq!(out.functions.len(), 1);
        let f = &out.functions[0];
        assert_eq!(f.arity, 1);
        assert_eq!(out.sentence.to_string(), format!("∀x P(x, {}(x))", f.name));
        // the last universal witness was b, whose partner is a
        let guard = read(i.structure());
        let function = guard.function(i.function_id(f).unwrap()).unwrap();
        assert_eq!(function.apply(&[ids[1]]), Some(ids[0]));
    }

    #[test]
    fn test_independent_existential_becomes_constant() {
        let (mut i, _) = interpretation_with(&[(0, 0)], &["a"]);
        let s = parse_sentence("∃y P(y, y)").unwrap();
        let out = skolemize(&s, &mut i, &VariableAssignment::new(), false).unwrap();
        let c = &out.functions[0];
        assert_eq!(c.arity, 0);
        assert_eq!(out.sentence.to_string(), format!("P({0}(), {0}())", c.name));
        assert!(i.truth_value(&out.sentence, &VariableAssignment::new()));
    }

    #[test]
    fn test_strip_universals() {
        let (mut i, _) = interpretation_with(&[(0, 0)], &["a"]);
        let s = parse_sentence("∀x ∃y P(x, y)").unwrap();
        let out = skolemize(&s, &mut i, &VariableAssignment::new(), true).unwrap();
        assert!(out.sentence.to_string().starts_with("P(x, "));
    }

    #[test]
    fn test_input_is_left_untouched() {
        let (mut i, _) = interpretation_with(&[(0, 0)], &["a"]);
        let s = parse_sentence("∀x ∃y P(x, y)").unwrap();
        skolemize(&s, &mut i, &VariableAssignment::new(), false).unwrap();
        assert_eq!(s.to_string(), "∀x ∃y P(x, y)");
    }
}
