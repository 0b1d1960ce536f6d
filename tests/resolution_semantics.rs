use fologic::inference::resolution_proof;
use fologic::resolution::{saturate, ProofTrace, ResolutionResult};
use fologic::syntax::{Clause, ClauseSet};
use fologic::{EngineConfig, Session};
use fologic::parser::parse_sentence;

fn dog_session() -> Session {
    let mut session = Session::new();
    let a = session.add_element("a");
    let b = session.add_element("b");
    session.add_predicate("Dog", 1);
    session.add_predicate("Barks", 1);
    session.add_predicate("Bites", 1);
    let i = session.add_interpretation();
    session.add_relation(i, "Dog", vec![vec![a], vec![b]]).unwrap();
    session.add_relation(i, "Barks", vec![vec![a]]).unwrap();
    session.add_relation(i, "Bites", vec![vec![b]]).unwrap();
    session
}

const RULE: &str = "∀x ((Dog(x) ∧ Barks(x)) → ¬Bites(x))";
const FACT: &str = "(Dog(a) ∧ Barks(a))";

// === Dog scenario ===

#[test]
fn dog_rule_holds_in_its_structure() {
    let session = dog_session();
    let rule = session.parse(RULE).unwrap();
    assert!(session.truth_value(0, &rule).unwrap());
}

#[test]
fn dog_true_conclusion_is_refuted_with_trace() {
    let mut session = dog_session();
    let p1 = session.parse(RULE).unwrap();
    let p2 = session.parse(FACT).unwrap();
    let c = session.parse("¬Bites(a)").unwrap();

    let result = session.prove(&p1, &p2, &c).unwrap();
    let empty = result.empty_clause().expect("empty clause");
    assert!(empty.is_empty());

    let trace = session.last_trace().unwrap();
    assert!(!trace.is_empty());
    assert_eq!(trace.steps.last().unwrap().resolvent, "{}");
}

#[test]
fn dog_false_conclusion_saturates() {
    let mut session = dog_session();
    let p1 = session.parse(RULE).unwrap();
    let p2 = session.parse(FACT).unwrap();
    let c = session.parse("Bites(a)").unwrap();
    assert!(matches!(
        session.prove(&p1, &p2, &c).unwrap(),
        ResolutionResult::Saturated
    ));
}

#[test]
fn trace_serializes_every_step() {
    let mut session = dog_session();
    let p1 = session.parse(RULE).unwrap();
    let p2 = session.parse(FACT).unwrap();
    let c = session.parse("¬Bites(a)").unwrap();
    session.prove(&p1, &p2, &c).unwrap();

    let trace = session.last_trace().unwrap();
    let json: serde_json::Value = serde_json::from_str(&trace.to_json().unwrap()).unwrap();
    assert_eq!(json["steps"].as_array().unwrap().len(), trace.len());
}

// === Compound conclusions ===

fn prove(p1: &str, p2: &str, c: &str) -> ResolutionResult {
    resolution_proof(
        &parse_sentence(p1).unwrap(),
        &parse_sentence(p2).unwrap(),
        &parse_sentence(c).unwrap(),
        &EngineConfig::default(),
    )
    .unwrap()
}

#[test]
fn disjunction_does_not_follow_from_negated_disjuncts() {
    assert!(matches!(
        prove("¬A()", "¬B()", "(A() ∨ B())"),
        ResolutionResult::Saturated
    ));
}

#[test]
fn negated_disjunction_follows_from_negated_disjuncts() {
    assert!(prove("¬A()", "¬B()", "¬(A() ∨ B())").is_refutation());
}

#[test]
fn conjunction_needs_both_conjuncts() {
    assert!(prove("A()", "B()", "(A() ∧ B())").is_refutation());
    assert!(matches!(
        prove("A()", "C()", "(A() ∧ B())"),
        ResolutionResult::Saturated
    ));
}

#[test]
fn implication_conclusion() {
    assert!(prove("(A() → B())", "(B() → C())", "(A() → C())").is_refutation());
    assert!(matches!(
        prove("(A() → B())", "(B() → C())", "(C() → A())"),
        ResolutionResult::Saturated
    ));
}

// === Saturation ===

#[test]
fn complementary_units_refute_directly() {
    let clauses: ClauseSet = [
        Clause::from_literals([parse_sentence("P(x)").unwrap()]).unwrap(),
        Clause::from_literals([parse_sentence("¬P(x)").unwrap()]).unwrap(),
    ]
    .into_iter()
    .collect();
    let result = saturate(clauses, None);
    assert_eq!(ProofTrace::of(result.empty_clause().unwrap()).len(), 1);
}

#[test]
fn round_limit_reports_resource_limit() {
    let config = EngineConfig {
        resolution_rounds: Some(0),
        ..EngineConfig::default()
    };
    let result = resolution_proof(
        &parse_sentence(RULE).unwrap(),
        &parse_sentence(FACT).unwrap(),
        &parse_sentence("¬Bites(a)").unwrap(),
        &config,
    )
    .unwrap();
    assert!(matches!(result, ResolutionResult::ResourceLimit));
}
