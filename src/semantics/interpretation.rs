//! Interpretations: symbol bindings into a shared structure, and truth evaluation.

use std::collections::HashMap;

use super::structure::{read, write, Function, PredicateRelation, SharedStructure, Structure};
use super::{ElementId, QuantifierBindings, VariableAssignment};
use crate::syntax::{Connective, FnSym, Node, NodeId, Operator, PredSym, QuantifierKind, Sentence, Term};

/// Element ids of one atom's arguments; `None` where a term has no value.
pub type Witness = Vec<Option<ElementId>>;

/// Result of evaluating a sentence.
///
/// `witnesses` holds one argument tuple per atom evaluated on the path that
/// decided the value, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthValue {
    pub value: bool,
    pub witnesses: Vec<Witness>,
}

/// Binds predicate and function symbols to relation and function ids of one structure.
#[derive(Debug, Clone)]
pub struct Interpretation {
    structure: SharedStructure,
    predicates: HashMap<PredSym, usize>,
    functions: HashMap<FnSym, usize>,
}

impl Interpretation {
    pub fn new(structure: SharedStructure) -> Self {
        Interpretation {
            structure,
            predicates: HashMap::new(),
            functions: HashMap::new(),
        }
    }

    pub fn structure(&self) -> &SharedStructure {
        &self.structure
    }

    pub fn bind_predicate(&mut self, sym: PredSym, relation: usize) {
        self.predicates.insert(sym, relation);
    }

    pub fn bind_function(&mut self, sym: FnSym, function: usize) {
        self.functions.insert(sym, function);
    }

    pub fn unbind_predicate(&mut self, sym: &PredSym) -> Option<usize> {
        self.predicates.remove(sym)
    }

    pub fn unbind_function(&mut self, sym: &FnSym) -> Option<usize> {
        self.functions.remove(sym)
    }

    pub fn relation_id(&self, sym: &PredSym) -> Option<usize> {
        self.predicates.get(sym).copied()
    }

    pub fn function_id(&self, sym: &FnSym) -> Option<usize> {
        self.functions.get(sym).copied()
    }

    /// Add `relation` to the structure and bind `sym` to it.
    pub fn register_relation(&mut self, sym: PredSym, relation: PredicateRelation) -> usize {
        let id = write(&self.structure).add_relation(relation);
        self.bind_predicate(sym, id);
        id
    }

    /// Add `function` to the structure and bind `sym` to it.
    pub fn register_function(&mut self, sym: FnSym, function: Function) -> usize {
        let id = write(&self.structure).add_function(function);
        self.bind_function(sym, id);
        id
    }

    /// Evaluate with no quantifier bindings in force.
    pub fn evaluate(&self, sentence: &Sentence, assignment: &VariableAssignment) -> TruthValue {
        evaluate(sentence, self, &mut QuantifierBindings::new(), assignment)
    }

    pub fn truth_value(&self, sentence: &Sentence, assignment: &VariableAssignment) -> bool {
        self.evaluate(sentence, assignment).value
    }
}

/// Truth value of `sentence` under `interpretation`.
///
/// Bound variables are looked up in `bindings` first, then free variables in
/// `assignment`. An atom whose predicate has no relation is false.
pub fn evaluate(
    sentence: &Sentence,
    interpretation: &Interpretation,
    bindings: &mut QuantifierBindings,
    assignment: &VariableAssignment,
) -> TruthValue {
    let structure = read(&interpretation.structure);
    let mut evaluator = Evaluator {
        interpretation,
        structure: &structure,
        bindings,
        assignment,
    };
    evaluator.node(sentence, sentence.root())
}

struct Evaluator<'a> {
    interpretation: &'a Interpretation,
    structure: &'a Structure,
    bindings: &'a mut QuantifierBindings,
    assignment: &'a VariableAssignment,
}

impl Evaluator<'_> {
    fn node(&mut self, s: &Sentence, id: NodeId) -> TruthValue {
        match s.node(id) {
            Node::Atomic(atom) => {
                let tuple: Witness = atom.terms.iter().map(|t| self.term(t)).collect();
                let value = match self.interpretation.relation_id(&atom.predicate) {
                    None => false,
                    Some(rel) => match (self.structure.relation(rel), complete(&tuple)) {
                        (Some(relation), Some(ids)) => relation.contains(&ids),
                        (None, _) => {
                            log::warn!("relation {} bound to {} is not in the structure", rel, atom.predicate);
                            false
                        }
                        (_, None) => false,
                    },
                };
                TruthValue {
                    value,
                    witnesses: vec![tuple],
                }
            }
            Node::Complex(Operator::Connective(c), children) => {
                let first = self.node(s, children[0]);
                match c {
                    Connective::Affirmation => first,
                    Connective::Negation => TruthValue {
                        value: !first.value,
                        witnesses: first.witnesses,
                    },
                    binary => {
                        let second = self.node(s, children[1]);
                        let value = match binary {
                            Connective::Conjunction => first.value && second.value,
                            Connective::Disjunction => first.value || second.value,
                            Connective::Implication => !first.value || second.value,
                            _ => first.value == second.value,
                        };
                        let mut witnesses = first.witnesses;
                        witnesses.extend(second.witnesses);
                        TruthValue { value, witnesses }
                    }
                }
            }
            Node::Complex(Operator::Quantifier(q), children) => {
                let default = q.kind == QuantifierKind::Universal;
                let mut last = Vec::new();
                for element in self.structure.universe().element_ids() {
                    let previous = self.bindings.bind(&q.var, element);
                    let result = self.node(s, children[0]);
                    self.bindings.unbind(&q.var);
                    if let Some(prev) = previous {
                        self.bindings.bind(&q.var, prev);
                    }
                    if result.value != default {
                        return result;
                    }
                    last = result.witnesses;
                }
                TruthValue {
                    value: default,
                    witnesses: last,
                }
            }
        }
    }

    fn term(&self, term: &Term) -> Option<ElementId> {
        match term {
            Term::Var(v) => {
                let found = self.bindings.lookup(v).or_else(|| self.assignment.get(v));
                if found.is_none() {
                    log::warn!("no element assigned to variable {}", v);
                }
                found
            }
            Term::App(sym, args) => {
                let ids: Option<Vec<ElementId>> = args.iter().map(|a| self.term(a)).collect();
                let function = self
                    .interpretation
                    .function_id(sym)
                    .and_then(|id| self.structure.function(id));
                match (function, ids) {
                    (Some(f), Some(ids)) => f.apply(&ids),
                    (None, _) => {
                        log::warn!("function {} has no interpretation", sym);
                        None
                    }
                    (_, None) => None,
                }
            }
        }
    }
}

fn complete(tuple: &Witness) -> Option<Vec<ElementId>> {
    tuple.iter().copied().collect()
}
