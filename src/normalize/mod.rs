//! Normal forms: prenex NNF, CNF, Skolem form and clause extraction.

mod clauses;
mod cnf;
mod prenex;
mod skolem;

pub use clauses::{conjuncts, get_clause_set, split_disjunctions};
pub use cnf::{get_cnf, push_disjunctions};
pub use prenex::{
    get_prenex_nnf, matrix, CLEANING, IMPLICATION_ELIMINATION, NEGATION_NORMAL_FORM,
    QUANTIFIER_PULLING,
};
pub use skolem::{quantifier_dependencies, skolemize, Skolemized};
pub(crate) use skolem::witness_map;

use crate::syntax::{Connective, Node, NodeId, Operator, Sentence};

/// No implication or biconditional, and every negation is a literal.
pub fn is_nnf(sentence: &Sentence) -> bool {
    nnf_at(sentence, sentence.root())
}

fn nnf_at(s: &Sentence, id: NodeId) -> bool {
    match s.node(id) {
        Node::Atomic(_) => true,
        Node::Complex(Operator::Connective(Connective::Implication | Connective::Biconditional), _) => {
            false
        }
        Node::Complex(Operator::Connective(Connective::Negation), _) if !s.is_literal(id) => false,
        Node::Complex(_, children) => children.iter().all(|c| nnf_at(s, *c)),
    }
}

/// A leading chain of quantifiers over a quantifier-free matrix.
pub fn is_pnf(sentence: &Sentence) -> bool {
    !sentence.contains_quantifier(matrix(sentence))
}

/// No implication or biconditional, every negation is a literal and every disjunction is a disjunction of literals.
pub fn is_cnf(sentence: &Sentence) -> bool {
    cnf_at(sentence, sentence.root())
}

pub(crate) fn cnf_at(s: &Sentence, id: NodeId) -> bool {
    match s.node(id) {
        Node::Atomic(_) => true,
        Node::Complex(Operator::Connective(Connective::Implication | Connective::Biconditional), _) => {
            false
        }
        Node::Complex(Operator::Connective(Connective::Negation), _) => s.is_literal(id),
        Node::Complex(Operator::Connective(Connective::Disjunction), _)
            if !s.is_disjunction_of_literals(id) =>
        {
            false
        }
        Node::Complex(_, children) => children.iter().all(|c| cnf_at(s, *c)),
    }
}
