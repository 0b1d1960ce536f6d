//! Syntax types for first-order logic: symbols, terms, sentences, and clauses.

mod clause;
mod literal;
mod operator;
mod sentence;
mod signature;
mod term;

pub use clause::{Clause, ClauseSet};
pub use literal::Atom;
pub use operator::{Connective, Operator, Quantifier, QuantifierKind};
pub use sentence::{Node, NodeDisplay, NodeId, Sentence};
pub use signature::Signature;
pub use term::{fresh_name, FnSym, PredSym, Symbol, Term, Var};
