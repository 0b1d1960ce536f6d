//! Substitutions and local unifiability of literals and clauses.

mod substitution;
mod unify;

pub use substitution::Substitution;
pub use unify::{literals_unifiable, unify_terms, Unifier};
