//! Atoms: a predicate symbol applied to terms.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::term::write_terms;
use super::{PredSym, Term};
use crate::error::{LogicError, Result};

/// An atomic formula: predicate(args...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Atom {
    pub predicate: PredSym,
    pub terms: Vec<Term>,
}

impl Atom {
    /// Build an atom. A 0-ary predicate cannot take terms, and terms are
    /// required for any other predicate.
    pub fn new(predicate: PredSym, terms: Vec<Term>) -> Result<Self> {
        if (predicate.arity == 0) != terms.is_empty() {
            return Err(LogicError::ArityMismatch {
                name: predicate.name,
                arity: predicate.arity,
                given: terms.len(),
            });
        }
        Ok(Atom { predicate, terms })
    }

    /// Build an atom whose predicate arity is taken from the term list.
    pub fn from_terms(name: impl Into<String>, terms: Vec<Term>) -> Self {
        let predicate = PredSym::new(name, terms.len());
        Atom { predicate, terms }
    }

    /// A propositional (0-ary) atom.
    pub fn prop(name: impl Into<String>) -> Self {
        Atom::from_terms(name, Vec::new())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.predicate.name)?;
        write_terms(f, &self.terms)?;
        write!(f, ")")
    }
}
