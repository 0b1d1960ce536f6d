//! Signature: the predicate and function symbols a theory may use.

use indexmap::IndexMap;

use super::{FnSym, PredSym, Sentence};
use crate::error::{LogicError, Result};

/// Registered predicate and function symbols, keyed by name in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    predicates: IndexMap<String, PredSym>,
    functions: IndexMap<String, FnSym>,
}

impl Signature {
    pub fn empty() -> Self {
        Signature::default()
    }

    /// Register a predicate symbol, replacing any symbol of the same name.
    pub fn add_predicate(&mut self, sym: PredSym) {
        self.predicates.insert(sym.name.clone(), sym);
    }

    /// Register a function symbol, replacing any symbol of the same name.
    pub fn add_function(&mut self, sym: FnSym) {
        self.functions.insert(sym.name.clone(), sym);
    }

    pub fn remove_predicate(&mut self, name: &str) -> Option<PredSym> {
        self.predicates.shift_remove(name)
    }

    pub fn remove_function(&mut self, name: &str) -> Option<FnSym> {
        self.functions.shift_remove(name)
    }

    pub fn predicate(&self, name: &str) -> Option<&PredSym> {
        self.predicates.get(name)
    }

    pub fn function(&self, name: &str) -> Option<&FnSym> {
        self.functions.get(name)
    }

    pub fn predicates(&self) -> impl Iterator<Item = &PredSym> {
        self.predicates.values()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FnSym> {
        self.functions.values()
    }

    /// Merge another signature into this one.
    pub fn extend(&mut self, other: &Signature) {
        for p in other.predicates() {
            self.add_predicate(p.clone());
        }
        for f in other.functions() {
            self.add_function(f.clone());
        }
    }

    /// Fail with the first predicate or function name the sentence uses that is not registered.
    pub fn check(&self, sentence: &Sentence) -> Result<()> {
        let (predicates, functions) = sentence.symbol_names(sentence.root());
        let mut predicates: Vec<String> = predicates.into_iter().collect();
        let mut functions: Vec<String> = functions.into_iter().collect();
        predicates.sort();
        functions.sort();
        if let Some(missing) = predicates.into_iter().find(|p| !self.predicates.contains_key(p)) {
            return Err(LogicError::Signature(missing));
        }
        if let Some(missing) = functions.into_iter().find(|f| !self.functions.contains_key(f)) {
            return Err(LogicError::Signature(missing));
        }
        Ok(())
    }
}
