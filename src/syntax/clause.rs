//! Clauses (sets of literals) and clause sets.

use std::fmt;
use std::sync::Arc;

use super::Sentence;
use crate::error::{LogicError, Result};

/// A disjunction of literals, deduplicated by printed form.
///
/// A clause produced by resolution keeps its two parent clauses.
#[derive(Debug, Clone, Default)]
pub struct Clause {
    literals: Vec<Sentence>,
    parents: Option<(Arc<Clause>, Arc<Clause>)>,
}

impl Clause {
    /// The empty clause.
    pub fn new() -> Self {
        Clause::default()
    }

    /// Build a clause from literals, rejecting it if any member is not a literal.
    pub fn from_literals(literals: impl IntoIterator<Item = Sentence>) -> Result<Self> {
        let mut clause = Clause::new();
        for lit in literals {
            clause.add_literal(lit)?;
        }
        Ok(clause)
    }

    /// A resolvent of `left` and `right`.
    pub(crate) fn derived(literals: Vec<Sentence>, left: Arc<Clause>, right: Arc<Clause>) -> Self {
        let mut clause = Clause {
            literals: Vec::new(),
            parents: Some((left, right)),
        };
        for lit in literals {
            if !clause.contains(&lit) {
                clause.literals.push(lit);
            }
        }
        clause
    }

    /// Add a literal. Returns `Ok(false)` when an equal literal is already present.
    ///
    /// Non-literals leave the clause unchanged and are reported as `NotLiteral`.
    pub fn add_literal(&mut self, literal: Sentence) -> Result<bool> {
        if !literal.is_literal(literal.root()) {
            log::warn!("rejected non-literal `{}` in clause {}", literal, self);
            return Err(LogicError::NotLiteral(literal.to_string()));
        }
        if self.contains(&literal) {
            return Ok(false);
        }
        self.literals.push(literal);
        Ok(true)
    }

    pub fn contains(&self, literal: &Sentence) -> bool {
        self.literals.iter().any(|l| l == literal)
    }

    pub fn literals(&self) -> &[Sentence] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn parents(&self) -> Option<(&Arc<Clause>, &Arc<Clause>)> {
        self.parents.as_ref().map(|(l, r)| (l, r))
    }

    pub fn is_resolvent(&self) -> bool {
        self.parents.is_some()
    }

    /// Order-independent identity of the literal set.
    pub fn key(&self) -> Vec<String> {
        let mut key: Vec<String> = self.literals.iter().map(|l| l.to_string()).collect();
        key.sort();
        key
    }

    /// A resolvent that reproduces one of its own parents.
    pub fn is_circular(&self) -> bool {
        match &self.parents {
            Some((left, right)) => {
                let key = self.key();
                left.key() == key || right.key() == key
            }
            None => false,
        }
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Clause {}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, "}}")
    }
}

/// A collection of clauses.
#[derive(Debug, Clone, Default)]
pub struct ClauseSet {
    clauses: Vec<Arc<Clause>>,
}

impl ClauseSet {
    pub fn new() -> Self {
        ClauseSet::default()
    }

    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(Arc::new(clause));
    }

    pub fn push_shared(&mut self, clause: Arc<Clause>) {
        self.clauses.push(clause);
    }

    /// Disjoint union: append every clause of `other`.
    pub fn join(&mut self, other: ClauseSet) {
        self.clauses.extend(other.clauses);
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.iter().any(|c| c.as_ref() == clause)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Clause>> {
        self.clauses.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Clause>> {
        self.clauses.get(index)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        ClauseSet {
            clauses: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", clause)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Atom, Term};

    fn lit(name: &str, positive: bool) -> Sentence {
        let atom = Sentence::atomic(Atom::from_terms(name, vec![Term::var("x")]));
        if positive {
            atom
        } else {
            Sentence::not(atom)
        }
    }

    // === Literals ===

    #[test]
    fn test_duplicate_literal_is_ignored() {
        let mut clause = Clause::new();
        assert_eq!(clause.add_literal(lit("P", true)), Ok(true));
        assert_eq!(clause.add_literal(lit("P", true)), Ok(false));
        assert_eq!(clause.len(), 1);
    }

    #[test]
    fn test_non_literal_is_rejected_without_change() {
        let mut clause = Clause::from_literals(vec![lit("P", true)]).unwrap();
        let err = clause.add_literal(Sentence::and(lit("P", true), lit("Q", true)));
        assert!(matches!(err, Err(LogicError::NotLiteral(_))));
        assert_eq!(clause.len(), 1);
        assert!(Clause::from_literals(vec![Sentence::or(lit("P", true), lit("Q", true))]).is_err());
    }

    #[test]
    fn test_display() {
        let clause = Clause::from_literals(vec![lit("P", true), lit("Q", false)]).unwrap();
        assert_eq!(clause.to_string(), "{P(x), ¬Q(x)}");
        assert_eq!(Clause::new().to_string(), "{}");
    }

    // === Identity ===

    #[test]
    fn test_equality_ignores_order() {
        let a = Clause::from_literals(vec![lit("P", true), lit("Q", false)]).unwrap();
        let b = Clause::from_literals(vec![lit("Q", false), lit("P", true)]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_circular_resolvent() {
        let left = Arc::new(Clause::from_literals(vec![lit("P", true)]).unwrap());
        let right = Arc::new(Clause::from_literals(vec![lit("Q", false)]).unwrap());
        let same = Clause::derived(vec![lit("P", true)], left.clone(), right.clone());
        let fresh = Clause::derived(vec![lit("R", true)], left, right);
        assert!(same.is_circular());
        assert!(!fresh.is_circular());
    }

    // === Sets ===

    #[test]
    fn test_join_appends() {
        let mut a: ClauseSet = vec![Clause::from_literals(vec![lit("P", true)]).unwrap()]
            .into_iter()
            .collect();
        let b: ClauseSet = vec![Clause::from_literals(vec![lit("P", true)]).unwrap()]
            .into_iter()
            .collect();
        a.join(b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(&Clause::from_literals(vec![lit("P", true)]).unwrap()));
    }
}
