//! Local unifiability of literals and clauses.
//!
//! This is a position-by-position test, not Robinson unification: at each
//! argument position the terms must already be equal, or one side must be a
//! variable that does not occur in the other side. Each position yields at
//! most one binding and the bindings are applied one after another.

use super::Substitution;
use crate::error::{LogicError, Result};
use crate::syntax::{Clause, Sentence, Term};

/// Binding that makes two terms equal at one position, if the local test allows one.
pub fn unify_terms(t1: &Term, t2: &Term) -> Option<Substitution> {
    if t1 == t2 {
        return Some(Substitution::empty());
    }
    match (t1, t2) {
        (Term::Var(v), other) if !other.occurs(v) => {
            Some(Substitution::singleton(v.clone(), other.clone()))
        }
        (other, Term::Var(v)) if !other.occurs(v) => {
            Some(Substitution::singleton(v.clone(), other.clone()))
        }
        _ => None,
    }
}

/// The sequence of substitutions that locally unifies two literals or clauses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Unifier {
    substitutions: Vec<Substitution>,
}

impl Unifier {
    /// Unify the argument lists of two literals. Variables of `l1` are bound first.
    pub fn for_literals(l1: &Sentence, l2: &Sentence) -> Result<Unifier> {
        let not_unifiable = || LogicError::NotUnifiable {
            left: l1.to_string(),
            right: l2.to_string(),
        };
        let (a1, _) = l1.literal_parts(l1.root()).ok_or_else(not_unifiable)?;
        let (a2, _) = l2.literal_parts(l2.root()).ok_or_else(not_unifiable)?;
        if a1.terms.len() != a2.terms.len() {
            return Err(not_unifiable());
        }
        let mut substitutions = Vec::new();
        for (t1, t2) in a1.terms.iter().zip(&a2.terms) {
            match unify_terms(t1, t2) {
                Some(sigma) if sigma.is_empty() => {}
                Some(sigma) => substitutions.push(sigma),
                None => {
                    log::debug!("no local unifier for `{}` and `{}` at `{}` / `{}`", l1, l2, t1, t2);
                    return Err(not_unifiable());
                }
            }
        }
        Ok(Unifier { substitutions })
    }

    /// Two clauses are unifiable when every literal of one unifies with every literal of the other.
    pub fn for_clauses(c1: &Clause, c2: &Clause) -> Result<Unifier> {
        let mut substitutions = Vec::new();
        for l1 in c1.literals() {
            for l2 in c2.literals() {
                let unifier = Unifier::for_literals(l1, l2).map_err(|_| LogicError::NotUnifiable {
                    left: c1.to_string(),
                    right: c2.to_string(),
                })?;
                substitutions.extend(unifier.substitutions);
            }
        }
        Ok(Unifier { substitutions })
    }

    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    pub fn is_identity(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// Whether applying the unifier really makes `l1` and `l2` equal.
    ///
    /// Fails when one variable was bound to different terms at different positions.
    pub fn unifies(&self, l1: &Sentence, l2: &Sentence) -> bool {
        let (mut a, mut b) = (l1.copy(), l2.copy());
        self.apply(&mut a);
        self.apply(&mut b);
        a == b
    }

    /// Apply every substitution, in order, to the whole sentence.
    pub fn apply(&self, sentence: &mut Sentence) {
        for sigma in &self.substitutions {
            sigma.apply(sentence);
        }
    }
}

/// Whether two literals are locally unifiable.
pub fn literals_unifiable(l1: &Sentence, l2: &Sentence) -> bool {
    Unifier::for_literals(l1, l2).is_ok()
}
