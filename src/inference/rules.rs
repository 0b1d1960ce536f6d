//! Propositional natural-deduction rules.

use super::{not_possible, InferenceRule};
use crate::error::Result;
use crate::syntax::{Connective, Sentence};
use crate::unify::Unifier;

/// How `fact` instantiates `pattern`: equal, or the same literal up to a local unifier.
fn matching(pattern: &Sentence, fact: &Sentence) -> Option<Unifier> {
    if pattern == fact {
        return Some(Unifier::default());
    }
    let (a1, pos1) = pattern.literal_parts(pattern.root())?;
    let (a2, pos2) = fact.literal_parts(fact.root())?;
    if a1.predicate != a2.predicate || pos1 != pos2 {
        return None;
    }
    Unifier::for_literals(pattern, fact)
        .ok()
        .filter(|unifier| unifier.unifies(pattern, fact))
}

/// Antecedent and consequent of an implication.
fn implication(s: &Sentence) -> Option<(Sentence, Sentence)> {
    let root = s.root();
    if s.connective_of(root) != Some(Connective::Implication) {
        return None;
    }
    Some((s.subtree(s.p(root)?), s.subtree(s.q(root)?)))
}

/// `P, P→Q ⊢ Q`
#[derive(Debug, Clone, Copy, Default)]
pub struct ModusPonens;

impl ModusPonens {
    fn conclusion(premises: &[Sentence]) -> Option<Sentence> {
        let [fact, rule, ..] = premises else { return None };
        let (antecedent, mut consequent) = implication(rule)?;
        matching(&antecedent, fact)?.apply(&mut consequent);
        Some(consequent)
    }
}

impl InferenceRule for ModusPonens {
    fn name(&self) -> &'static str {
        "modus ponens"
    }

    fn is_possible(&self, premises: &[Sentence]) -> bool {
        ModusPonens::conclusion(premises).is_some()
    }

    fn conclude(&mut self, premises: &[Sentence]) -> Result<Sentence> {
        ModusPonens::conclusion(premises).ok_or_else(|| not_possible(&*self, premises))
    }
}

/// `P→Q, ¬Q ⊢ ¬P`
#[derive(Debug, Clone, Copy, Default)]
pub struct ModusTollens;

impl ModusTollens {
    fn conclusion(premises: &[Sentence]) -> Option<Sentence> {
        let [rule, denial, ..] = premises else { return None };
        let (antecedent, consequent) = implication(rule)?;
        let root = denial.root();
        if denial.connective_of(root) != Some(Connective::Negation) {
            return None;
        }
        let denied = denial.subtree(denial.p(root)?);
        let mut negated = Sentence::not(antecedent);
        matching(&consequent, &denied)?.apply(&mut negated);
        Some(negated)
    }
}

impl InferenceRule for ModusTollens {
    fn name(&self) -> &'static str {
        "modus tollens"
    }

    fn is_possible(&self, premises: &[Sentence]) -> bool {
        ModusTollens::conclusion(premises).is_some()
    }

    fn conclude(&mut self, premises: &[Sentence]) -> Result<Sentence> {
        ModusTollens::conclusion(premises).ok_or_else(|| not_possible(&*self, premises))
    }
}

/// `P, Q ⊢ P∧Q`
#[derive(Debug, Clone, Copy, Default)]
pub struct AndIntroduction;

impl InferenceRule for AndIntroduction {
    fn name(&self) -> &'static str {
        "and-introduction"
    }

    fn is_possible(&self, premises: &[Sentence]) -> bool {
        premises.len() >= 2
    }

    fn conclude(&mut self, premises: &[Sentence]) -> Result<Sentence> {
        match premises {
            [p, q, ..] => Ok(Sentence::and(p.copy(), q.copy())),
            _ => Err(not_possible(&*self, premises)),
        }
    }
}

/// `P∧Q ⊢ P`, or `P∧Q ⊢ Q` when `right` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndElimination {
    pub right: bool,
}

impl InferenceRule for AndElimination {
    fn name(&self) -> &'static str {
        "and-elimination"
    }

    fn is_possible(&self, premises: &[Sentence]) -> bool {
        premises
            .first()
            .map_or(false, |p| p.connective_of(p.root()) == Some(Connective::Conjunction))
    }

    fn conclude(&mut self, premises: &[Sentence]) -> Result<Sentence> {
        if !self.is_possible(premises) {
            return Err(not_possible(&*self, premises));
        }
        let p = &premises[0];
        let side = if self.right { p.q(p.root()) } else { p.p(p.root()) };
        side.map(|id| p.subtree(id))
            .ok_or_else(|| not_possible(&*self, premises))
    }
}
