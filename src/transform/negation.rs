//! Rules that move negations inward.

use super::{and_or, TransformationRule};
use crate::syntax::{Connective, NodeId, Quantifier, Sentence};

fn negated(s: &Sentence, id: NodeId) -> Option<NodeId> {
    if s.connective_of(id) == Some(Connective::Negation) {
        s.p(id)
    } else {
        None
    }
}

/// `¬¬F ⇒ F`
#[derive(Debug, Clone, Copy)]
pub struct DoubleNegation;

impl TransformationRule for DoubleNegation {
    fn name(&self) -> &'static str {
        "DoubleNegation"
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let inner = negated(s, negated(s, id)?)?;
        Some(s.subtree(inner))
    }
}

/// `¬(F∧G) ⇒ ¬F∨¬G`, `¬(F∨G) ⇒ ¬F∧¬G`
#[derive(Debug, Clone, Copy)]
pub struct DeMorgan;

impl TransformationRule for DeMorgan {
    fn name(&self) -> &'static str {
        "DeMorgan"
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let (c, f, g) = and_or(s, negated(s, id)?)?;
        Some(Sentence::connective(
            c.opposite()?,
            vec![Sentence::not(s.subtree(f)), Sentence::not(s.subtree(g))],
        ))
    }
}

/// `¬∀x F ⇒ ∃x ¬F`, `¬∃x F ⇒ ∀x ¬F`
#[derive(Debug, Clone, Copy)]
pub struct QuantifierNegation;

impl TransformationRule for QuantifierNegation {
    fn name(&self) -> &'static str {
        "QuantifierNegation"
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let inner = negated(s, id)?;
        let q = s.quantifier_of(inner)?;
        let flipped = Quantifier {
            kind: q.kind.opposite(),
            var: q.var.clone(),
        };
        Some(Sentence::quantified(flipped, Sentence::not(s.subtree(s.p(inner)?))))
    }
}
