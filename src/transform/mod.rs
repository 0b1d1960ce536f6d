//! Equivalence-preserving rewrite rules and the fixpoint driver that applies them.

mod connective;
mod driver;
mod negation;
mod quantifier;

pub use connective::{
    Absorption, Associativity, Coimplication, Commutativity, Contraposition, Distributivity,
    Idempotence, Implication,
};
pub use driver::{apply_until_fixpoint, find_applicable};
pub use negation::{DeMorgan, DoubleNegation, QuantifierNegation};
pub use quantifier::{CleanedNormalForm, PullQuantifier, PullQuantifier2};

use crate::syntax::{Connective, NodeId, Sentence};

/// A rewrite `S ⇒ S'` with `S ≡ S'`, tested and applied at a single node.
pub trait TransformationRule {
    fn name(&self) -> &'static str;

    fn is_applicable(&self, sentence: &Sentence, node: NodeId) -> bool {
        self.rewrite(sentence, node).is_some()
    }

    /// The equivalent replacement for `node`, or `None` when the rule does not apply there.
    fn rewrite(&self, sentence: &Sentence, node: NodeId) -> Option<Sentence>;
}

/// Every rule, in catalog order.
pub fn catalog() -> [&'static dyn TransformationRule; 14] {
    [
        &Idempotence,
        &Commutativity,
        &Associativity,
        &Absorption,
        &Distributivity,
        &DoubleNegation,
        &DeMorgan,
        &Implication,
        &Coimplication,
        &Contraposition,
        &QuantifierNegation,
        &PullQuantifier,
        &PullQuantifier2,
        &CleanedNormalForm,
    ]
}

/// Connective and operands of a binary node.
fn binary(s: &Sentence, id: NodeId) -> Option<(Connective, NodeId, NodeId)> {
    let c = s.connective_of(id)?;
    if c.is_unary() {
        return None;
    }
    Some((c, s.p(id)?, s.q(id)?))
}

/// Connective and operands of a conjunction or disjunction.
fn and_or(s: &Sentence, id: NodeId) -> Option<(Connective, NodeId, NodeId)> {
    binary(s, id).filter(|(c, _, _)| c.is_and_or())
}

/// Whether the printed forms of the given nodes are pairwise different.
fn pairwise_distinct(s: &Sentence, ids: [NodeId; 3]) -> bool {
    let [a, b, c] = ids.map(|id| s.key(id));
    a != b && b != c && a != c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<&str> = catalog().iter().map(|r| r.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 14);
    }
}
