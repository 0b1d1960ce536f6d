//! Rules over binary connectives.

use super::{and_or, binary, pairwise_distinct, TransformationRule};
use crate::syntax::{Connective, NodeId, Sentence};

/// `P∧P ⇒ P`, `P∨P ⇒ P`
#[derive(Debug, Clone, Copy)]
pub struct Idempotence;

impl TransformationRule for Idempotence {
    fn name(&self) -> &'static str {
        "Idempotence"
    }

    fn is_applicable(&self, s: &Sentence, id: NodeId) -> bool {
        and_or(s, id).map_or(false, |(_, p, q)| s.key(p) == s.key(q))
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let (_, p, _) = and_or(s, id)?;
        self.is_applicable(s, id).then(|| s.subtree(p))
    }
}

/// `P∘Q ⇒ Q∘P`
#[derive(Debug, Clone, Copy)]
pub struct Commutativity;

impl TransformationRule for Commutativity {
    fn name(&self) -> &'static str {
        "Commutativity"
    }

    fn is_applicable(&self, s: &Sentence, id: NodeId) -> bool {
        and_or(s, id).is_some()
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let (c, p, q) = and_or(s, id)?;
        Some(Sentence::connective(c, vec![s.subtree(q), s.subtree(p)]))
    }
}

/// `(F∘G)∘H ⇒ F∘(G∘H)` and `F∘(G∘H) ⇒ (F∘G)∘H` for pairwise distinct F, G, H.
#[derive(Debug, Clone, Copy)]
pub struct Associativity;

impl TransformationRule for Associativity {
    fn name(&self) -> &'static str {
        "Associativity"
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let (c, p, q) = and_or(s, id)?;
        if s.connective_of(p) == Some(c) {
            let (f, g, h) = (s.p(p)?, s.q(p)?, q);
            if pairwise_distinct(s, [f, g, h]) {
                let inner = Sentence::connective(c, vec![s.subtree(g), s.subtree(h)]);
                return Some(Sentence::connective(c, vec![s.subtree(f), inner]));
            }
        }
        if s.connective_of(q) == Some(c) {
            let (f, g, h) = (p, s.p(q)?, s.q(q)?);
            if pairwise_distinct(s, [f, g, h]) {
                let inner = Sentence::connective(c, vec![s.subtree(f), s.subtree(g)]);
                return Some(Sentence::connective(c, vec![inner, s.subtree(h)]));
            }
        }
        None
    }
}

/// `F∧(F∨G) ⇒ F`, `F∨(F∧G) ⇒ F`, either side.
#[derive(Debug, Clone, Copy)]
pub struct Absorption;

impl TransformationRule for Absorption {
    fn name(&self) -> &'static str {
        "Absorption"
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let (c, p, q) = and_or(s, id)?;
        let opposite = c.opposite();
        let absorbs = |outer: NodeId, inner: NodeId| {
            s.connective_of(inner) == opposite
                && s.children(inner).iter().any(|child| s.key(*child) == s.key(outer))
        };
        if absorbs(p, q) {
            Some(s.subtree(p))
        } else if absorbs(q, p) {
            Some(s.subtree(q))
        } else {
            None
        }
    }
}

/// `F∘(G∘'H) ⇒ (F∘G)∘'(F∘H)` and `(F∘'G)∘H ⇒ (F∘H)∘'(G∘H)` for opposite ∘, ∘'.
#[derive(Debug, Clone, Copy)]
pub struct Distributivity;

impl Distributivity {
    /// Distribute at `id`; with `require_distinct` the operands must be pairwise distinct.
    pub(crate) fn distribute(s: &Sentence, id: NodeId, require_distinct: bool) -> Option<Sentence> {
        let (c, p, q) = and_or(s, id)?;
        let opposite = c.opposite()?;
        if s.connective_of(q) == Some(opposite) {
            let (f, g, h) = (p, s.p(q)?, s.q(q)?);
            if !require_distinct || pairwise_distinct(s, [f, g, h]) {
                let left = Sentence::connective(c, vec![s.subtree(f), s.subtree(g)]);
                let right = Sentence::connective(c, vec![s.subtree(f), s.subtree(h)]);
                return Some(Sentence::connective(opposite, vec![left, right]));
            }
        }
        if s.connective_of(p) == Some(opposite) {
            let (f, g, h) = (s.p(p)?, s.q(p)?, q);
            if !require_distinct || pairwise_distinct(s, [f, g, h]) {
                let left = Sentence::connective(c, vec![s.subtree(f), s.subtree(h)]);
                let right = Sentence::connective(c, vec![s.subtree(g), s.subtree(h)]);
                return Some(Sentence::connective(opposite, vec![left, right]));
            }
        }
        None
    }
}

impl TransformationRule for Distributivity {
    fn name(&self) -> &'static str {
        "Distributivity"
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        Distributivity::distribute(s, id, true)
    }
}

/// `F→G ⇒ ¬F∨G`
#[derive(Debug, Clone, Copy)]
pub struct Implication;

impl TransformationRule for Implication {
    fn name(&self) -> &'static str {
        "Implication"
    }

    fn is_applicable(&self, s: &Sentence, id: NodeId) -> bool {
        s.connective_of(id) == Some(Connective::Implication)
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        match binary(s, id)? {
            (Connective::Implication, p, q) => {
                Some(Sentence::or(Sentence::not(s.subtree(p)), s.subtree(q)))
            }
            _ => None,
        }
    }
}

/// `F↔G ⇒ (F→G)∧(G→F)`
#[derive(Debug, Clone, Copy)]
pub struct Coimplication;

impl TransformationRule for Coimplication {
    fn name(&self) -> &'static str {
        "Coimplication"
    }

    fn is_applicable(&self, s: &Sentence, id: NodeId) -> bool {
        s.connective_of(id) == Some(Connective::Biconditional)
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        match binary(s, id)? {
            (Connective::Biconditional, p, q) => Some(Sentence::and(
                Sentence::implies(s.subtree(p), s.subtree(q)),
                Sentence::implies(s.subtree(q), s.subtree(p)),
            )),
            _ => None,
        }
    }
}

/// `F→G ⇒ ¬G→¬F`
#[derive(Debug, Clone, Copy)]
pub struct Contraposition;

impl TransformationRule for Contraposition {
    fn name(&self) -> &'static str {
        "Contraposition"
    }

    fn is_applicable(&self, s: &Sentence, id: NodeId) -> bool {
        s.connective_of(id) == Some(Connective::Implication)
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        match binary(s, id)? {
            (Connective::Implication, p, q) => Some(Sentence::implies(
                Sentence::not(s.subtree(q)),
                Sentence::not(s.subtree(p)),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_sentence;

    fn rewrite_root(rule: &dyn TransformationRule, text: &str) -> Option<String> {
        let s = parse_sentence(text).unwrap();
        rule.rewrite(&s, s.root()).map(|r| r.to_string())
    }

    // === Idempotence / Commutativity ===

    #[test]
    fn test_idempotence() {
        assert_eq!(rewrite_root(&Idempotence, "(P(x) ∧ P(x))"), Some("P(x)".into()));
        assert_eq!(rewrite_root(&Idempotence, "(P(x) ∧ P(y))"), None);
        assert_eq!(rewrite_root(&Idempotence, "(P(x) → P(x))"), None);
    }

    #[test]
    fn test_commutativity() {
        assert_eq!(rewrite_root(&Commutativity, "(P(x) ∨ Q(x))"), Some("(Q(x) ∨ P(x))".into()));
        assert_eq!(rewrite_root(&Commutativity, "(P(x) ↔ Q(x))"), None);
    }

    // === Associativity ===

    #[test]
    fn test_associativity_left_to_right() {
        assert_eq!(
            rewrite_root(&Associativity, "((A() ∧ B()) ∧ C())"),
            Some("(A() ∧ (B() ∧ C()))".into())
        );
    }

    #[test]
    fn test_associativity_right_to_left() {
        assert_eq!(
            rewrite_root(&Associativity, "(A() ∨ (B() ∨ C()))"),
            Some("((A() ∨ B()) ∨ C())".into())
        );
    }

    #[test]
    fn test_associativity_requires_distinct_operands() {
        assert_eq!(rewrite_root(&Associativity, "((A() ∧ A()) ∧ C())"), None);
        assert_eq!(rewrite_root(&Associativity, "((A() ∧ B()) ∨ C())"), None);
    }

    // === Absorption / Distributivity ===

    #[test]
    fn test_absorption() {
        assert_eq!(rewrite_root(&Absorption, "(A() ∧ (A() ∨ B()))"), Some("A()".into()));
        assert_eq!(rewrite_root(&Absorption, "((B() ∧ A()) ∨ A())"), Some("A()".into()));
        assert_eq!(rewrite_root(&Absorption, "(A() ∧ (A() ∧ B()))"), None);
    }

    #[test]
    fn test_distributivity_right_operand() {
        assert_eq!(
            rewrite_root(&Distributivity, "(A() ∨ (B() ∧ C()))"),
            Some("((A() ∨ B()) ∧ (A() ∨ C()))".into())
        );
    }

    #[test]
    fn test_distributivity_left_operand() {
        assert_eq!(
            rewrite_root(&Distributivity, "((A() ∧ B()) ∨ C())"),
            Some("((A() ∨ C()) ∧ (B() ∨ C()))".into())
        );
    }

    #[test]
    fn test_distributivity_strict_and_unchecked() {
        let s = parse_sentence("(A() ∨ (A() ∧ B()))").unwrap();
        assert!(!Distributivity.is_applicable(&s, s.root()));
        let forced = Distributivity::distribute(&s, s.root(), false).unwrap();
        assert_eq!(forced.to_string(), "((A() ∨ A()) ∧ (A() ∨ B()))");
    }

    // === Implications ===

    #[test]
    fn test_implication() {
        assert_eq!(rewrite_root(&Implication, "(P(x) → Q(x))"), Some("(¬P(x) ∨ Q(x))".into()));
    }

    #[test]
    fn test_coimplication() {
        assert_eq!(
            rewrite_root(&Coimplication, "(P(x) ↔ Q(x))"),
            Some("((P(x) → Q(x)) ∧ (Q(x) → P(x)))".into())
        );
    }

    #[test]
    fn test_contraposition() {
        assert_eq!(
            rewrite_root(&Contraposition, "(P(x) → Q(x))"),
            Some("(¬Q(x) → ¬P(x))".into())
        );
    }
}
