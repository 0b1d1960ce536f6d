//! Rules that move quantifiers outward and keep bound variables distinct.

use std::collections::HashSet;

use super::{and_or, TransformationRule};
use crate::syntax::{Connective, NodeId, QuantifierKind, Sentence, Term, Var};
use crate::unify::Substitution;

/// `(Qx.F)∘G ⇒ Qx.(F∘G)` and `G∘(Qx.F) ⇒ Qx.(F∘G)` when x is not free in G.
#[derive(Debug, Clone, Copy)]
pub struct PullQuantifier;

impl TransformationRule for PullQuantifier {
    fn name(&self) -> &'static str {
        "PullQuantifier"
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let (c, p, q) = and_or(s, id)?;
        for (quantified, other) in [(p, q), (q, p)] {
            if let Some(quant) = s.quantifier_of(quantified) {
                if !s.is_variable_free(other, &quant.var) {
                    let body = s.p(quantified)?;
                    let inner = Sentence::connective(c, vec![s.subtree(body), s.subtree(other)]);
                    return Some(Sentence::quantified(quant.clone(), inner));
                }
            }
        }
        None
    }
}

/// `(∀x.F)∧(∀x.G) ⇒ ∀x.(F∧G)` and `(∃x.F)∨(∃x.G) ⇒ ∃x.(F∨G)`
#[derive(Debug, Clone, Copy)]
pub struct PullQuantifier2;

impl TransformationRule for PullQuantifier2 {
    fn name(&self) -> &'static str {
        "PullQuantifier2"
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let (c, p, q) = and_or(s, id)?;
        let (qp, qq) = (s.quantifier_of(p)?, s.quantifier_of(q)?);
        let distributes = matches!(
            (qp.kind, c),
            (QuantifierKind::Universal, Connective::Conjunction)
                | (QuantifierKind::Existential, Connective::Disjunction)
        );
        if qp != qq || !distributes {
            return None;
        }
        let inner = Sentence::connective(c, vec![s.subtree(s.p(p)?), s.subtree(s.p(q)?)]);
        Some(Sentence::quantified(qp.clone(), inner))
    }
}

/// Renames a quantifier that rebinds a variable already bound higher up or
/// further left, or that also occurs free, so every quantifier binds a
/// distinct variable.
#[derive(Debug, Clone, Copy)]
pub struct CleanedNormalForm;

impl CleanedNormalForm {
    /// The first quantifier, in breadth-first order, whose variable was already seen.
    fn duplicate(s: &Sentence, id: NodeId) -> Option<NodeId> {
        let mut seen: HashSet<Var> = s.free_variables(id).into_iter().collect();
        s.quantifiers_below(id).into_iter().find(|q| {
            s.quantifier_of(*q)
                .map_or(false, |quant| !seen.insert(quant.var.clone()))
        })
    }
}

impl TransformationRule for CleanedNormalForm {
    fn name(&self) -> &'static str {
        "CleanedNormalForm"
    }

    fn is_applicable(&self, s: &Sentence, id: NodeId) -> bool {
        CleanedNormalForm::duplicate(s, id).is_some()
    }

    fn rewrite(&self, s: &Sentence, id: NodeId) -> Option<Sentence> {
        let mut out = s.subtree(id);
        let target = CleanedNormalForm::duplicate(&out, out.root())?;
        let old = out.quantifier_of(target)?.var.clone();
        let body = out.p(target)?;
        let fresh = Var::fresh();
        let sigma = Substitution::singleton(old.clone(), Term::Var(fresh.clone()));
        if let Some(q) = out.quantifier_mut(target) {
            q.var = fresh;
        }
        rename_bound(&mut out, body, &old, &sigma);
        Some(out)
    }
}

/// Apply `sigma` to the atoms below `id`, stopping at quantifiers that rebind `var`.
fn rename_bound(s: &mut Sentence, id: NodeId, var: &Var, sigma: &Substitution) {
    if s.quantifier_of(id).map_or(false, |q| &q.var == var) {
        return;
    }
    if let Some(atom) = s.atom_mut(id) {
        atom.terms = atom.terms.iter().map(|t| sigma.apply_to_term(t)).collect();
        return;
    }
    for child in s.children(id).to_vec() {
        rename_bound(s, child, var, sigma);
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

    // === PullQuantifier ===

    #[test]
    fn test_pull_from_left() {
        assert_eq!(
            rewrite_root(&PullQuantifier, "(∀x P(x) ∧ Q(y))"),
            Some("∀x (P(x) ∧ Q(y))".into())
        );
    }

    #[test]
    fn test_pull_from_right() {
        assert_eq!(
            rewrite_root(&PullQuantifier, "(Q(y) ∨ ∃x P(x))"),
            Some("∃x (P(x) ∨ Q(y))".into())
        );
    }

    #[test]
    fn test_pull_blocked_by_free_occurrence() {
        assert_eq!(rewrite_root(&PullQuantifier, "(∀x P(x) ∧ Q(x))"), None);
        assert_eq!(rewrite_root(&PullQuantifier, "(∀x P(x) → Q(y))"), None);
    }

    // === PullQuantifier2 ===

    #[test]
    fn test_pull_shared_quantifier() {
        assert_eq!(
            rewrite_root(&PullQuantifier2, "(∀x P(x) ∧ ∀x Q(x))"),
            Some("∀x (P(x) ∧ Q(x))".into())
        );
        assert_eq!(
            rewrite_root(&PullQuantifier2, "(∃x P(x) ∨ ∃x Q(x))"),
            Some("∃x (P(x) ∨ Q(x))".into())
        );
    }

    #[test]
    fn test_pull_shared_quantifier_rejects_non_distributing_pairs() {
        assert_eq!(rewrite_root(&PullQuantifier2, "(∀x P(x) ∨ ∀x Q(x))"), None);
        assert_eq!(rewrite_root(&PullQuantifier2, "(∀x P(x) ∧ ∀y Q(y))"), None);
    }

    // === CleanedNormalForm ===

    #[test]
    fn test_clean_renames_later_duplicate() {
        let s = parse_sentence("(∀x P(x) ∧ ∃x Q(x))").unwrap();
        assert!(CleanedNormalForm.is_applicable(&s, s.root()));
        let out = CleanedNormalForm.rewrite(&s, s.root()).unwrap();
        let quantifiers = out.quantifiers_below(out.root());
        let first = out.quantifier_of(quantifiers[0]).unwrap().var.clone();
        let second = out.quantifier_of(quantifiers[1]).unwrap().var.clone();
        assert_eq!(first, Var::new("x"));
        assert_ne!(second, Var::new("x"));
        assert!(out.to_string().starts_with("(∀x P(x) ∧ ∃"));
        assert!(out.to_string().contains(&format!("Q({})", second)));
        assert!(!CleanedNormalForm.is_applicable(&out, out.root()));
    }

    #[test]
    fn test_clean_respects_inner_rebinding() {
        let s = parse_sentence("∀x (P(x) ∧ ∃x (Q(x) ∧ ∀x R(x)))").unwrap();
        let out = CleanedNormalForm.rewrite(&s, s.root()).unwrap();
        let text = out.to_string();
        assert!(text.contains("∀x R(x)"), "{}", text);
        assert!(text.starts_with("∀x (P(x) ∧ ∃"), "{}", text);
    }

    #[test]
    fn test_clean_renames_quantifier_over_free_variable() {
        let s = parse_sentence("(P(x) ∧ ∀x Q(x))").unwrap();
        let out = CleanedNormalForm.rewrite(&s, s.root()).unwrap();
        let text = out.to_string();
        assert!(text.starts_with("(P(x) ∧ ∀"), "{}", text);
        assert!(!text.contains("∀x"), "{}", text);
        assert!(!CleanedNormalForm.is_applicable(&out, out.root()));
    }

    #[test]
    fn test_clean_not_applicable_to_distinct_variables() {
        let s = parse_sentence("∀x ∃y P(x, y)").unwrap();
        assert!(!CleanedNormalForm.is_applicable(&s, s.root()));
    }
}
