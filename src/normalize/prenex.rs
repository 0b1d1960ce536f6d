//! Prenex negation normal form, computed in four rule stages.

use crate::error::Result;
use crate::syntax::{NodeId, Sentence};
use crate::transform::{
    apply_until_fixpoint, CleanedNormalForm, Coimplication, DeMorgan, DoubleNegation, Implication,
    PullQuantifier, PullQuantifier2, QuantifierNegation, TransformationRule,
};

pub const CLEANING: &[&dyn TransformationRule] = &[&CleanedNormalForm];

pub const IMPLICATION_ELIMINATION: &[&dyn TransformationRule] = &[&Coimplication, &Implication];

pub const NEGATION_NORMAL_FORM: &[&dyn TransformationRule] =
    &[&QuantifierNegation, &DeMorgan, &DoubleNegation];

pub const QUANTIFIER_PULLING: &[&dyn TransformationRule] = &[&PullQuantifier, &PullQuantifier2];

/// The first node below the leading quantifier chain.
pub fn matrix(sentence: &Sentence) -> NodeId {
    let mut id = sentence.root();
    while sentence.quantifier_of(id).is_some() {
        match sentence.p(id) {
            Some(body) => id = body,
            None => break,
        }
    }
    id
}

/// An equivalent sentence in prenex negation normal form. The input is left untouched.
///
/// Each stage runs to its own fixpoint before the next starts; `limit` bounds
/// the rule firings of every stage.
pub fn get_prenex_nnf(sentence: &Sentence, limit: Option<usize>) -> Result<Sentence> {
    let mut out = sentence.copy();
    let stages = [
        ("cleaning", CLEANING),
        ("implication elimination", IMPLICATION_ELIMINATION),
        ("negation normal form", NEGATION_NORMAL_FORM),
        ("quantifier pulling", QUANTIFIER_PULLING),
    ];
    for (name, rules) in stages {
        let fired = apply_until_fixpoint(&mut out, rules, limit)?;
        log::debug!("{}: {} rewrites, now {}", name, fired, out);
    }
    Ok(out)
}
