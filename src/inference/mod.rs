//! Inference rules and resolution proofs.

mod instantiation;
mod rules;

pub use instantiation::{ExistentialInstantiation, UniversalInstantiation};
pub use rules::{AndElimination, AndIntroduction, ModusPonens, ModusTollens};

use crate::config::EngineConfig;
use crate::error::{LogicError, Result};
use crate::normalize::{get_clause_set, get_cnf};
use crate::resolution::{saturate, ResolutionResult};
use crate::syntax::Sentence;

/// A sound inference step with a guard.
pub trait InferenceRule {
    fn name(&self) -> &'static str;

    /// Whether `premises` have the shape this rule needs.
    fn is_possible(&self, premises: &[Sentence]) -> bool;

    /// The conclusion, or `InferenceNotPossible` when the guard fails.
    fn conclude(&mut self, premises: &[Sentence]) -> Result<Sentence>;
}

fn not_possible(rule: &dyn InferenceRule, premises: &[Sentence]) -> LogicError {
    LogicError::InferenceNotPossible {
        rule: rule.name().to_string(),
        premises: premises
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Try to show `p1, p2 ⊢ conclusion` by refuting the clauses of `p1`, `p2` and `¬conclusion`.
pub fn resolution_proof(
    p1: &Sentence,
    p2: &Sentence,
    conclusion: &Sentence,
    config: &EngineConfig,
) -> Result<ResolutionResult> {
    let mut clauses = get_clause_set(p1, config.rewrite_limit)?;
    clauses.join(get_clause_set(p2, config.rewrite_limit)?);
    let negated = get_cnf(&Sentence::not(conclusion.copy()), config.rewrite_limit)?;
    clauses.join(get_clause_set(&negated, config.rewrite_limit)?);
    log::debug!("resolution proof over {}", clauses);
    Ok(saturate(clauses, config.resolution_rounds))
}
