//! Propositional-style resolution over clause sets.
//!
//! Literals contradict on predicate symbol and polarity alone; no unifier is
//! computed, so clauses are expected to be Skolemized and close to ground.

mod engine;
mod trace;

pub use engine::{contradicting, resolvable, resolvents, saturate, ResolutionResult};
pub use trace::{ProofTrace, ResolutionStep};
