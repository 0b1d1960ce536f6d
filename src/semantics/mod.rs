//! Finite-domain semantics: universes, structures, interpretations and truth evaluation.

mod assignment;
mod enumerate;
mod interpretation;
mod structure;
mod universe;

pub use assignment::{QuantifierBindings, VariableAssignment};
pub use enumerate::{enumerate_interpretations, interpretation_count, tuples};
pub use interpretation::{evaluate, Interpretation, TruthValue, Witness};
pub use structure::{read, write, Function, PredicateRelation, SharedStructure, Structure};
pub use universe::{next_id, Element, ElementId, MapUniverse, Universe};
