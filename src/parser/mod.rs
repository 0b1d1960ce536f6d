//! Parser for the glyph notation: `∀x ((P(x) ∧ Q(x)) → ¬R(x))`.

mod parser;
mod scanner;

pub use parser::{parse, parse_sentence};
