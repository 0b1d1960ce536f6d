//! fologic: a first-order logic engine
//!
//! Parses sentences in glyph notation, rewrites them to prenex, conjunctive
//! and Skolem normal forms, evaluates them in finite structures and proves
//! conclusions by resolution refutation.

pub mod config;
pub mod error;
pub mod inference;
pub mod normalize;
pub mod parser;
pub mod repl;
pub mod resolution;
pub mod semantics;
pub mod session;
pub mod syntax;
pub mod transform;
pub mod unify;

pub use config::EngineConfig;
pub use error::{LogicError, Result};
pub use session::Session;
