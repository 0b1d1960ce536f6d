//! Line-oriented REPL over a [`Session`](crate::session::Session).

#[allow(clippy::module_inception)]
mod repl;

pub use repl::{Repl, ReplError};
