//! Error taxonomy shared by every stage of the engine.

use thiserror::Error;

/// Failures raised by parsing, normal-form conversion, evaluation and proof search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// Parentheses do not balance.
    #[error("unbalanced brackets at position {position} in `{text}`")]
    Bracket { text: String, position: usize },

    /// Balanced input that still does not form a sentence.
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("symbol `{0}` is not registered in the signature")]
    Signature(String),

    #[error("`{0}` is not a literal")]
    NotLiteral(String),

    #[error("sentence is not in prenex normal form: {0}")]
    FormNotPrenex(String),

    #[error("sentence is not in conjunctive normal form: {0}")]
    NotCnf(String),

    /// A predicate's arity disagrees with the number of terms it was built with.
    #[error("predicate `{name}` has arity {arity} but was given {given} terms")]
    ArityMismatch {
        name: String,
        arity: usize,
        given: usize,
    },

    #[error("no element with id {0} in the universe")]
    ElementNotFound(usize),

    #[error("`{left}` and `{right}` are not unifiable")]
    NotUnifiable { left: String, right: String },

    /// The premises do not have the shape an inference rule needs.
    #[error("{rule} does not apply to {premises}")]
    InferenceNotPossible { rule: String, premises: String },

    #[error("rewrite limit of {0} rule applications exceeded")]
    RewriteLimit(usize),

    #[error("enumeration would produce {count} interpretations, limit is {limit}")]
    EnumerationTooLarge { count: String, limit: usize },

    #[error("no interpretation at index {0}")]
    InterpretationNotFound(usize),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LogicError>;
