//! Engine configuration.

use crate::error::{LogicError, Result};

/// Bounds and defaults for rewriting, proof search and model enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum rule firings in one fixpoint run (None = unbounded).
    pub rewrite_limit: Option<usize>,
    /// Maximum saturation rounds in a resolution proof (None = unbounded).
    pub resolution_rounds: Option<usize>,
    /// Maximum number of interpretations enumeration may build.
    pub max_interpretations: Option<usize>,
    /// Whether `Session::parse` checks symbols against the signature.
    pub check_signature: bool,
    /// Whether Skolemization drops the leading universal quantifiers.
    pub strip_universals: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rewrite_limit: None,
            resolution_rounds: None,
            max_interpretations: Some(1_000_000),
            check_signature: true,
            strip_universals: false,
        }
    }
}

impl EngineConfig {
    /// Update one field from its textual key and value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "rewrite_limit" => self.rewrite_limit = parse_bound(key, value)?,
            "resolution_rounds" => self.resolution_rounds = parse_bound(key, value)?,
            "max_interpretations" => self.max_interpretations = parse_bound(key, value)?,
            "check_signature" => self.check_signature = parse_flag(key, value)?,
            "strip_universals" => self.strip_universals = parse_flag(key, value)?,
            other => return Err(LogicError::Config(format!("unknown option `{}`", other))),
        }
        Ok(())
    }
}

fn parse_bound(key: &str, value: &str) -> Result<Option<usize>> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value
        .parse::<usize>()
        .map(Some)
        .map_err(|_| LogicError::Config(format!("`{}` expects a number or `none`, got `{}`", key, value)))
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => Err(LogicError::Config(format!("`{}` expects true/false, got `{}`", key, value))),
    }
}
