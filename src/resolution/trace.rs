//! Derivation traces for resolvents.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::syntax::Clause;

/// One resolution step, as canonical clause strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionStep {
    pub left: String,
    pub right: String,
    pub resolvent: String,
}

/// The steps that derive a clause from the input clauses, parents before children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProofTrace {
    pub steps: Vec<ResolutionStep>,
}

impl ProofTrace {
    /// Trace of `clause`. A clause with no parents has an empty trace.
    pub fn of(clause: &Arc<Clause>) -> Self {
        let mut trace = ProofTrace::default();
        let mut visited = HashSet::new();
        trace.collect(clause, &mut visited);
        trace
    }

    fn collect(&mut self, clause: &Arc<Clause>, visited: &mut HashSet<*const Clause>) {
        if !visited.insert(Arc::as_ptr(clause)) {
            return;
        }
        if let Some((left, right)) = clause.parents() {
            self.collect(left, visited);
            self.collect(right, visited);
            self.steps.push(ResolutionStep {
                left: left.to_string(),
                right: right.to_string(),
                resolvent: clause.to_string(),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ProofTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", step.left)?;
            writeln!(f, "{}", step.right)?;
            writeln!(f, "----")?;
            write!(f, "{}", step.resolvent)?;
        }
        Ok(())
    }
}
