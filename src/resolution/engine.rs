//! Resolvents and the saturation loop.

use std::collections::HashSet;
use std::sync::Arc;

use crate::syntax::{Clause, ClauseSet, Sentence};

/// Outcome of saturating a clause set.
#[derive(Debug, Clone)]
pub enum ResolutionResult {
    /// The empty clause was derived; it carries the whole derivation.
    Refutation(Arc<Clause>),
    /// No new resolvent could be formed
    Saturated,
    /// The round bound was reached first
    ResourceLimit,
}

impl ResolutionResult {
    pub fn is_refutation(&self) -> bool {
        matches!(self, ResolutionResult::Refutation(_))
    }

    pub fn empty_clause(&self) -> Option<&Arc<Clause>> {
        match self {
            ResolutionResult::Refutation(clause) => Some(clause),
            _ => None,
        }
    }
}

/// Same predicate symbol, opposite polarity. Arguments are not compared.
pub fn contradicting(l1: &Sentence, l2: &Sentence) -> bool {
    match (l1.literal_parts(l1.root()), l2.literal_parts(l2.root())) {
        (Some((a1, pos1)), Some((a2, pos2))) => a1.predicate == a2.predicate && pos1 != pos2,
        _ => false,
    }
}

/// Whether some literal of `k1` contradicts some literal of `k2`.
pub fn resolvable(k1: &Clause, k2: &Clause) -> bool {
    k1.literals()
        .iter()
        .any(|l1| k2.literals().iter().any(|l2| contradicting(l1, l2)))
}

/// One resolvent per contradicting literal pair of `k1` and `k2`.
pub fn resolvents(k1: &Arc<Clause>, k2: &Arc<Clause>) -> Vec<Clause> {
    let mut out = Vec::new();
    for (i, l1) in k1.literals().iter().enumerate() {
        for (j, l2) in k2.literals().iter().enumerate() {
            if !contradicting(l1, l2) {
                continue;
            }
            let literals = k1
                .literals()
                .iter()
                .enumerate()
                .filter(|(m, _)| *m != i)
                .map(|(_, l)| l.clone())
                .chain(
                    k2.literals()
                        .iter()
                        .enumerate()
                        .filter(|(m, _)| *m != j)
                        .map(|(_, l)| l.clone()),
                )
                .collect();
            out.push(Clause::derived(literals, Arc::clone(k1), Arc::clone(k2)));
        }
    }
    out
}

/// Resolve every pair of clauses until the empty clause appears or nothing new is derived.
///
/// New resolvents join the set after each round. `rounds` bounds the number
/// of rounds.
pub fn saturate(clauses: ClauseSet, rounds: Option<usize>) -> ResolutionResult {
    let mut set: Vec<Arc<Clause>> = Vec::new();
    let mut keys: HashSet<Vec<String>> = HashSet::new();
    for clause in clauses.iter() {
        if clause.is_empty() {
            return ResolutionResult::Refutation(Arc::clone(clause));
        }
        if keys.insert(clause.key()) {
            set.push(Arc::clone(clause));
        }
    }

    let mut round = 0usize;
    loop {
        if rounds.map_or(false, |max| round >= max) {
            log::debug!("resolution stopped after {} rounds with {} clauses", round, set.len());
            return ResolutionResult::ResourceLimit;
        }
        round += 1;
        let mut fresh: Vec<Arc<Clause>> = Vec::new();
        for i in 0..set.len() {
            for j in (i + 1)..set.len() {
                if !resolvable(&set[i], &set[j]) {
                    continue;
                }
                for resolvent in resolvents(&set[i], &set[j]) {
                    if resolvent.is_empty() {
                        log::debug!("empty clause in round {} from {} and {}", round, set[i], set[j]);
                        return ResolutionResult::Refutation(Arc::new(resolvent));
                    }
                    if resolvent.is_circular() {
                        continue;
                    }
                    if keys.insert(resolvent.key()) {
                        fresh.push(Arc::new(resolvent));
                    }
                }
            }
        }
        log::trace!(target: "resolution", "round {}: {} clauses, {} new", round, set.len(), fresh.len());
        if fresh.is_empty() {
            return ResolutionResult::Saturated;
        }
        set.extend(fresh);
    }
}
