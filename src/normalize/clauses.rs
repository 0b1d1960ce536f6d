//! Clause extraction from CNF sentences.

use std::collections::HashSet;

use super::{get_cnf, get_prenex_nnf, is_cnf, is_nnf, matrix};
use crate::error::{LogicError, Result};
use crate::syntax::{Clause, ClauseSet, Connective, NodeId, Sentence};

/// Top-level conjuncts below `id`, left to right and deduplicated by printed form.
///
/// Each leaf is walked up to the nearest enclosing conjunction; the operand of
/// that conjunction on the path is the leaf's conjunct.
pub fn conjuncts(sentence: &Sentence, id: NodeId) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for leaf in sentence.leaves(id) {
        let mut cur = leaf;
        while cur != id {
            match sentence.parent(cur) {
                Some(parent) if sentence.connective_of(parent) == Some(Connective::Conjunction) => break,
                Some(parent) => cur = parent,
                None => break,
            }
        }
        if seen.insert(sentence.key(cur)) {
            out.push(cur);
        }
    }
    out
}

/// The literals of a disjunction, left to right.
pub fn split_disjunctions(sentence: &Sentence, id: NodeId) -> Vec<Sentence> {
    let mut literals = Vec::new();
    let mut stack = vec![id];
    while let Some(cur) = stack.pop() {
        if sentence.is_literal(cur) {
            literals.push(sentence.subtree(cur));
        } else {
            stack.extend(sentence.children(cur).iter().rev().copied());
        }
    }
    literals
}

/// The clause set of a sentence. CNF is computed first unless the input is already in negation-normal CNF.
///
/// The leading quantifier prefix is dropped; its variables stay implicitly
/// universally closed.
pub fn get_clause_set(sentence: &Sentence, limit: Option<usize>) -> Result<ClauseSet> {
    let cnf = if is_cnf(sentence) && is_nnf(sentence) {
        sentence.copy()
    } else {
        let converted = get_cnf(&get_prenex_nnf(sentence, limit)?, limit)?;
        if !is_cnf(&converted) {
            return Err(LogicError::NotCnf(converted.to_string()));
        }
        converted
    };
    let body = matrix(&cnf);
    let mut set = ClauseSet::new();
    if cnf.is_disjunction_of_literals(body) {
        set.push(Clause::from_literals(split_disjunctions(&cnf, body))?);
    } else {
        for conjunct in conjuncts(&cnf, body) {
            set.push(Clause::from_literals(split_disjunctions(&cnf, conjunct))?);
        }
    }
    log::debug!("clauses of {}: {}", sentence, set);
    Ok(set)
}
