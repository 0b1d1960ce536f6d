//! Conjunctive normal form by distributing disjunctions over conjunctions.

use super::{cnf_at, get_prenex_nnf, is_cnf, is_nnf, is_pnf};
use crate::error::{LogicError, Result};
use crate::syntax::{Connective, NodeId, Sentence};
use crate::transform::Distributivity;

/// An equivalent sentence in CNF. Prenex NNF is computed first unless the input already has it.
pub fn get_cnf(sentence: &Sentence, limit: Option<usize>) -> Result<Sentence> {
    let mut out = if is_pnf(sentence) && is_nnf(sentence) {
        sentence.copy()
    } else {
        get_prenex_nnf(sentence, limit)?
    };
    while !is_cnf(&out) {
        let root = out.root();
        if !push_disjunctions(&mut out, root) {
            return Err(LogicError::NotCnf(out.to_string()));
        }
        out.compact();
    }
    log::debug!("cnf: {}", out);
    Ok(out)
}

/// Distribute every disjunction at or below `id` that sits over a conjunction.
///
/// Returns whether anything was rewritten.
pub fn push_disjunctions(sentence: &mut Sentence, id: NodeId) -> bool {
    if sentence.is_atomic(id) || cnf_at(sentence, id) {
        return false;
    }
    if sentence.connective_of(id) == Some(Connective::Disjunction) {
        if let Some(replacement) = Distributivity::distribute(sentence, id, false) {
            log::trace!(
                target: "transform",
                "Distributivity at level {}: {} => {}",
                sentence.level(id),
                sentence.display(id),
                replacement
            );
            sentence.replace_with_equivalent(id, &replacement);
            push_disjunctions(sentence, id);
            return true;
        }
    }
    let mut changed = false;
    for child in sentence.children(id).to_vec() {
        changed |= push_disjunctions(sentence, child);
    }
    changed
}
