//! Exhaustive generation of every interpretation of a signature over a fixed universe.

use rayon::prelude::*;

use super::structure::{read, write, Function, PredicateRelation, SharedStructure};
use super::{ElementId, Interpretation};
use crate::error::{LogicError, Result};
use crate::syntax::{FnSym, PredSym, Signature};

/// Candidate extensions of one symbol.
enum Candidates {
    Relations(PredSym, Vec<PredicateRelation>),
    Functions(FnSym, Vec<Function>),
}

impl Candidates {
    fn len(&self) -> usize {
        match self {
            Candidates::Relations(_, v) => v.len(),
            Candidates::Functions(_, v) => v.len(),
        }
    }
}

/// Every tuple of length `arity` over `ids`, in lexicographic order of positions.
pub fn tuples(ids: &[ElementId], arity: usize) -> Vec<Vec<ElementId>> {
    let mut out: Vec<Vec<ElementId>> = vec![Vec::new()];
    for _ in 0..arity {
        out = out
            .iter()
            .flat_map(|prefix| {
                ids.iter().map(move |id| {
                    let mut t = prefix.clone();
                    t.push(*id);
                    t
                })
            })
            .collect();
    }
    out
}

/// Number of interpretations, or `None` when it does not fit in a `u128`.
pub fn interpretation_count(universe_size: usize, signature: &Signature) -> Option<u128> {
    let n = universe_size as u128;
    let mut total: u128 = 1;
    for p in signature.predicates() {
        let rows = n.checked_pow(p.arity as u32)?;
        let relations = 2u128.checked_pow(u32::try_from(rows).ok()?)?;
        total = total.checked_mul(relations)?;
    }
    for f in signature.functions() {
        let rows = n.checked_pow(f.arity as u32)?;
        let functions = n.checked_pow(u32::try_from(rows).ok()?)?;
        total = total.checked_mul(functions)?;
    }
    Some(total)
}

/// Every subset of `rows`, as relations. Subset `mask` holds row `i` iff bit `i` is set.
fn power_set(rows: &[Vec<ElementId>]) -> Vec<PredicateRelation> {
    (0..1usize << rows.len())
        .into_par_iter()
        .map(|mask| {
            PredicateRelation::new(
                rows.iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, row)| row.clone()),
            )
        })
        .collect()
}

/// Every total map from `rows` to `ids`. Map `index` sends row `i` to digit `i` of `index` in base `|ids|`.
fn total_functions(rows: &[Vec<ElementId>], ids: &[ElementId]) -> Vec<Function> {
    let n = ids.len();
    if n == 0 {
        return if rows.is_empty() { vec![Function::new(Vec::new())] } else { Vec::new() };
    }
    let count = n.pow(rows.len() as u32);
    (0..count)
        .into_par_iter()
        .map(|index| {
            let mut rest = index;
            Function::new(rows.iter().map(|row| {
                let image = ids[rest % n];
                rest /= n;
                (row.clone(), image)
            }))
        })
        .collect()
}

/// One interpretation per combination of candidate relations and functions.
///
/// Candidates are computed per symbol in parallel and stored in the shared
/// structure; the cartesian product is then taken sequentially, in signature
/// order. Fails with `EnumerationTooLarge` when the count exceeds `limit`.
pub fn enumerate_interpretations(
    structure: &SharedStructure,
    signature: &Signature,
    limit: Option<usize>,
) -> Result<Vec<Interpretation>> {
    let ids = read(structure).universe().element_ids();
    let count = interpretation_count(ids.len(), signature);
    log::debug!(
        "enumerating interpretations over {} elements: {}",
        ids.len(),
        count.map_or_else(|| "overflow".to_string(), |c| c.to_string())
    );
    let too_large = |count: Option<u128>| LogicError::EnumerationTooLarge {
        count: count.map_or_else(|| "more than 2^128".to_string(), |c| c.to_string()),
        limit: limit.unwrap_or(usize::MAX),
    };
    let count = match count {
        Some(c) if limit.map_or(c <= usize::MAX as u128, |max| c <= max as u128) => c,
        other => return Err(too_large(other)),
    };

    let mut symbols: Vec<Candidates> = signature
        .predicates()
        .cloned()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|p| {
            let rows = tuples(&ids, p.arity);
            let relations = power_set(&rows);
            Candidates::Relations(p, relations)
        })
        .collect();
    symbols.extend(
        signature
            .functions()
            .cloned()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|f| {
                let rows = tuples(&ids, f.arity);
                let functions = total_functions(&rows, &ids);
                Candidates::Functions(f, functions)
            })
            .collect::<Vec<_>>(),
    );

    // Register every candidate once; interpretations share them by id.
    let tables: Vec<Vec<usize>> = {
        let mut guard = write(structure);
        symbols
            .iter()
            .map(|candidates| match candidates {
                Candidates::Relations(_, relations) => relations
                    .iter()
                    .map(|r| guard.add_relation(r.clone()))
                    .collect(),
                Candidates::Functions(_, functions) => functions
                    .iter()
                    .map(|f| guard.add_function(f.clone()))
                    .collect(),
            })
            .collect()
    };

    let mut out = Vec::with_capacity(count as usize);
    let mut digits = vec![0usize; symbols.len()];
    for _ in 0..count {
        let mut interpretation = Interpretation::new(structure.clone());
        for ((candidates, table), digit) in symbols.iter().zip(&tables).zip(&digits) {
            match candidates {
                Candidates::Relations(p, _) => interpretation.bind_predicate(p.clone(), table[*digit]),
                Candidates::Functions(f, _) => interpretation.bind_function(f.clone(), table[*digit]),
            }
        }
        out.push(interpretation);
        // Odometer step: last symbol varies fastest.
        for (pos, candidates) in symbols.iter().enumerate().rev() {
            digits[pos] += 1;
            if digits[pos] < candidates.len() {
                break;
            }
            digits[pos] = 0;
        }
    }
    Ok(out)
}
