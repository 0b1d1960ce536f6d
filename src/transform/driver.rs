//! Root-restarting fixpoint driver.

use super::TransformationRule;
use crate::error::{LogicError, Result};
use crate::syntax::{NodeId, Sentence};

/// First node, in depth-first pre-order, at which some rule applies.
///
/// Children are only visited when no rule applies to their parent.
pub fn find_applicable(
    sentence: &Sentence,
    node: NodeId,
    rules: &[&dyn TransformationRule],
) -> Option<NodeId> {
    if sentence.is_atomic(node) {
        return None;
    }
    if rules.iter().any(|r| r.is_applicable(sentence, node)) {
        return Some(node);
    }
    sentence
        .children(node)
        .iter()
        .find_map(|child| find_applicable(sentence, *child, rules))
}

/// Rewrite `sentence` in place until no rule in `rules` applies anywhere.
///
/// At the node found, every rule is tried in list order; the search then
/// restarts from the root. Returns the number of rule firings, or
/// `RewriteLimit` once more than `limit` firings happened.
pub fn apply_until_fixpoint(
    sentence: &mut Sentence,
    rules: &[&dyn TransformationRule],
    limit: Option<usize>,
) -> Result<usize> {
    let mut fired = 0usize;
    while let Some(node) = find_applicable(sentence, sentence.root(), rules) {
        for rule in rules {
            if let Some(replacement) = rule.rewrite(sentence, node) {
                log::trace!(
                    target: "transform",
                    "{} at level {}: {} => {}",
                    rule.name(),
                    sentence.level(node),
                    sentence.display(node),
                    replacement
                );
                sentence.replace_with_equivalent(node, &replacement);
                fired += 1;
                if let Some(max) = limit {
                    if fired > max {
                        return Err(LogicError::RewriteLimit(max));
                    }
                }
            }
        }
        sentence.compact();
    }
    Ok(fired)
}
