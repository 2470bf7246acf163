//! Pair-sum search backed by a membership set.
//!
//! # Emission policy
//!
//! The default [`PairPolicy::Occurrence`] emits one `(a, target - a)` pair for
//! every input element `a` whose complement is present anywhere in the input:
//!
//! - repeated elements emit repeated pairs,
//! - `(a, b)` and `(b, a)` both appear when both values are present,
//! - `(a, a)` is emitted when `2a == target`, even if `a` occurs only once.
//!
//! [`PairPolicy::Unordered`] reports each unordered pair once as `(min, max)`,
//! in the order it would first have been emitted.

use std::collections::HashSet;

use tracing::trace;

use crate::config::PairPolicy;

/// All `(a, target - a)` pairs under [`PairPolicy::Occurrence`].
pub fn find_pairs(input: &[i64], target: i64) -> Vec<(i64, i64)> {
    find_pairs_with(input, target, PairPolicy::Occurrence)
}

/// Pairs summing to `target`, reported according to `policy`.
pub fn find_pairs_with(input: &[i64], target: i64, policy: PairPolicy) -> Vec<(i64, i64)> {
    let members: HashSet<i64> = input.iter().copied().collect();
    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    let mut pairs = Vec::new();

    for &a in input {
        // An unrepresentable complement cannot be a member.
        let Some(b) = target.checked_sub(a) else {
            continue;
        };
        if !members.contains(&b) {
            continue;
        }
        match policy {
            PairPolicy::Occurrence => pairs.push((a, b)),
            PairPolicy::Unordered => {
                let pair = (a.min(b), a.max(b));
                if seen.insert(pair) {
                    pairs.push(pair);
                }
            }
        }
    }

    trace!(sum = target, found = pairs.len(), policy = ?policy, "Pair search finished");
    pairs
}
