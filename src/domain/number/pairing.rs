//! Adjacent-pair derivation over numbers ordered by id.
//!
//! The database computes this with a `ROW_NUMBER()` self-join; this is the
//! same rule for stores that hold rows in process.

use super::{Number, NumberPair};

/// Pairs each number with its successor in ascending `id` order.
///
/// Yields `max(0, n - 1)` pairs, ordered by `id1`.
pub fn adjacent_pairs(numbers: &[Number]) -> Vec<NumberPair> {
    let mut ordered: Vec<&Number> = numbers.iter().collect();
    ordered.sort_by_key(|n| n.id);

    ordered
        .windows(2)
        .map(|w| NumberPair::between(w[0], w[1]))
        .collect()
}
