//! Sort-based order statistics

use thiserror::Error;

/// Failure raised when a requested rank falls outside a non-empty input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The zero-based rank exceeds the number of available elements.
    #[error("rank {rank} out of range for {len} element(s)")]
    OutOfRange {
        /// Requested zero-based rank
        rank: usize,
        /// Number of elements in the input
        len: usize,
    },
}

/// Returns the `k`-th largest element of `values`, zero-based: `k = 0` is
/// the maximum, `k = 1` the second largest, and so on. Duplicates occupy
/// consecutive ranks.
///
/// An empty input yields `Ok(None)` for any `k`; the rank is only validated
/// against non-empty input, where `k >= values.len()` is an error.
/// O(n log n) via a descending sort of a copied buffer.
pub fn kth_largest<T: Ord + Clone>(values: &[T], k: usize) -> Result<Option<T>, RankError> {
    if values.is_empty() {
        return Ok(None);
    }
    if k >= values.len() {
        return Err(RankError::OutOfRange {
            rank: k,
            len: values.len(),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    Ok(Some(sorted[k].clone()))
}
