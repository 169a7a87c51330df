//! Recursive range splitting
//!
//! This module implements the divide-and-conquer scheduling strategy: a
//! range larger than the cutoff is halved and its two halves are joined
//! through the worker pool, while a range at or below the cutoff runs the
//! transform capability directly on the current worker. Each split also
//! partitions the task's output window into two disjoint mutable halves,
//! so concurrent leaves can never write the same slot.

use crate::engine::{MapError, MapResult};
use crate::transform::RangeTransform;

/// Process the input range `[lo, hi)` into the given output window
///
/// `window` is the slice of output slots owned by this range: `window[k]`
/// is the slot for global output index `lo + k`, clamped short when the
/// overall output buffer ends before `hi`. Ranges larger than `cutoff`
/// are split at the midpoint (left half biased down for odd lengths) and
/// joined on the pool; the left half runs on the current worker while the
/// right half is advertised to idle workers for stealing. Ranges at or
/// below the cutoff invoke the capability in place, including empty
/// ranges, which must be handled as a no-op.
///
/// `cutoff` must be at least 1; [`ParallelMap`](crate::ParallelMap)
/// validates this at construction. A failing leaf reports the range it
/// covered along with the underlying cause; when both halves of a split
/// fail, the left half's error is the one returned.
pub fn split_range<I, O, T>(
    input: &[I],
    window: &mut [O],
    lo: usize,
    hi: usize,
    cutoff: usize,
    transform: &T,
) -> MapResult<()>
where
    I: Sync,
    O: Send,
    T: RangeTransform<I, O>,
{
    debug_assert!(cutoff >= 1, "cutoff must be at least 1");

    if hi - lo > cutoff {
        let m = lo + (hi - lo) / 2;
        let (left, right) = window.split_at_mut(window.len().min(m - lo));

        let (left_result, right_result) = rayon::join(
            || split_range(input, left, lo, m, cutoff, transform),
            || split_range(input, right, m, hi, cutoff, transform),
        );

        left_result.and(right_result)
    } else {
        transform
            .calculate(input, window, lo, hi)
            .map_err(|source| MapError::TransformFailure { lo, hi, source })
    }
}

/// Get the number of leaf ranges produced for a root range of `len`
///
/// The count is deterministic in `(len, cutoff)`: it is the number of
/// ranges left after recursively halving `[0, len)` until every range
/// holds at most `cutoff` elements. A length of 0 yields 0 because the
/// engine never submits a root task for an empty input.
pub fn leaf_count(len: usize, cutoff: usize) -> usize {
    debug_assert!(cutoff >= 1, "cutoff must be at least 1");

    if len == 0 {
        0
    } else if len <= cutoff {
        1
    } else {
        let left = len / 2;
        leaf_count(left, cutoff) + leaf_count(len - left, cutoff)
    }
}
