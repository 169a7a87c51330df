//! Transform capability interface
//!
//! This module defines the per-range transformation contract supplied by
//! callers of the map engine. The engine decides which ranges run where;
//! the capability only computes output values for the range it is handed.

use std::error::Error;

/// Boxed cause reported by a failing transform capability
pub type TransformError = Box<dyn Error + Send + Sync>;

/// Trait for per-range map transformations
///
/// `calculate` receives the whole input buffer, the output window owned by
/// the current leaf range, and the half-open input range `[lo, hi)` the
/// window corresponds to. `output[k]` is the slot for global output index
/// `lo + k`; any part of `input` may be read. The window length is
/// `hi - lo` unless the engine's output buffer is shorter than its input,
/// in which case trailing windows are clamped, possibly to empty. An empty
/// window or an empty range must be treated as a no-op.
///
/// Implementations are shared by reference across worker threads, and the
/// engine guarantees that concurrent invocations always receive disjoint
/// output windows.
pub trait RangeTransform<I, O>: Sync {
    /// Compute output values for the input range `[lo, hi)`
    fn calculate(
        &self,
        input: &[I],
        output: &mut [O],
        lo: usize,
        hi: usize,
    ) -> Result<(), TransformError>;
}

/// Base implementation for plain functions and closures
impl<I, O, F> RangeTransform<I, O> for F
where
    F: Fn(&[I], &mut [O], usize, usize) -> Result<(), TransformError> + Sync,
{
    fn calculate(
        &self,
        input: &[I],
        output: &mut [O],
        lo: usize,
        hi: usize,
    ) -> Result<(), TransformError> {
        self(input, output, lo, hi)
    }
}
