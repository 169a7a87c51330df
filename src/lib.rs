//! Fork/join parallel map over index ranges
//!
//! This crate provides a divide-and-conquer map engine: an input slice is
//! recursively split into half-open index ranges until they fall below a
//! configured cutoff, and the resulting leaf ranges are transformed
//! concurrently on a work-stealing worker pool. Every output slot is owned
//! by exactly one leaf, so concurrent writers never need to synchronize on
//! the buffer itself.

pub mod engine;
pub mod transform;

/// Convenience re-exports
pub use engine::{MapError, MapResult, ParallelMap};
pub use transform::{RangeTransform, TransformError};
