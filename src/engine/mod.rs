//! Parallel map engine
//!
//! This module provides the divide-and-conquer controller for parallel map
//! operations: it owns the output buffer lifecycle, submits one root split
//! task per call to the worker pool, and blocks until the whole task tree
//! has resolved.

pub mod pool;
pub mod split;

use std::sync::Arc;

use rayon::ThreadPool;

use crate::transform::{RangeTransform, TransformError};

/// Map operation result type
pub type MapResult<T> = Result<T, MapError>;

/// Error types for map operations
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Transform failed over range [{lo}, {hi}): {source}")]
    TransformFailure {
        lo: usize,
        hi: usize,
        #[source]
        source: TransformError,
    },

    #[error("Scheduler failure: {0}")]
    SchedulerFailure(String),
}

/// Divide-and-conquer parallel map engine
///
/// The engine holds a handle to an external work-stealing pool and a
/// cutoff, the largest range size that still runs sequentially. Ranges
/// above the cutoff are halved recursively; one half is advertised to idle
/// workers while the other runs on the current worker, and the two are
/// joined before the parent resolves. Both settings are fixed for the
/// engine's lifetime.
#[derive(Clone)]
pub struct ParallelMap {
    pool: Arc<ThreadPool>,
    cutoff: usize,
}

impl ParallelMap {
    /// Create an engine from a pool handle and a splitting cutoff
    pub fn new(pool: Arc<ThreadPool>, cutoff: usize) -> MapResult<Self> {
        if cutoff == 0 {
            return Err(MapError::InvalidArgument(
                "Cutoff must be at least 1".to_string(),
            ));
        }

        Ok(Self { pool, cutoff })
    }

    /// Create an engine backed by a freshly built default-sized pool
    pub fn with_default_pool(cutoff: usize) -> MapResult<Self> {
        Self::new(pool::build_pool(None)?, cutoff)
    }

    /// Get the configured splitting cutoff
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Get the number of worker threads in the attached pool
    pub fn num_workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Map `input` into a new output buffer of the same length
    pub fn map<I, O, T>(&self, input: &[I], transform: &T) -> MapResult<Vec<O>>
    where
        I: Sync,
        O: Send + Clone + Default,
        T: RangeTransform<I, O>,
    {
        self.map_sized(input, 0, transform)
    }

    /// Map `input` into a new output buffer of `output_size` slots
    ///
    /// An `output_size` of 0 means "same length as the input". The buffer
    /// is allocated default-initialized before any scheduling happens;
    /// slots no leaf range owns (the tail of an oversized buffer, or the
    /// whole buffer for an empty input) keep their default value. On
    /// success every owned slot has been written exactly once.
    pub fn map_sized<I, O, T>(
        &self,
        input: &[I],
        output_size: usize,
        transform: &T,
    ) -> MapResult<Vec<O>>
    where
        I: Sync,
        O: Send + Clone + Default,
        T: RangeTransform<I, O>,
    {
        let size = if output_size == 0 {
            input.len()
        } else {
            output_size
        };
        let mut output = vec![O::default(); size];

        // Nothing to schedule for an empty input
        if input.is_empty() {
            return Ok(output);
        }

        log::debug!(
            "Mapping {} elements into {} slots (cutoff {})",
            input.len(),
            size,
            self.cutoff
        );

        // The root window covers every output slot tied to an input index;
        // an undersized buffer leaves trailing ranges with clamped windows
        let covered = size.min(input.len());
        let window = &mut output[..covered];

        self.pool.install(|| {
            split::split_range(input, window, 0, input.len(), self.cutoff, transform)
        })?;

        Ok(output)
    }
}
