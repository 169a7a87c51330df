//! Worker pool construction
//!
//! The map engine consumes an external work-stealing pool rather than
//! managing threads itself. This module builds such pools: named worker
//! threads, a CPU-derived default size, and shared handles that several
//! engines can hold at once.

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::engine::{MapError, MapResult};

/// Get the default number of worker threads to use
pub fn default_num_threads() -> usize {
    num_cpus::get()
}

/// Build a work-stealing worker pool
///
/// A `num_threads` of `None` (or zero) selects one worker per available
/// CPU. Build failures are reported as [`MapError::SchedulerFailure`].
pub fn build_pool(num_threads: Option<usize>) -> MapResult<Arc<ThreadPool>> {
    let num_threads = match num_threads {
        Some(n) if n > 0 => n,
        _ => default_num_threads(),
    };

    let pool = ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|idx| format!("forkmap-worker-{}", idx))
        .build()
        .map_err(|e| {
            MapError::SchedulerFailure(format!("Failed to create thread pool: {}", e))
        })?;

    log::info!("Initialized thread pool with {} threads", num_threads);

    Ok(Arc::new(pool))
}
