//! Execution engines for per-sample fan-out
//!
//! Per-index work (one polynomial fit per sample in local mode) is
//! independent across indices, so it is expressed as a batch of closures
//! over `0..count`. An engine decides whether that batch runs on the current
//! thread or fans out across a Rayon pool. Results always come back in index
//! order, one disjoint slot per index.

#[cfg(feature = "parallel")]
use crate::{Error, Result};
#[cfg(feature = "parallel")]
use std::sync::Arc;

/// Where a batch runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// On the calling thread, index by index
    Sequential,
    /// Across a Rayon pool
    Parallel,
}

/// Runs batches of independent per-index closures
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Run `f` inside the engine's context (e.g. its thread pool)
    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send;

    /// Evaluate `f` for every index in `0..count`, returning results in index order
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    fn strategy(&self) -> ExecutionStrategy;

    fn is_parallel(&self) -> bool {
        self.strategy() == ExecutionStrategy::Parallel
    }

    /// Worker count; callers splitting work into chunks size them by this
    fn num_threads(&self) -> usize;
}

/// Runs every index on the calling thread
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionEngine for SequentialEngine {
    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        f()
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Fans indices out over Rayon
///
/// Uses the global pool unless built with a dedicated one.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    pool: Option<Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Share an existing pool, e.g. one also used by the caller
    pub fn with_thread_pool(pool: Arc<rayon::ThreadPool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Build a dedicated pool of `num_threads` workers
    pub fn with_num_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("detrend-worker-{i}"))
            .build()
            .map_err(|e| Error::Execution(format!("cannot build {num_threads}-thread pool: {e}")))?;
        Ok(Self::with_thread_pool(Arc::new(pool)))
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        // Indexed parallel collect keeps slot i for index i
        let run = || -> Vec<R> { (0..count).into_par_iter().map(&f).collect() };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, |pool| pool.current_num_threads())
    }
}

/// Engine that runs on the calling thread
pub fn sequential() -> SequentialEngine {
    SequentialEngine
}

/// Engine on the global Rayon pool
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine::new()
}
