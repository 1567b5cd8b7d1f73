//! Batch adapter for parallel in-memory sorting.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter with parallel support.
//! It wraps the core batch builder, injects the fork-join sort pass, and
//! optionally owns a dedicated worker pool for execution.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation, timing, and milestone delivery are reused
//!   from the core `mergesort` adapter; this wrapper only adds scheduling.
//! * **Parallel-first**: Parallel execution defaults to on; `.parallel(false)`
//!   restores the sequential pass for baseline comparisons.
//! * **Pool ownership**: With `.num_threads(n)` the built processor owns a
//!   dedicated pool for its lifetime, amortizing pool construction across
//!   repeated sorts. Otherwise the shared global pool is used. Pool
//!   construction failure surfaces as `SortError::PoolUnavailable`; after a
//!   successful build, a sort call itself has no submission failure mode.
//!
//! ## Invariants
//!
//! * A call that fails validation mutates nothing.
//! * Output is identical to the sequential adapter for every valid input
//!   and threshold.
//!
//! ## Non-goals
//!
//! * This adapter does not handle streaming data or incremental updates.
//! * This adapter does not cancel in-flight sorts.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::sort_pass_parallel;

// Export dependencies from mergesort crate
use mergesort::internals::adapters::batch::{BatchSort, BatchSortBuilder};
use mergesort::internals::engine::output::SortReport;
use mergesort::internals::primitives::errors::SortError;
use mergesort::internals::primitives::progress::ProgressObserver;

// Internal dependencies
use crate::input::SortInput;

// ============================================================================
// Extended Batch Sort Builder
// ============================================================================

/// Builder for the batch sort processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchSortBuilder<T> {
    /// Base builder from the mergesort crate.
    pub base: BatchSortBuilder<T>,

    /// Dedicated worker pool size (`None` = shared global pool).
    pub num_threads: Option<usize>,
}

impl<T> Default for ParallelBatchSortBuilder<T> {
    fn default() -> Self {
        Self {
            base: BatchSortBuilder::default().parallel(true),
            num_threads: None,
        }
    }
}

impl<T> ParallelBatchSortBuilder<T> {
    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the leaf threshold.
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.base = self.base.threshold(threshold);
        self
    }

    /// Set a milestone observer.
    pub fn observer(mut self, observer: ProgressObserver) -> Self {
        self.base = self.base.observer(observer);
        self
    }

    // ========================================================================
    // Batch-Specific Setters
    // ========================================================================

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Run sorts on a dedicated worker pool with `num_threads` threads.
    ///
    /// Zero selects the rayon default (available hardware parallelism).
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }
}

impl<T: Ord + Clone + Send + Sync> ParallelBatchSortBuilder<T> {
    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchSort<T>, SortError> {
        let parallel = self.base.parallel.unwrap_or(true);
        let mut base = self.base;

        if parallel {
            #[cfg(feature = "cpu")]
            {
                base = base.custom_sort_pass(sort_pass_parallel::<T>);
            }
            #[cfg(not(feature = "cpu"))]
            {
                // Fall back to the sequential pass without the cpu feature.
                base.custom_sort_pass = None;
                base = base.parallel(false);
            }
        } else {
            base.custom_sort_pass = None;
        }

        #[cfg(feature = "cpu")]
        let pool = match self.num_threads {
            Some(num_threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()
                    .map_err(|e| SortError::PoolUnavailable(e.to_string()))?,
            ),
            None => None,
        };

        #[cfg(not(feature = "cpu"))]
        if self.num_threads.is_some() {
            return Err(SortError::UnsupportedFeature {
                adapter: "Batch",
                feature: "dedicated worker pool (requires 'cpu' feature)",
            });
        }

        // Validation (threshold, duplicates) is centralized in the core crate.
        let processor = base.build()?;

        Ok(ParallelBatchSort {
            processor,
            #[cfg(feature = "cpu")]
            pool,
        })
    }
}

// ============================================================================
// Extended Batch Sort Processor
// ============================================================================

/// Batch sort processor with parallel support.
#[derive(Debug)]
pub struct ParallelBatchSort<T> {
    processor: BatchSort<T>,

    #[cfg(feature = "cpu")]
    pool: Option<rayon::ThreadPool>,
}

impl<T: Ord + Clone + Send + Sync> ParallelBatchSort<T> {
    /// Sort the entire container in place.
    pub fn sort<I>(&self, data: &mut I) -> Result<SortReport, SortError>
    where
        I: SortInput<T> + ?Sized,
    {
        let slice = data.as_sort_slice_mut()?;
        let len = slice.len();
        self.run(slice, 0, len)
    }

    /// Sort the sub-range `[start, end)` of the container in place.
    ///
    /// Fails with `SortError::InvalidRange` before any mutation when the
    /// bounds violate `start <= end <= len`.
    pub fn sort_range<I>(
        &self,
        data: &mut I,
        start: usize,
        end: usize,
    ) -> Result<SortReport, SortError>
    where
        I: SortInput<T> + ?Sized,
    {
        let slice = data.as_sort_slice_mut()?;
        self.run(slice, start, end)
    }

    /// Delegate execution to the core processor, inside the dedicated pool
    /// when one is configured.
    fn run(&self, slice: &mut [T], start: usize, end: usize) -> Result<SortReport, SortError> {
        #[cfg(feature = "cpu")]
        if let Some(ref pool) = self.pool {
            return pool.install(|| self.processor.sort_range(slice, start, end));
        }

        self.processor.sort_range(slice, start, end)
    }
}
