//! High-level API for parallel merge sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for sorting
//! with multi-threaded execution. It extends the `mergesort` API with an
//! adapter that fans the recursion out over all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `mergesort` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Transparent**: The `Batch` marker type selects the parallel builder.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MergeSortBuilder`] via `MergeSort::new()`.
//! 2. Chain configuration methods (`.threshold()`, `.observer()`).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution
//!    builder.

// Internal dependencies
use crate::adapters::batch::ParallelBatchSortBuilder;

// Import base marker types for delegation
use mergesort::internals::api::Batch as BaseBatch;

// Publicly re-exported types
pub use mergesort::internals::api::{MergeSortBuilder, SortAdapter};
pub use mergesort::internals::engine::output::SortReport;
pub use mergesort::internals::primitives::errors::SortError;
pub use mergesort::internals::primitives::progress::{Milestone, ProgressObserver};

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch sorting.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T> SortAdapter<T> for Batch {
    type Output = ParallelBatchSortBuilder<T>;

    fn convert(builder: MergeSortBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true here
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to the base implementation to create the base builder
        let base = <BaseBatch as SortAdapter<T>>::convert(builder).parallel(parallel);

        // Wrap with extension fields
        ParallelBatchSortBuilder {
            base,
            num_threads: None,
        }
    }
}
