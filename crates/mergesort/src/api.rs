//! High-level API for merge sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring the decomposition threshold and
//! progress observation, and a marker-type transition to an execution
//! adapter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter
//!   builders.
//! * **Validated**: Parameters are validated when `.build()` is called on
//!   the adapter builder.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MergeSortBuilder`] via `MergeSort::new()`.
//! 2. Chain configuration methods (`.threshold()`, `.observer()`).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.

// Internal dependencies
use crate::adapters::batch::BatchSortBuilder;
use crate::engine::executor::SortPassFn;

// Publicly re-exported types
pub use crate::engine::output::SortReport;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::progress::{Milestone, ProgressObserver};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a merge sort.
#[derive(Debug, Clone)]
pub struct MergeSortBuilder<T> {
    /// Leaf threshold: sub-ranges at or below this size are sorted
    /// sequentially rather than split further.
    pub threshold: Option<usize>,

    /// Milestone observer.
    pub observer: Option<ProgressObserver>,

    // ======================================
    // DEV
    // ======================================
    /// Custom sort pass function.
    #[doc(hidden)]
    pub custom_sort_pass: Option<SortPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T> Default for MergeSortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MergeSortBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            threshold: None,
            observer: None,
            custom_sort_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SortAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the leaf threshold (must be at least 1).
    pub fn threshold(mut self, threshold: usize) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Set a milestone observer.
    pub fn observer(mut self, observer: ProgressObserver) -> Self {
        if self.observer.is_some() {
            self.duplicate_param = Some("observer");
        }
        self.observer = Some(observer);
        self
    }

    /// Set the parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

// ============================================================================
// Adapter Trait and Marker Types
// ============================================================================

/// Conversion from the main builder into an adapter-specific builder.
pub trait SortAdapter<T> {
    /// The adapter-specific builder produced by the conversion.
    type Output;

    /// Convert the main builder into the adapter builder.
    fn convert(builder: MergeSortBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch sorting.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T> SortAdapter<T> for Batch {
    type Output = BatchSortBuilder<T>;

    fn convert(builder: MergeSortBuilder<T>) -> Self::Output {
        let mut batch = BatchSortBuilder::default();

        if let Some(threshold) = builder.threshold {
            batch = batch.threshold(threshold);
        }
        if let Some(observer) = builder.observer {
            batch = batch.observer(observer);
        }
        if let Some(pass) = builder.custom_sort_pass {
            batch = batch.custom_sort_pass(pass);
        }
        if let Some(parallel) = builder.parallel {
            batch = batch.parallel(parallel);
        }

        // Carry duplicate tracking into build-time validation.
        batch.duplicate_param = builder.duplicate_param;
        batch
    }
}
