//! Batch adapter for in-memory sorting.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: it validates the
//! configured parameters at build time, validates caller-supplied ranges at
//! call time, and delegates execution to the engine.
//!
//! ## Design notes
//!
//! * **Processing**: Sorts a complete in-memory slice (or a sub-range of it)
//!   in a single call.
//! * **Delegation**: Delegates all recursion and timing to the execution
//!   engine.
//! * **Reusable**: The built processor borrows itself immutably per sort, so
//!   one configuration can sort many sequences.
//!
//! ## Invariants
//!
//! * A call that fails validation mutates nothing.
//! * `sort_range` touches no index outside `[start, end)`.
//!
//! ## Non-goals
//!
//! * This adapter does not schedule worker threads (extension crates inject
//!   a parallel pass instead).
//! * This adapter does not handle streaming or incremental input.

// Internal dependencies
use crate::engine::executor::{SortConfig, SortExecutor, SortPassFn, DEFAULT_THRESHOLD};
use crate::engine::output::SortReport;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::progress::ProgressObserver;
use crate::primitives::range::SortRange;

// ============================================================================
// Batch Sort Builder
// ============================================================================

/// Builder for the batch sort processor.
#[derive(Debug, Clone)]
pub struct BatchSortBuilder<T> {
    /// Leaf threshold for the decomposition.
    pub threshold: usize,

    /// Optional milestone observer.
    pub observer: Option<ProgressObserver>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom sort pass function.
    #[doc(hidden)]
    pub custom_sort_pass: Option<SortPassFn<T>>,

    /// Parallel execution hint (reporting only at this layer).
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    /// Tracks whether the threshold was explicitly configured.
    #[doc(hidden)]
    pub(crate) threshold_set: bool,
}

impl<T> Default for BatchSortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BatchSortBuilder<T> {
    /// Create a new batch sort builder with default parameters.
    fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            observer: None,
            custom_sort_pass: None,
            parallel: None,
            duplicate_param: None,
            threshold_set: false,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the leaf threshold.
    pub fn threshold(mut self, threshold: usize) -> Self {
        if self.threshold_set {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = threshold;
        self.threshold_set = true;
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

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set a custom sort pass function.
    #[doc(hidden)]
    pub fn custom_sort_pass(mut self, pass: SortPassFn<T>) -> Self {
        self.custom_sort_pass = Some(pass);
        self
    }

    /// Set the parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchSort<T>, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate threshold positivity
        Validator::validate_threshold(self.threshold)?;

        Ok(BatchSort { config: self })
    }
}

// ============================================================================
// Batch Sort Processor
// ============================================================================

/// Batch sort processor.
#[derive(Debug)]
pub struct BatchSort<T> {
    config: BatchSortBuilder<T>,
}

impl<T: Ord + Clone> BatchSort<T> {
    /// Sort the entire slice in place.
    pub fn sort(&self, data: &mut [T]) -> Result<SortReport, SortError> {
        let len = data.len();
        self.sort_range(data, 0, len)
    }

    /// Sort the sub-range `[start, end)` of `data` in place.
    ///
    /// Fails with `SortError::InvalidRange` before any mutation when the
    /// bounds violate `start <= end <= data.len()`.
    pub fn sort_range(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
    ) -> Result<SortReport, SortError> {
        Validator::validate_range(start, end, data.len())?;

        let config = SortConfig {
            threshold: self.config.threshold,
            observer: self.config.observer.clone(),
            custom_sort_pass: self.config.custom_sort_pass,
            parallel: self.config.parallel.unwrap_or(false),
        };

        Ok(SortExecutor::run_with_config(
            data,
            SortRange::new(start, end),
            &config,
        ))
    }
}
