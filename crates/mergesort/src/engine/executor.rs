//! Execution engine for sort operations.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that orchestrates a sort
//! call: it carves the requested range out of the sequence, emits progress
//! milestones, times the sort pass, and dispatches to either the built-in
//! sequential divide-and-conquer pass or an injected replacement pass.
//!
//! ## Design notes
//!
//! * The sequential pass here mirrors the parallel pass shape exactly
//!   (threshold leaf, midpoint split, merge) so the decomposition semantics
//!   are identical in both modes and only the scheduling differs.
//! * Extension crates replace the pass through the `SortPassFn` hook rather
//!   than subclassing or re-implementing orchestration.
//! * Milestones are emitted from the thread running the executor, outside
//!   the recursion, once each.
//! * Generic over any `Ord + Clone` element type.
//!
//! ## Invariants
//!
//! * Inputs are validated before the executor runs (handled by `validator`
//!   in the adapters); the executor assumes `range` is in bounds and the
//!   threshold is at least 1.
//! * Each split strictly decreases range length, so the recursion
//!   terminates with leaves of length at most the threshold.
//! * No index outside the requested range is read or written.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by `validator`).
//! * This module does not schedule threads (handled by extension crates).
//! * This module does not format results for display (handled by `output`).

// Feature-gated imports
#[cfg(feature = "std")]
use std::time::Instant;

// External dependencies
use core::time::Duration;

// Internal dependencies
use crate::algorithms::merge::merge_adjacent;
use crate::algorithms::sequential::sort_sequential;
use crate::engine::output::SortReport;
use crate::primitives::progress::{Milestone, ProgressObserver};
use crate::primitives::range::SortRange;

// ============================================================================
// Type Definitions
// ============================================================================

/// Default leaf threshold when the builder leaves it unset.
///
/// Small enough to expose parallelism on large inputs, large enough that
/// leaf sorts amortize task overhead.
pub const DEFAULT_THRESHOLD: usize = 8192;

/// Signature for a replacement sort pass.
///
/// Receives the exact sub-slice to sort and the leaf threshold. The pass
/// must sort the slice in place and touch nothing else.
#[doc(hidden)]
pub type SortPassFn<T> = fn(
    &mut [T], // range being sorted
    usize,    // leaf threshold
);

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for sort execution.
#[derive(Debug, Clone)]
pub struct SortConfig<T> {
    /// Leaf threshold: ranges at or below this size are sorted sequentially.
    pub threshold: usize,

    /// Optional milestone observer.
    pub observer: Option<ProgressObserver>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom sort pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_sort_pass: Option<SortPassFn<T>>,

    /// Whether the configured pass is parallel (reporting only).
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T> Default for SortConfig<T> {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            observer: None,
            custom_sort_pass: None,
            parallel: false,
        }
    }
}

// ============================================================================
// Sequential Sort Pass
// ============================================================================

/// Recursive divide-and-conquer pass, executed on the calling thread.
///
/// Leaf ranges (length at or below `threshold`) are delegated to the
/// sequential sorter. Internal ranges split at the midpoint, sort both
/// halves, and merge them back through an auxiliary buffer.
pub fn sort_pass_sequential<T: Ord + Clone>(data: &mut [T], threshold: usize) {
    let range = SortRange::new(0, data.len());
    if range.is_leaf(threshold) {
        sort_sequential(data);
        return;
    }

    // threshold >= 1 implies a length of at least 2 here, so both halves
    // are non-empty and strictly smaller than the parent.
    let mid = range.midpoint();
    let (left, right) = data.split_at_mut(mid);
    sort_pass_sequential(left, threshold);
    sort_pass_sequential(right, threshold);

    merge_adjacent(data, mid);
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates one sort call.
pub struct SortExecutor;

impl SortExecutor {
    /// Run the configured sort pass over `range` within `data`.
    ///
    /// Assumes `range` has been validated against `data.len()` and the
    /// threshold against the positivity requirement. Emits `Started` and
    /// `Completed` milestones exactly once each.
    pub fn run_with_config<T: Ord + Clone>(
        data: &mut [T],
        range: SortRange,
        config: &SortConfig<T>,
    ) -> SortReport {
        let len = range.len();
        let slice = &mut data[range.start..range.end];

        if let Some(ref observer) = config.observer {
            observer.notify(&Milestone::Started {
                len,
                threshold: config.threshold,
            });
        }

        let elapsed = Self::timed_pass(slice, config);

        if let Some(ref observer) = config.observer {
            observer.notify(&Milestone::Completed { len, elapsed });
        }

        SortReport {
            len,
            threshold: config.threshold,
            elapsed,
            parallel: config.parallel,
        }
    }

    /// Run the sort pass and measure its wall-clock duration.
    #[cfg(feature = "std")]
    fn timed_pass<T: Ord + Clone>(slice: &mut [T], config: &SortConfig<T>) -> Duration {
        let start = Instant::now();
        Self::dispatch_pass(slice, config);
        start.elapsed()
    }

    /// Run the sort pass without timing (no clock without `std`).
    #[cfg(not(feature = "std"))]
    fn timed_pass<T: Ord + Clone>(slice: &mut [T], config: &SortConfig<T>) -> Duration {
        Self::dispatch_pass(slice, config);
        Duration::ZERO
    }

    #[inline]
    fn dispatch_pass<T: Ord + Clone>(slice: &mut [T], config: &SortConfig<T>) {
        match config.custom_sort_pass {
            Some(pass) => pass(slice, config.threshold),
            None => sort_pass_sequential(slice, config.threshold),
        }
    }
}
