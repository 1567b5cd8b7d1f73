//! Progress observation for sort operations.
//!
//! ## Purpose
//!
//! This module defines the milestone events a sort reports and the observer
//! handle callers use to receive them. It lets a caller display progress or
//! collect timings without the engine depending on any presentation layer.
//!
//! ## Design notes
//!
//! * **Injected**: Observers are passed through the builder; the engine has
//!   no ambient or global observation channel.
//! * **At-most-once**: Each milestone is delivered at most once per sort call.
//! * **Context-free**: Callbacks may be invoked from any thread. They run
//!   before the fan-out and after the join of the sort pass, never between
//!   the fork and the join of a split, so an observer cannot stall the
//!   worker pool's recursion.
//! * **Cloneable**: The handle is an `Arc` so a built sorter stays cheap to
//!   clone and reuse.
//!
//! ## Invariants
//!
//! * `Started` precedes `Completed` for every successful sort call.
//! * A sort that fails validation delivers no milestones.
//! * `elapsed` covers the sort pass only, not validation or input handling.
//!
//! ## Non-goals
//!
//! * This module does not report per-range or percentage progress.
//! * This module does not guarantee single-threaded delivery.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

// External dependencies
use core::fmt::{Debug, Formatter, Result};
use core::time::Duration;

// ============================================================================
// Milestones
// ============================================================================

/// Well-defined milestones reported during a sort call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// The sort pass is about to run.
    Started {
        /// Number of elements in the range being sorted.
        len: usize,
        /// Leaf threshold in effect for this call.
        threshold: usize,
    },

    /// The sort pass finished and the range is fully sorted.
    Completed {
        /// Number of elements in the range that was sorted.
        len: usize,
        /// Wall-clock duration of the sort pass.
        ///
        /// Zero when timing is unavailable (`no_std` builds).
        elapsed: Duration,
    },
}

// ============================================================================
// Observer Handle
// ============================================================================

/// Cloneable handle wrapping a milestone callback.
#[derive(Clone)]
pub struct ProgressObserver(Arc<dyn Fn(&Milestone) + Send + Sync>);

impl ProgressObserver {
    /// Wrap a callback as an observer.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Milestone) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Deliver a milestone to the callback.
    #[inline]
    pub fn notify(&self, milestone: &Milestone) {
        (self.0)(milestone);
    }
}

impl Debug for ProgressObserver {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ProgressObserver").finish_non_exhaustive()
    }
}
