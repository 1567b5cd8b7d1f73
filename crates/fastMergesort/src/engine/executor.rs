//! Parallel execution engine for merge sorting.
//!
//! ## Purpose
//!
//! This module provides the parallel sort pass that is injected into the
//! `mergesort` crate's execution engine. It fans the divide-and-conquer
//! recursion out over a work-stealing worker pool, speeding up sorting of
//! large sequences by utilizing all available CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential sort pass,
//!   with identical decomposition semantics (threshold leaf, midpoint
//!   split, stable merge).
//! * **Parallelism**: Uses `rayon::join` for fork-join execution; the call
//!   returns only after both halves are fully sorted. That join barrier is
//!   what bounds peak parallelism and guarantees the merge sees two sorted
//!   halves.
//! * **Disjointness**: Each split hands its children disjoint mutable
//!   views obtained from `split_at_mut`. The borrow checker enforces the
//!   non-overlap invariant that makes lock-free parallel mutation sound;
//!   no synchronization on the data itself is needed.
//! * **Integration**: Plugs into the `mergesort` executor via the
//!   `SortPassFn` hook.
//!
//! ## Invariants
//!
//! * The threshold is at least 1 (validated upstream), so every split makes
//!   progress and recursion terminates.
//! * No two concurrently executing tasks address overlapping index ranges.
//! * The merge for a range runs strictly after both child tasks complete.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by the core `validator`).
//! * This module does not emit milestones (handled by the core executor).
//! * This module does not own the worker pool (handled by the adapter).

// Export dependencies from mergesort crate
#[cfg(feature = "cpu")]
use mergesort::internals::algorithms::merge::merge_adjacent;
#[cfg(feature = "cpu")]
use mergesort::internals::algorithms::sequential::sort_sequential;
#[cfg(feature = "cpu")]
use mergesort::internals::primitives::range::SortRange;

// ============================================================================
// Parallel Sort Pass
// ============================================================================

/// Sort a slice in place by parallel divide-and-conquer.
///
/// Leaf ranges (length at or below `threshold`) are delegated to the
/// sequential sorter. Internal ranges split at the midpoint into two
/// disjoint mutable halves, sort them as concurrent tasks, wait for both,
/// and merge the results through an auxiliary buffer.
#[cfg(feature = "cpu")]
pub fn sort_pass_parallel<T: Ord + Clone + Send>(data: &mut [T], threshold: usize) {
    let range = SortRange::new(0, data.len());
    if range.is_leaf(threshold) {
        sort_sequential(data);
        return;
    }

    // threshold >= 1 implies a length of at least 2 here, so both halves
    // are non-empty and strictly smaller than the parent.
    let mid = range.midpoint();
    let (left, right) = data.split_at_mut(mid);

    // Fork both halves and block until both complete (join barrier).
    rayon::join(
        || sort_pass_parallel(left, threshold),
        || sort_pass_parallel(right, threshold),
    );

    merge_adjacent(data, mid);
}
