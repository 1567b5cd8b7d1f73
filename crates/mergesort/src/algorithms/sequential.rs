//! Sequential sorting of leaf ranges.
//!
//! ## Purpose
//!
//! This module provides the sequential sorter used for two roles: the base
//! case of the divide-and-conquer recursion (leaf ranges at or below the
//! threshold) and the single-threaded baseline that parallel timings are
//! compared against.
//!
//! ## Design notes
//!
//! * **Delegation**: Uses the standard library's in-place pattern-defeating
//!   quicksort, which is O(n log n) worst case with O(log n) stack space.
//! * **Unstable**: Leaf stability is unobservable for the plain integer use
//!   case and is not required by the engine; the merge step above the
//!   leaves is stable on its own.
//!
//! ## Invariants
//!
//! * Sorts the given slice in place in non-decreasing order.
//! * No side effects outside the given slice; never fails.
//!
//! ## Non-goals
//!
//! * This module does not split ranges or merge sorted runs.

// ============================================================================
// Sequential Sorter
// ============================================================================

/// Sort a slice in place in non-decreasing order.
///
/// This is the leaf-range sorter and the baseline for benchmark
/// comparisons.
#[inline]
pub fn sort_sequential<T: Ord>(data: &mut [T]) {
    data.sort_unstable();
}
