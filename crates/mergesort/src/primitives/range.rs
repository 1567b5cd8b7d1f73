//! Half-open index ranges over the sequence being sorted.
//!
//! ## Purpose
//!
//! This module defines the `SortRange` interval type used by the engine to
//! describe the portion of the sequence a task owns, and the midpoint split
//! that drives the divide-and-conquer decomposition.
//!
//! ## Design notes
//!
//! * **Half-open**: Ranges are `[start, end)`, so `len == end - start`.
//! * **Copy semantics**: Ranges are small value types passed by copy.
//! * **Ownership discipline**: At any level of recursion the two children of
//!   a split cover disjoint index sets; this partitioning is the entire
//!   concurrency-safety argument for the parallel engine.
//!
//! ## Invariants
//!
//! * `start <= end` for every constructed range.
//! * For ranges of length >= 2, splitting at the midpoint produces two
//!   non-empty children that are strictly smaller than the parent and
//!   partition it exactly.
//!
//! ## Non-goals
//!
//! * This module does not validate ranges against a sequence length
//!   (handled by `validator`).
//! * This module does not touch element data.

// ============================================================================
// Data Structures
// ============================================================================

/// Half-open interval `[start, end)` over the indices of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRange {
    /// First index of the range (inclusive).
    pub start: usize,

    /// One past the last index of the range (exclusive).
    pub end: usize,
}

impl SortRange {
    /// Create a new range.
    ///
    /// Callers must uphold `start <= end`; use `Validator::validate_range`
    /// to check caller-supplied bounds against a sequence first.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start must not exceed end");
        Self { start, end }
    }

    /// Number of indices covered by the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check whether the range covers no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Midpoint used for splitting: `start + (end - start) / 2`.
    ///
    /// For ranges of length >= 2 the midpoint is strictly between the
    /// bounds, so both halves of a split are non-empty.
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.start + self.len() / 2
    }

    /// Check whether this range is a leaf for the given threshold.
    ///
    /// Leaf ranges are sorted sequentially; internal ranges are split.
    #[inline]
    pub fn is_leaf(&self, threshold: usize) -> bool {
        self.len() <= threshold
    }
}
