#![cfg(feature = "dev")]
//! Tests for the half-open range primitive.
//!
//! These tests verify the interval type that drives the divide-and-conquer
//! decomposition:
//! - Length, emptiness, and midpoint arithmetic
//! - Midpoint splitting into two exact, disjoint children
//! - Leaf classification against a threshold
//!
//! ## Test Organization
//!
//! 1. **Basic Properties** - len, is_empty, midpoint
//! 2. **Splitting** - partition exactness, strict shrinking
//! 3. **Leaf Classification** - threshold boundary behavior

use mergesort::internals::primitives::range::SortRange;

// ============================================================================
// Basic Property Tests
// ============================================================================

/// Test length and emptiness of ranges.
///
/// Verifies half-open arithmetic: len == end - start.
#[test]
fn test_range_len_and_empty() {
    assert_eq!(SortRange::new(0, 5).len(), 5, "Range [0, 5) should have length 5");
    assert_eq!(SortRange::new(3, 3).len(), 0, "Range [3, 3) should have length 0");
    assert!(SortRange::new(3, 3).is_empty(), "Range [3, 3) should be empty");
    assert!(!SortRange::new(3, 4).is_empty(), "Range [3, 4) should not be empty");
}

/// Test midpoint arithmetic.
///
/// Verifies mid == start + (end - start) / 2 with integer division.
#[test]
fn test_range_midpoint() {
    assert_eq!(SortRange::new(0, 5).midpoint(), 2, "Midpoint of [0, 5) should be 2");
    assert_eq!(SortRange::new(2, 5).midpoint(), 3, "Midpoint of [2, 5) should be 3");
    assert_eq!(SortRange::new(4, 6).midpoint(), 5, "Midpoint of [4, 6) should be 5");
}

// ============================================================================
// Splitting Tests
// ============================================================================

/// Test that splitting at the midpoint partitions the range exactly.
///
/// Verifies that the children are adjacent, disjoint, and cover the parent.
#[test]
fn test_range_midpoint_partitions_exactly() {
    let range = SortRange::new(2, 9);
    let mid = range.midpoint();
    let left = SortRange::new(range.start, mid);
    let right = SortRange::new(mid, range.end);

    assert_eq!(left.start, range.start, "Left child should start at parent start");
    assert_eq!(left.end, right.start, "Children should be adjacent at the midpoint");
    assert_eq!(right.end, range.end, "Right child should end at parent end");
    assert_eq!(
        left.len() + right.len(),
        range.len(),
        "Children should cover the parent exactly"
    );
}

/// Test that both midpoint halves are non-empty and strictly smaller.
///
/// Verifies the termination argument for every range of length >= 2.
#[test]
fn test_range_midpoint_strictly_shrinks() {
    for len in 2..40usize {
        let range = SortRange::new(0, len);
        let mid = range.midpoint();
        let left = SortRange::new(range.start, mid);
        let right = SortRange::new(mid, range.end);

        assert!(!left.is_empty(), "Left half of length-{len} range should be non-empty");
        assert!(!right.is_empty(), "Right half of length-{len} range should be non-empty");
        assert!(left.len() < len, "Left half should be strictly smaller");
        assert!(right.len() < len, "Right half should be strictly smaller");
    }
}

// ============================================================================
// Leaf Classification Tests
// ============================================================================

/// Test leaf classification at the threshold boundary.
///
/// Verifies that a range of exactly the threshold length is a leaf and one
/// element more is internal.
#[test]
fn test_range_leaf_at_threshold_boundary() {
    let threshold = 4;

    assert!(
        SortRange::new(0, threshold).is_leaf(threshold),
        "Range of exactly threshold length should be a leaf"
    );
    assert!(
        !SortRange::new(0, threshold + 1).is_leaf(threshold),
        "Range of threshold + 1 length should be internal"
    );
    assert!(
        SortRange::new(0, 0).is_leaf(threshold),
        "Empty range should be a leaf"
    );
}
