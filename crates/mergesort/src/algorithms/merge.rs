//! Stable two-pointer merge of sorted runs.
//!
//! ## Purpose
//!
//! This module provides the merge step that recombines two sorted halves of
//! a range into one sorted range, using an auxiliary buffer that lives for
//! exactly one merge.
//!
//! ## Design notes
//!
//! * **Stability**: Ties are taken from the left run, so the merge preserves
//!   the relative order of equal elements. Unobservable for plain integers,
//!   but the engine is generic over any `Ord` element type.
//! * **Auxiliary buffer**: Allocated fresh per merge with the exact length
//!   of the range, discarded immediately after the copy-back. Buffers are
//!   never shared between merges or retained across calls.
//! * **Seam fast path**: When the last element of the left half does not
//!   exceed the first element of the right half the range is already
//!   sorted and the merge is skipped entirely.
//!
//! ## Invariants
//!
//! * Both input runs are sorted non-decreasing.
//! * The output holds the same multiset of elements as the two inputs.
//!
//! ## Non-goals
//!
//! * This module does not split ranges or schedule work.
//! * This module does not sort unsorted input (callers sort the halves first).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Merge Functions
// ============================================================================

/// Merge two sorted runs into `out`, appending in non-decreasing order.
///
/// Equal elements are taken from `left` first (stable merge). `out` is
/// cleared before the merge so its capacity can be reused by callers.
pub fn merge_into<T: Ord + Clone>(left: &[T], right: &[T], out: &mut Vec<T>) {
    out.clear();
    out.reserve(left.len() + right.len());

    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // Ties prefer the left run.
        if left[i] <= right[j] {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }

    // Exactly one of these tails is non-empty.
    out.extend(left[i..].iter().cloned());
    out.extend(right[j..].iter().cloned());
}

/// Merge the two sorted halves `[0, mid)` and `[mid, len)` of `data` in place.
///
/// A fresh auxiliary buffer of the range's length is filled by a stable
/// two-pointer merge and copied back into `data`.
pub fn merge_adjacent<T: Ord + Clone>(data: &mut [T], mid: usize) {
    let n = data.len();
    if mid == 0 || mid == n {
        return;
    }

    // Fast path: the seam is already ordered, so the whole range is sorted.
    if data[mid - 1] <= data[mid] {
        return;
    }

    let mut buffer: Vec<T> = Vec::with_capacity(n);
    {
        let (left, right) = data.split_at(mid);
        merge_into(left, right, &mut buffer);
    }

    data.clone_from_slice(&buffer);
}
