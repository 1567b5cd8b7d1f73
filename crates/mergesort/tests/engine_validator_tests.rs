#![cfg(feature = "dev")]
//! Tests for the fail-fast validation utilities.
//!
//! These tests verify the precondition checks that run before any element
//! is mutated:
//! - Range bounds against the sequence length
//! - Threshold positivity
//! - Builder duplicate-parameter hygiene
//!
//! ## Test Organization
//!
//! 1. **Range Validation** - bounds ordering, length clamping
//! 2. **Threshold Validation** - positivity requirement
//! 3. **Duplicate Detection** - builder hygiene

use mergesort::internals::engine::validator::Validator;
use mergesort::internals::primitives::errors::SortError;

// ============================================================================
// Range Validation Tests
// ============================================================================

/// Test that well-formed ranges pass validation.
///
/// Verifies full, partial, and empty intervals.
#[test]
fn test_validate_range_accepts_well_formed() {
    assert!(Validator::validate_range(0, 5, 5).is_ok(), "Full range should be valid");
    assert!(Validator::validate_range(1, 4, 5).is_ok(), "Interior range should be valid");
    assert!(Validator::validate_range(3, 3, 5).is_ok(), "Empty range should be valid");
    assert!(Validator::validate_range(5, 5, 5).is_ok(), "Empty range at end should be valid");
    assert!(Validator::validate_range(0, 0, 0).is_ok(), "Empty sequence should be valid");
}

/// Test that inverted bounds are rejected.
///
/// Verifies the start > end case from the invalid-input scenario.
#[test]
fn test_validate_range_rejects_inverted_bounds() {
    let err = Validator::validate_range(3, 2, 5).unwrap_err();
    assert_eq!(
        err,
        SortError::InvalidRange { start: 3, end: 2, len: 5 },
        "Inverted bounds should report the offending values"
    );
}

/// Test that out-of-bounds ends are rejected.
///
/// Verifies end > len detection.
#[test]
fn test_validate_range_rejects_out_of_bounds() {
    let err = Validator::validate_range(0, 6, 5).unwrap_err();
    assert!(
        matches!(err, SortError::InvalidRange { end: 6, len: 5, .. }),
        "End past the sequence should be rejected"
    );
}

// ============================================================================
// Threshold Validation Tests
// ============================================================================

/// Test threshold positivity.
///
/// Verifies that zero is rejected and one is the minimum accepted value.
#[test]
fn test_validate_threshold() {
    assert_eq!(
        Validator::validate_threshold(0).unwrap_err(),
        SortError::InvalidThreshold(0),
        "Threshold 0 should be rejected"
    );
    assert!(Validator::validate_threshold(1).is_ok(), "Threshold 1 should be accepted");
    assert!(
        Validator::validate_threshold(usize::MAX).is_ok(),
        "Arbitrarily large thresholds should be accepted"
    );
}

// ============================================================================
// Duplicate Detection Tests
// ============================================================================

/// Test duplicate-parameter reporting.
///
/// Verifies that a tracked duplicate surfaces the parameter name.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok(), "No duplicates should pass");

    let err = Validator::validate_no_duplicates(Some("threshold")).unwrap_err();
    assert_eq!(
        err,
        SortError::DuplicateParameter { parameter: "threshold" },
        "Duplicate should report the parameter name"
    );
}
