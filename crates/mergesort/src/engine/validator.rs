//! Input validation for sort configuration and ranges.
//!
//! ## Purpose
//!
//! This module provides the fail-fast validation functions for sort
//! parameters and caller-supplied ranges. It checks requirements such as
//! range bounds and threshold positivity before any element is touched.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Pre-mutation**: Every check runs before the engine writes to the
//!   sequence, so a rejected call leaves the data untouched.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Key concepts
//!
//! * **Range bounds**: Enforces `0 <= start <= end <= len`.
//! * **Threshold**: Enforces `threshold >= 1` so every split makes progress.
//! * **Builder hygiene**: Rejects parameters configured more than once.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, split, or merge data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort configuration and ranges.
///
/// Provides static methods returning `Result<(), SortError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Range Validation
    // ========================================================================

    /// Validate a caller-supplied `[start, end)` interval against a
    /// sequence length.
    pub fn validate_range(start: usize, end: usize, len: usize) -> Result<(), SortError> {
        if start > end || end > len {
            return Err(SortError::InvalidRange { start, end, len });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the leaf threshold.
    ///
    /// A threshold of zero would make every range an internal range and the
    /// recursion would never reach a base case for non-empty input.
    pub fn validate_threshold(threshold: usize) -> Result<(), SortError> {
        if threshold < 1 {
            return Err(SortError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortError> {
        if let Some(parameter) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
