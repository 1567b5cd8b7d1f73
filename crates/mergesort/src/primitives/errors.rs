//! Error types for sort operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring and
//! running a sort, including range validation, parameter constraints, and
//! worker-pool availability.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending bounds).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Range validation**: Out-of-bounds or inverted `[start, end)` intervals.
//! 2. **Parameter validation**: Non-positive thresholds, duplicate builder calls.
//! 3. **Pool availability**: Worker pool construction or submission failures.
//! 4. **Feature support**: Features not supported by the selected execution adapter.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Range errors are raised before any element of the sequence is mutated.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sort operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The requested `[start, end)` interval violates `0 <= start <= end <= len`.
    InvalidRange {
        /// Start of the requested interval (inclusive).
        start: usize,
        /// End of the requested interval (exclusive).
        end: usize,
        /// Length of the sequence being sorted.
        len: usize,
    },

    /// The leaf threshold must be at least 1.
    InvalidThreshold(usize),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// The worker pool could not be constructed or could not accept work.
    PoolUnavailable(String),

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Batch").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidRange { start, end, len } => {
                write!(
                    f,
                    "Invalid range: [{start}, {end}) over {len} elements (need start <= end <= len)"
                )
            }
            Self::InvalidThreshold(threshold) => {
                write!(f, "Invalid threshold: {threshold} (must be at least 1)")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::PoolUnavailable(msg) => write!(f, "Worker pool unavailable: {}", msg),
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
