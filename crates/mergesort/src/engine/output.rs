//! Output types for sort operations.
//!
//! ## Purpose
//!
//! This module defines the `SortReport` struct returned by every successful
//! sort call, carrying the timing and configuration a caller needs to
//! benchmark parallel execution against the sequential baseline.
//!
//! ## Design notes
//!
//! * **Completion signal**: The sorted data lives in the caller's sequence;
//!   the report only describes the run.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `elapsed` covers the sort pass only, not validation.
//! * `elapsed` is zero when timing is unavailable (`no_std` builds).
//!
//! ## Non-goals
//!
//! * This module does not perform measurements; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::time::Duration;

// ============================================================================
// Report Structure
// ============================================================================

/// Summary of one completed sort call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// Number of elements in the sorted range.
    pub len: usize,

    /// Leaf threshold used for the decomposition.
    pub threshold: usize,

    /// Wall-clock duration of the sort pass.
    pub elapsed: Duration,

    /// Whether a parallel sort pass was used.
    pub parallel: bool,
}

impl SortReport {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Elements sorted per second, or `None` when no time was measured.
    pub fn throughput(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            Some(self.len as f64 / secs)
        } else {
            None
        }
    }

    /// Speedup of this run relative to a baseline run over the same data.
    ///
    /// Returns `None` when either run has no measured time.
    pub fn speedup_over(&self, baseline: &SortReport) -> Option<f64> {
        let own = self.elapsed.as_secs_f64();
        let base = baseline.elapsed.as_secs_f64();
        if own > 0.0 && base > 0.0 {
            Some(base / own)
        } else {
            None
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements:  {}", self.len)?;
        writeln!(f, "  Threshold: {}", self.threshold)?;
        writeln!(
            f,
            "  Mode:      {}",
            if self.parallel { "parallel" } else { "sequential" }
        )?;
        writeln!(f, "  Elapsed:   {:?}", self.elapsed)?;

        if let Some(throughput) = self.throughput() {
            writeln!(f, "  Rate:      {:.0} elements/s", throughput)?;
        }

        Ok(())
    }
}
