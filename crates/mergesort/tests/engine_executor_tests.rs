#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! These tests verify the sequential divide-and-conquer pass and the
//! executor orchestration:
//! - Decomposition correctness across thresholds
//! - Custom pass dispatch through the engine hook
//! - Milestone delivery and report contents
//!
//! ## Test Organization
//!
//! 1. **Sequential Pass** - correctness, threshold invariance, randomized runs
//! 2. **Executor Orchestration** - hooks, milestones, reports
//! 3. **Report Queries** - throughput and speedup helpers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;

use mergesort::internals::engine::executor::{
    sort_pass_sequential, SortConfig, SortExecutor, DEFAULT_THRESHOLD,
};
use mergesort::internals::engine::output::SortReport;
use mergesort::internals::primitives::progress::{Milestone, ProgressObserver};
use mergesort::internals::primitives::range::SortRange;

// ============================================================================
// Helper Functions
// ============================================================================

fn random_vec(len: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

// ============================================================================
// Sequential Pass Tests
// ============================================================================

/// Test the sequential pass on the literal decomposition scenario.
///
/// Verifies `[5,3,4,1,2]` with threshold 2 sorts to `[1,2,3,4,5]`.
#[test]
fn test_sequential_pass_literal_scenario() {
    let mut data = vec![5, 3, 4, 1, 2];
    sort_pass_sequential(&mut data, 2);
    assert_eq!(data, vec![1, 2, 3, 4, 5], "Literal scenario should sort completely");
}

/// Test that the result is identical for every threshold.
///
/// Verifies that the threshold only affects decomposition granularity.
#[test]
fn test_sequential_pass_threshold_invariance() {
    let original = random_vec(512);
    let mut expected = original.clone();
    expected.sort_unstable();

    for threshold in [1, 2, 3, 7, 64, 511, 512, 1024] {
        let mut data = original.clone();
        sort_pass_sequential(&mut data, threshold);
        assert_eq!(data, expected, "Threshold {threshold} should not change the result");
    }
}

/// Test degenerate inputs.
///
/// Verifies that lengths 0 and 1 are no-ops.
#[test]
fn test_sequential_pass_degenerate_lengths() {
    let mut empty: Vec<i32> = vec![];
    sort_pass_sequential(&mut empty, 1);
    assert!(empty.is_empty(), "Empty slice should remain empty");

    let mut single = vec![42];
    sort_pass_sequential(&mut single, 1);
    assert_eq!(single, vec![42], "Single element should be untouched");
}

/// Test randomized equivalence with the library baseline.
///
/// Verifies correctness across many random arrays and sizes.
#[test]
fn test_sequential_pass_randomized_equivalence() {
    for len in [0, 1, 2, 3, 10, 100, 1000] {
        let original = random_vec(len);
        let mut expected = original.clone();
        expected.sort_unstable();

        let mut data = original.clone();
        sort_pass_sequential(&mut data, 4);
        assert_eq!(data, expected, "Length-{len} array should match the baseline sort");
    }
}

// ============================================================================
// Executor Orchestration Tests
// ============================================================================

/// Test that the executor sorts only the requested range.
///
/// Verifies indices outside [start, end) are untouched.
#[test]
fn test_executor_sorts_requested_range_only() {
    let mut data = vec![9, 7, 8, 1, 0];
    let config = SortConfig::<i32> {
        threshold: 1,
        ..SortConfig::default()
    };

    let report = SortExecutor::run_with_config(&mut data, SortRange::new(1, 4), &config);

    assert_eq!(data, vec![9, 1, 7, 8, 0], "Only [1, 4) should be sorted");
    assert_eq!(report.len, 3, "Report should cover the requested range length");
}

/// Test custom pass dispatch.
///
/// Verifies that an injected pass replaces the sequential recursion.
#[test]
fn test_executor_dispatches_custom_pass() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counting_pass(data: &mut [i32], threshold: usize) {
        CALLS.fetch_add(1, Ordering::SeqCst);
        sort_pass_sequential(data, threshold);
    }

    let mut data = vec![3, 1, 2];
    let config = SortConfig {
        threshold: 1,
        custom_sort_pass: Some(counting_pass as fn(&mut [i32], usize)),
        parallel: true,
        ..SortConfig::default()
    };

    let report = SortExecutor::run_with_config(&mut data, SortRange::new(0, 3), &config);

    assert_eq!(CALLS.load(Ordering::SeqCst), 1, "Custom pass should be called once");
    assert_eq!(data, vec![1, 2, 3], "Custom pass should still sort the data");
    assert!(report.parallel, "Report should reflect the parallel hint");
}

/// Test milestone delivery.
///
/// Verifies Started then Completed, each exactly once, with consistent
/// lengths.
#[test]
fn test_executor_delivers_milestones_once_in_order() {
    let events: Arc<Mutex<Vec<Milestone>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);

    let config = SortConfig::<i64> {
        threshold: 2,
        observer: Some(ProgressObserver::new(move |m| {
            sink.lock().unwrap().push(*m);
        })),
        ..SortConfig::default()
    };

    let mut data = random_vec(64);
    SortExecutor::run_with_config(&mut data, SortRange::new(0, 64), &config);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2, "Exactly two milestones should be delivered");
    assert!(
        matches!(events[0], Milestone::Started { len: 64, threshold: 2 }),
        "First milestone should be Started with the call parameters"
    );
    assert!(
        matches!(events[1], Milestone::Completed { len: 64, .. }),
        "Second milestone should be Completed for the same range"
    );
}

// ============================================================================
// Report Query Tests
// ============================================================================

/// Test throughput and speedup helpers.
///
/// Verifies the zero-duration guards and the ratio arithmetic.
#[test]
fn test_report_queries() {
    let fast = SortReport {
        len: 1_000,
        threshold: DEFAULT_THRESHOLD,
        elapsed: Duration::from_millis(10),
        parallel: true,
    };
    let slow = SortReport {
        elapsed: Duration::from_millis(40),
        parallel: false,
        ..fast
    };
    let untimed = SortReport {
        elapsed: Duration::ZERO,
        ..fast
    };

    let throughput = fast.throughput().expect("timed run should have throughput");
    assert!(
        (throughput - 100_000.0).abs() < 1.0,
        "Throughput should be len / seconds, got {throughput}"
    );
    assert_eq!(untimed.throughput(), None, "Zero elapsed should yield no throughput");

    let speedup = fast.speedup_over(&slow).expect("timed runs should have a speedup");
    assert!(
        (speedup - 4.0).abs() < 1e-9,
        "Speedup should be baseline / own, got {speedup}"
    );
    assert_eq!(fast.speedup_over(&untimed), None, "Untimed baseline should yield no speedup");

    let rendered = format!("{}", fast);
    assert!(rendered.contains("parallel"), "Display should include the execution mode");
    assert!(rendered.contains("1000"), "Display should include the element count");
}
