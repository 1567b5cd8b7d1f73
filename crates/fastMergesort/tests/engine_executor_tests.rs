#![cfg(all(feature = "dev", feature = "cpu"))]
//! Tests for the parallel sort pass.
//!
//! These tests verify the fork-join recursion in isolation:
//! - Equivalence with the sequential baseline on random arrays
//! - Threshold invariance of the result
//! - Degenerate inputs and single-leaf execution
//!
//! ## Test Organization
//!
//! 1. **Equivalence** - randomized comparison against the baseline
//! 2. **Threshold Behavior** - invariance, single-leaf degenerate case
//! 3. **Element Types** - generic ordering beyond integers

use rand::Rng;

use fastMergesort::internals::engine::executor::sort_pass_parallel;

// ============================================================================
// Helper Functions
// ============================================================================

fn random_vec(len: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

// ============================================================================
// Equivalence Tests
// ============================================================================

/// Test randomized equivalence with the sequential baseline.
///
/// Verifies that parallel decomposition produces exactly the baseline
/// result across sizes.
#[test]
fn test_parallel_pass_matches_baseline() {
    for len in [0, 1, 2, 3, 17, 100, 1_000, 50_000] {
        let original = random_vec(len);
        let mut expected = original.clone();
        expected.sort_unstable();

        let mut data = original.clone();
        sort_pass_parallel(&mut data, 64);
        assert_eq!(data, expected, "Length-{len} array should match the baseline sort");
    }
}

/// Test the literal decomposition scenario.
///
/// Verifies `[5,3,4,1,2]` with threshold 2 sorts to `[1,2,3,4,5]`.
#[test]
fn test_parallel_pass_literal_scenario() {
    let mut data = vec![5, 3, 4, 1, 2];
    sort_pass_parallel(&mut data, 2);
    assert_eq!(data, vec![1, 2, 3, 4, 5], "Literal scenario should sort completely");
}

// ============================================================================
// Threshold Behavior Tests
// ============================================================================

/// Test that the result is identical for every threshold.
///
/// Verifies that the threshold only affects decomposition granularity.
#[test]
fn test_parallel_pass_threshold_invariance() {
    let original = random_vec(2_048);
    let mut expected = original.clone();
    expected.sort_unstable();

    for threshold in [1, 2, 5, 64, 1_000, 2_048, 10_000] {
        let mut data = original.clone();
        sort_pass_parallel(&mut data, threshold);
        assert_eq!(data, expected, "Threshold {threshold} should not change the result");
    }
}

/// Test single-leaf execution.
///
/// Verifies that threshold >= len never splits and still sorts.
#[test]
fn test_parallel_pass_single_leaf() {
    let mut data = random_vec(100);
    let mut expected = data.clone();
    expected.sort_unstable();

    sort_pass_parallel(&mut data, usize::MAX);
    assert_eq!(data, expected, "Single-leaf execution should equal the baseline");
}

// ============================================================================
// Element Type Tests
// ============================================================================

/// Test sorting a non-integer ordered type.
///
/// Verifies the generic `Ord + Clone + Send` contract.
#[test]
fn test_parallel_pass_generic_elements() {
    let mut data: Vec<String> = ["pear", "apple", "fig", "date", "cherry", "banana"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    sort_pass_parallel(&mut data, 2);

    let expected: Vec<String> = ["apple", "banana", "cherry", "date", "fig", "pear"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(data, expected, "Strings should sort lexicographically");
}
