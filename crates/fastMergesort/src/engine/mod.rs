//! Engine layer: parallel execution.
//!
//! # Purpose
//!
//! This layer provides the parallel sort pass injected into the core
//! `mergesort` execution engine. Orchestration, validation, timing, and
//! milestone delivery all remain in the core crate; only the recursion
//! scheduling lives here.

/// Parallel fork-join sort pass.
pub mod executor;
