//! Adapters layer: execution mode adapters with parallel support.
//!
//! # Purpose
//!
//! This layer wraps the core `mergesort` adapters with parallel scheduling:
//! pass injection and worker-pool ownership.

/// Parallel in-memory batch sorting.
pub mod batch;
