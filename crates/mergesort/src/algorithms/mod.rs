//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core sorting algorithms: the stable merge step
//! and the sequential leaf sorter. It depends only on primitives.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stable merge of sorted runs.
pub mod merge;

/// Sequential leaf sorting.
pub mod sequential;
