//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a sort call by coordinating between primitives
//! (ranges, milestones, errors) and algorithms (merge, sequential sort).
//! It provides the recursion driver, timing, and milestone delivery.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for sort operations.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sort operations.
pub mod output;
