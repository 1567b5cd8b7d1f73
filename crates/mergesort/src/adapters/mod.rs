//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution mode adapters that connect the fluent
//! API to the engine. The core crate ships the batch adapter; extension
//! crates wrap it with parallel scheduling.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-memory batch sorting.
pub mod batch;
