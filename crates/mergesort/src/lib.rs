//! # Merge Sort Core
//!
//! Divide-and-conquer merge sort over in-memory sequences of totally
//! ordered elements: range primitives, a stable merge step, an optimized
//! sequential baseline, and an instrumented execution engine with progress
//! milestones.
//!
//! This crate is the sequential core. Multi-threaded fork-join execution
//! lives in the `fastMergesort` extension crate, which injects a parallel
//! sort pass through this crate's engine hooks.
//!
//! ## How it works
//!
//! A sort call decomposes its range recursively: ranges at or below a
//! configurable *threshold* are leaf ranges, sorted in place by the
//! sequential sorter; larger ranges split at their midpoint, sort both
//! halves, and recombine them with a stable two-pointer merge through an
//! auxiliary buffer. The threshold only controls decomposition granularity;
//! the sorted result is identical for every valid threshold.
//!
//! ## Quick Start
//!
//! ```rust
//! use mergesort::prelude::*;
//!
//! let mut data = vec![5, 3, 4, 1, 2];
//!
//! let sorter = MergeSort::new()
//!     .threshold(2)       // leaf ranges of at most 2 elements
//!     .adapter(Batch)
//!     .build()?;
//!
//! let report = sorter.sort(&mut data)?;
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! println!("{}", report);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Sub-range sorting
//!
//! ```rust
//! use mergesort::prelude::*;
//!
//! let mut data = vec![9, 7, 8, 1, 0];
//! let sorter = MergeSort::new().adapter(Batch).build()?;
//!
//! // Only [1, 4) is sorted; indices 0 and 4 are untouched.
//! sorter.sort_range(&mut data, 1, 4)?;
//! assert_eq!(data, vec![9, 1, 7, 8, 0]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Progress observation
//!
//! ```rust
//! use mergesort::prelude::*;
//!
//! let observer = ProgressObserver::new(|milestone| match milestone {
//!     Milestone::Started { len, .. } => eprintln!("sorting {len} elements"),
//!     Milestone::Completed { elapsed, .. } => eprintln!("done in {elapsed:?}"),
//! });
//!
//! let sorter = MergeSort::new().observer(observer).adapter(Batch).build()?;
//! let mut data = vec![3, 1, 2];
//! sorter.sort(&mut data)?;
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Error Handling
//!
//! `sort` and `sort_range` return `Result<SortReport, SortError>`. Range
//! violations fail before any element is touched:
//!
//! ```rust
//! use mergesort::prelude::*;
//!
//! let sorter = MergeSort::new().adapter(Batch).build()?;
//! let mut data = vec![5, 3, 4, 1, 2];
//!
//! let err = sorter.sort_range(&mut data, 3, 2).unwrap_err();
//! assert!(matches!(err, SortError::InvalidRange { .. }));
//! assert_eq!(data, vec![5, 3, 4, 1, 2]); // unmodified
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## no_std
//!
//! Disable the default `std` feature for `no_std` environments (an
//! allocator is required). Without `std`, elapsed times in reports and
//! milestones are zero.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Algorithms - merge and sequential sorting.
mod algorithms;

// Layer 3: Engine - orchestration and execution control.
mod engine;

// Layer 4: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for merge sorting.
mod api;

// Standard mergesort prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::Batch,
        Milestone, MergeSortBuilder as MergeSort, ProgressObserver, SortError, SortReport,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
