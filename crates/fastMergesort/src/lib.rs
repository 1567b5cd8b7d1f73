//! # Fast Merge Sort
//!
//! Fork-join parallel merge sort for **Rust**, built on the `mergesort`
//! core. Large ranges split recursively at their midpoint; each split fans
//! out as two concurrent tasks over a work-stealing worker pool, waits for
//! both at a join barrier, and recombines the sorted halves with a stable
//! merge. Ranges at or below a configurable threshold are sorted in place
//! by the optimized sequential baseline.
//!
//! Because every split hands its children disjoint mutable views of the
//! sequence, no locks are taken on the data: the partitioning discipline
//! itself is the concurrency-safety argument, and the borrow checker
//! enforces it at compile time.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastMergesort::prelude::*;
//!
//! let mut data = vec![5, 3, 4, 1, 2];
//!
//! // Build the sorter with parallel execution (default)
//! let sorter = MergeSort::new()
//!     .threshold(2)       // leaf ranges of at most 2 elements
//!     .adapter(Batch)     // parallel by default
//!     .build()?;
//!
//! let report = sorter.sort(&mut data)?;
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! println!("{}", report);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Elements:  5
//!   Threshold: 2
//!   Mode:      parallel
//!   Elapsed:   12.5µs
//!   Rate:      400000 elements/s
//! ```
//!
//! ### Benchmarking against the sequential baseline
//!
//! ```rust
//! use fastMergesort::prelude::*;
//!
//! let original: Vec<i64> = (0..100_000).rev().collect();
//!
//! let parallel = MergeSort::new().adapter(Batch).build()?;
//! let sequential = MergeSort::new().adapter(Batch).parallel(false).build()?;
//!
//! let mut a = original.clone();
//! let mut b = original.clone();
//!
//! let par_report = parallel.sort(&mut a)?;
//! let seq_report = sequential.sort(&mut b)?;
//!
//! assert_eq!(a, b);
//! if let Some(speedup) = par_report.speedup_over(&seq_report) {
//!     println!("speedup: {speedup:.2}x");
//! }
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Dedicated worker pool
//!
//! ```rust
//! use fastMergesort::prelude::*;
//!
//! // The built sorter owns its pool; repeated sorts reuse it.
//! let sorter = MergeSort::new().adapter(Batch).num_threads(4).build()?;
//!
//! let mut data = vec![9, 1, 8, 2, 7, 3];
//! sorter.sort(&mut data)?;
//! assert_eq!(data, vec![1, 2, 3, 7, 8, 9]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! `sort` accepts `&mut Vec<T>`, `&mut [T]`, or a mutable one-dimensional
//! [ndarray](https://docs.rs/ndarray) array; elements are sorted where
//! they live.
//!
//! ```rust
//! use fastMergesort::prelude::*;
//! use ndarray::Array1;
//!
//! let mut data = Array1::from_vec(vec![3, 1, 2]);
//! let sorter = MergeSort::new().adapter(Batch).build()?;
//! sorter.sort(&mut data)?;
//! assert_eq!(data.to_vec(), vec![1, 2, 3]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `sort` and `sort_range` return `Result<SortReport, SortError>`. Invalid
//! ranges fail before any element is touched; the `?` operator is
//! idiomatic:
//!
//! ```rust
//! use fastMergesort::prelude::*;
//!
//! let sorter = MergeSort::new().adapter(Batch).build()?;
//!
//! let mut data = vec![5, 3, 4, 1, 2];
//! let err = sorter.sort_range(&mut data, 3, 2).unwrap_err();
//! assert!(matches!(err, SortError::InvalidRange { .. }));
//! assert_eq!(data, vec![5, 3, 4, 1, 2]);
//! # Result::<(), SortError>::Ok(())
//! ```

#![allow(non_snake_case)]

// Engine - parallel execution.
mod engine;

// Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for parallel merge sorting.
mod api;

// Input data handling.
mod input;

// Standard fastMergesort prelude.
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
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
