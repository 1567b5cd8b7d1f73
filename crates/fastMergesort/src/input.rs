//! Input abstractions for sorting.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over sortable containers,
//! allowing `sort` and `sort_range` to mutate multiple data formats
//! (slices, vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct mutable slice access to the underlying
//!   buffer; elements are sorted where they live.
//! * **Interoperability**: Bridges standard Rust collections with
//!   specialized numerical libraries.
//! * **Fail-fast validation**: Non-contiguous multi-dimensional views are
//!   rejected before any element is touched.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an
//!   error.
//!
//! ## Non-goals
//!
//! * This module does not copy, reshape, or filter data.

// External dependencies
use ndarray::{ArrayBase, DataMut, Ix1};

// Export dependencies from mergesort crate
use mergesort::internals::primitives::errors::SortError;

/// Trait for containers that can be sorted in place.
pub trait SortInput<T> {
    /// Borrow the container's contents as one contiguous mutable slice.
    fn as_sort_slice_mut(&mut self) -> Result<&mut [T], SortError>;
}

impl<T> SortInput<T> for [T] {
    fn as_sort_slice_mut(&mut self) -> Result<&mut [T], SortError> {
        Ok(self)
    }
}

impl<T> SortInput<T> for Vec<T> {
    fn as_sort_slice_mut(&mut self) -> Result<&mut [T], SortError> {
        Ok(self.as_mut_slice())
    }
}

impl<T, S> SortInput<T> for ArrayBase<S, Ix1>
where
    S: DataMut<Elem = T>,
{
    fn as_sort_slice_mut(&mut self) -> Result<&mut [T], SortError> {
        self.as_slice_mut().ok_or_else(|| {
            SortError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
