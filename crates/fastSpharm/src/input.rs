//! Input abstractions for batch evaluation.
//!
//! ## Purpose
//!
//! This module lets the batch evaluators accept coordinates as slices,
//! vectors or one-dimensional `ndarray` arrays through a single trait.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a view of the caller's
//!   buffer.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected instead of
//!   copied.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements of the input container.
//!
//! ## Non-goals
//!
//! * This module does not convert between coordinate systems.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from spharm crate
use spharm::internals::primitives::errors::SpharmError;

/// Trait for types that can supply one coordinate per point.
pub trait CoordinateInput<T: Float> {
    /// View the coordinates as a contiguous slice.
    fn as_coordinate_slice(&self) -> Result<&[T], SpharmError>;
}

impl<T: Float> CoordinateInput<T> for [T] {
    fn as_coordinate_slice(&self) -> Result<&[T], SpharmError> {
        Ok(self)
    }
}

impl<T: Float> CoordinateInput<T> for Vec<T> {
    fn as_coordinate_slice(&self) -> Result<&[T], SpharmError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> CoordinateInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_coordinate_slice(&self) -> Result<&[T], SpharmError> {
        self.as_slice().ok_or_else(|| {
            SpharmError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
