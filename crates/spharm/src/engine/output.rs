//! Output type of a point evaluation.
//!
//! ## Purpose
//!
//! This module defines [`Evaluation`], the value of a harmonic sum at one
//! point together with its cartesian gradient.
//!
//! ## Design notes
//!
//! * **Plain data**: `Copy`, no heap, so batch evaluators can collect it.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * The gradient is `[dV/dx, dV/dy, dV/dz]`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Result Structure
// ============================================================================

/// Value and cartesian gradient of a harmonic sum at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation<T> {
    /// The sum `V`.
    pub value: T,

    /// `[dV/dx, dV/dy, dV/dz]`.
    pub gradient: [T; 3],
}

impl<T: Float> Evaluation<T> {
    /// Evaluation from a value and gradient.
    #[inline]
    pub fn new(value: T, gradient: [T; 3]) -> Self {
        Self { value, gradient }
    }

    /// The empty sum: zero value and zero gradient.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), [T::zero(); 3])
    }

    /// `dV/dx`.
    #[inline]
    pub fn gx(&self) -> T {
        self.gradient[0]
    }

    /// `dV/dy`.
    #[inline]
    pub fn gy(&self) -> T {
        self.gradient[1]
    }

    /// `dV/dz`.
    #[inline]
    pub fn gz(&self) -> T {
        self.gradient[2]
    }

    /// Euclidean norm of the gradient.
    pub fn gradient_norm(&self) -> T {
        let [gx, gy, gz] = self.gradient;
        gx.hypot(gy).hypot(gz)
    }
}

impl<T: Float> From<(T, [T; 3])> for Evaluation<T> {
    fn from((value, gradient): (T, [T; 3])) -> Self {
        Self::new(value, gradient)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Evaluation<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let [gx, gy, gz] = self.gradient;
        write!(f, "V = {}, grad = ({}, {}, {})", self.value, gx, gy, gz)
    }
}
