//! Normalization conventions and their recursion coefficients.
//!
//! ## Purpose
//!
//! This module defines the two supported normalizations of the associated
//! Legendre functions and the fixed coefficients they contribute to the
//! degree and order recursions. The recursion shape is identical for both;
//! only these scale factors differ.
//!
//! ## Design notes
//!
//! * **Degree recursion**: For fixed order `m`, the scaled functions
//!   `q^(n+1) P[n,m](t)` satisfy `F[n] = A F[n-1] + B F[n-2]` with
//!   `A = t * Ax`. The Clenshaw step at degree `n` needs the coefficients of
//!   `n + 1` and `n + 2`.
//! * **Order recursion**: The sectoral functions `q (u q)^m P[m,m]` combined
//!   with the `cos(m lambda)`/`sin(m lambda)` rotation give a second three-term
//!   recursion over `m`. Its `A` coefficient is returned without the
//!   `cos(lambda)` factor so a circle can store it once per order.
//! * **Square roots**: All irrational factors come from a [`RootTable`].
//!
//! ## Key concepts
//!
//! | Normalization | `P[n,m]` relative to the unnormalized function |
//! |---------------|------------------------------------------------|
//! | Full          | `sqrt(k (2n+1) (n-m)! / (n+m)!)`, `k = 1` for `m = 0`, else `2` |
//! | Schmidt       | `sqrt(k (n-m)! / (n+m)!)`, same `k`            |
//!
//! ## Non-goals
//!
//! * This module does not run the recursions (see the algorithms layer).

// External dependencies
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::roots::{RootTable, real};

// ============================================================================
// Normalization Enum
// ============================================================================

/// Normalization of the associated Legendre functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Normalization {
    /// Fully normalized: the mean square of each basis function over the
    /// sphere is one. Used by gravity models.
    #[default]
    Full,

    /// Schmidt semi-normalized: `Full / sqrt(2n + 1)`. Used by magnetic
    /// models.
    Schmidt,
}

/// Coefficients of one step of the degree recursion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeStep<T> {
    /// `alpha[n + 1] / t`, needed again for the colatitude derivative.
    pub ax: T,

    /// `alpha[n + 1] = t * ax`.
    pub a: T,

    /// `beta[n + 2]`.
    pub b: T,
}

/// Scale applied to every coefficient before summation and removed at the
/// end, keeping the intermediate sums away from overflow at high degree.
///
/// Equals `2^(-3 e / 5)` where `e` is the maximum binary exponent of `T`
/// (`2^-614` for `f64`).
#[inline]
pub fn scale<T: Float>() -> T {
    let max_exponent = T::max_value().log2().ceil().to_i32().unwrap_or(1024);
    let exponent = -(3 * max_exponent.min(1 << 14)) / 5;
    real::<T>(2).powi(exponent)
}

impl Normalization {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the normalization.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Normalization::Full => "Full",
            Normalization::Schmidt => "Schmidt",
        }
    }

    // ========================================================================
    // Recursion Coefficients
    // ========================================================================

    /// Coefficients of the degree-recursion step at degree `n`, order `m`.
    ///
    /// `q = a / r`, `q2 = q * q`, `t = cos(theta)`.
    #[inline]
    pub fn degree_step<T: Float>(
        &self,
        root: &RootTable<T>,
        n: usize,
        m: usize,
        q: T,
        q2: T,
        t: T,
    ) -> DegreeStep<T> {
        match self {
            Normalization::Full => {
                let w = root[2 * n + 1] / (root[n - m + 1] * root[n + m + 1]);
                let ax = q * w * root[2 * n + 3];
                let b = -q2 * root[2 * n + 5] / (w * root[n - m + 2] * root[n + m + 2]);
                DegreeStep { ax, a: t * ax, b }
            }
            Normalization::Schmidt => {
                let w = root[n - m + 1] * root[n + m + 1];
                let ax = q * real::<T>(2 * n + 1) / w;
                let b = -q2 * w / (root[n - m + 2] * root[n + m + 2]);
                DegreeStep { ax, a: t * ax, b }
            }
        }
    }

    /// Coefficients `(alpha, beta)` of the order recursion at order `m >= 1`.
    ///
    /// The recursion uses `A = cos(lambda) * alpha` and `B = beta`.
    /// `uq = u * q`, `uq2 = uq * uq`.
    #[inline]
    pub fn order_step<T: Float>(&self, root: &RootTable<T>, m: usize, uq: T, uq2: T) -> (T, T) {
        match self {
            Normalization::Full => {
                let v = root[2] * root[2 * m + 3] / root[m + 1];
                let beta = -v * root[2 * m + 5] / (root[8] * root[m + 2]) * uq2;
                (v * uq, beta)
            }
            Normalization::Schmidt => {
                let v = root[2] * root[2 * m + 1] / root[m + 1];
                let beta = -v * root[2 * m + 3] / (root[8] * root[m + 2]) * uq2;
                (v * uq, beta)
            }
        }
    }

    /// Coefficients `(A, B)` closing the order recursion at `m = 0`.
    ///
    /// `A` multiplies `cos(lambda) v_c + sin(lambda) v_s` and `B` the second
    /// cosine state.
    #[inline]
    pub fn base_step<T: Float>(&self, root: &RootTable<T>, uq: T, uq2: T) -> (T, T) {
        match self {
            Normalization::Full => (root[3] * uq, -root[15] / real::<T>(2) * uq2),
            Normalization::Schmidt => (uq, -root[3] / real::<T>(2) * uq2),
        }
    }
}
