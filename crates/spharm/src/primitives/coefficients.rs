//! Packed coefficient storage and truncation parameters.
//!
//! ## Purpose
//!
//! This module defines the borrowed view over the caller's cosine and sine
//! coefficient arrays together with the truncation `(N, nmx, mmx)` that says
//! how the arrays are laid out and how much of them is summed.
//!
//! ## Design notes
//!
//! * **Borrowed**: A [`CoefficientSet`] never copies; it holds two slices for
//!   the lifetime `'a`, so the borrow checker keeps the arrays alive and
//!   immutable while any series built on them exists.
//! * **Triangular layout**: Term `(n, m)` lives at `n(n+1)/2 + m` in both
//!   arrays. The sine entries with `m = 0` are never read.
//! * **Signed degrees**: `-1` denotes an empty sum, so degrees are `i32`.
//!
//! ## Invariants
//!
//! * A validated set satisfies `N >= nmx >= mmx >= -1` and both arrays hold
//!   at least `(N + 1)(N + 2) / 2` entries.
//!
//! ## Non-goals
//!
//! * This module does not validate its inputs (see the engine validator).
//! * This module does not parse coefficient files.

// External dependencies
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Layout helpers
// ============================================================================

/// Position of term `(n, m)` in a triangular array.
#[inline]
pub const fn triangular_index(n: usize, m: usize) -> usize {
    n * (n + 1) / 2 + m
}

/// Number of entries of a triangular array of layout degree `degree`.
///
/// Returns zero for `degree < 0`.
#[inline]
pub const fn triangular_len(degree: i32) -> usize {
    if degree < 0 {
        0
    } else {
        let n = degree as usize;
        (n + 1) * (n + 2) / 2
    }
}

/// Largest layout degree whose triangular array fits in `len` entries.
///
/// Returns `-1` when `len` is zero.
pub fn degree_for_len(len: usize) -> i32 {
    let mut degree: i32 = -1;
    while triangular_len(degree + 1) <= len {
        degree += 1;
    }
    degree
}

// ============================================================================
// Truncation
// ============================================================================

/// Degree/order truncation of a coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Truncation {
    /// Layout degree `N`; governs the required array length.
    pub degree: i32,

    /// Maximum degree summed, `nmx`.
    pub max_degree: i32,

    /// Maximum order summed, `mmx`.
    pub max_order: i32,
}

impl Default for Truncation {
    fn default() -> Self {
        Self::empty()
    }
}

impl Truncation {
    /// Truncation with explicit layout degree, maximum degree and order.
    pub const fn new(degree: i32, max_degree: i32, max_order: i32) -> Self {
        Self {
            degree,
            max_degree,
            max_order,
        }
    }

    /// Sum every term of a layout of degree `degree`.
    pub const fn full(degree: i32) -> Self {
        Self::new(degree, degree, degree)
    }

    /// The empty sum.
    pub const fn empty() -> Self {
        Self::new(-1, -1, -1)
    }

    /// Whether `N >= nmx >= mmx >= -1` holds.
    pub const fn is_ordered(&self) -> bool {
        self.degree >= self.max_degree
            && self.max_degree >= self.max_order
            && self.max_order >= -1
    }

    /// Whether the sum has no terms.
    pub const fn is_empty(&self) -> bool {
        self.max_order < 0 || self.max_degree < 0
    }

    /// Whether every component of `other` is bounded by this truncation.
    pub const fn bounds(&self, other: &Truncation) -> bool {
        self.degree >= other.degree
            && self.max_degree >= other.max_degree
            && self.max_order >= other.max_order
    }

    /// Array length required by the layout degree.
    pub const fn required_len(&self) -> usize {
        triangular_len(self.degree)
    }

    /// Number of orders summed, `mmx + 1` (zero for the empty sum).
    pub const fn order_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.max_order as usize + 1
        }
    }
}

// ============================================================================
// Coefficient Set
// ============================================================================

/// Borrowed cosine/sine coefficient arrays with their truncation.
#[derive(Debug, Clone, Copy)]
pub struct CoefficientSet<'a, T> {
    c: &'a [T],
    s: &'a [T],
    truncation: Truncation,
}

impl<'a, T: Float> CoefficientSet<'a, T> {
    /// Wrap the arrays. Callers validate the truncation and lengths first.
    pub fn new(c: &'a [T], s: &'a [T], truncation: Truncation) -> Self {
        Self { c, s, truncation }
    }

    /// Cosine coefficient `C[n, m]`.
    #[inline]
    pub fn cos(&self, n: usize, m: usize) -> T {
        self.c[triangular_index(n, m)]
    }

    /// Sine coefficient `S[n, m]`.
    #[inline]
    pub fn sin(&self, n: usize, m: usize) -> T {
        self.s[triangular_index(n, m)]
    }

    /// The truncation of this set.
    #[inline]
    pub fn truncation(&self) -> Truncation {
        self.truncation
    }

    /// The cosine array as supplied.
    pub fn cos_coefficients(&self) -> &'a [T] {
        self.c
    }

    /// The sine array as supplied.
    pub fn sin_coefficients(&self) -> &'a [T] {
        self.s
    }
}
