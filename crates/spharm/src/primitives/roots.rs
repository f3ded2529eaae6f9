//! Square-root table and integer-to-float conversion.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Index;
use num_traits::Float;

/// Smallest table size; the order recursion reads up to `sqrt(15)`.
const MIN_ROOTS: usize = 16;

/// Convert a small non-negative integer to `T`.
#[inline]
pub fn real<T: Float>(k: usize) -> T {
    T::from(k).unwrap_or_else(T::infinity)
}

/// Table of `sqrt(k)` for `k = 0..len`.
///
/// The recursion coefficients for degree `n` need `sqrt(2n + 5)`, so a
/// table for maximum degree `nmx` holds `max(2 nmx + 6, 16)` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct RootTable<T> {
    roots: Vec<T>,
}

impl<T: Float> RootTable<T> {
    /// Build the table for sums up to degree `max_degree`.
    pub fn new(max_degree: i32) -> Self {
        let needed = if max_degree < 0 {
            0
        } else {
            2 * max_degree as usize + 6
        };
        let len = needed.max(MIN_ROOTS);
        let roots = (0..len).map(|k| real::<T>(k).sqrt()).collect();
        Self { roots }
    }
}

impl<T> Index<usize> for RootTable<T> {
    type Output = T;

    #[inline]
    fn index(&self, k: usize) -> &T {
        &self.roots[k]
    }
}
