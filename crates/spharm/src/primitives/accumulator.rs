//! Compensated (extended-precision) running sums.
//!
//! ## Purpose
//!
//! This module provides [`Accumulator`], a running sum carried as an
//! unevaluated pair `(s, t)` whose effective value is `s + t`. Every addition
//! uses an error-free two-sum transformation so the rounding error of the
//! whole sum stays within about one unit in the last place, independent of
//! the number and order of the terms.
//!
//! ## Design notes
//!
//! * **Two-sum**: Knuth's branch-free `TwoSum` splits each addition into the
//!   rounded result and its exact error.
//! * **Normalization**: After each addition `s` holds the rounded sum and
//!   `t` the (small) correction, except for rare cancellation patterns where
//!   `t` absorbs one extra rounding.
//! * **Products**: Products are split exactly with a fused multiply-add so
//!   `a * b` can be folded in without an extra rounding.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `|t| <= ulp(s) / 2` after every `add` (modulo the cancellation case).
//! * Comparisons are made on the effective value `s + t`.
//!
//! ## Non-goals
//!
//! * This module does not provide arbitrary-precision arithmetic.

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use core::ops::{AddAssign, MulAssign, Neg, SubAssign};
use num_traits::Float;

// ============================================================================
// Error-free transformations
// ============================================================================

/// Error-free sum: returns `(s, t)` with `s = fl(u + v)` and `s + t = u + v`
/// exactly.
#[inline]
pub fn two_sum<T: Float>(u: T, v: T) -> (T, T) {
    let s = u + v;
    let up = s - v;
    let vpp = s - up;
    let up = up - u;
    let vpp = vpp - v;
    // Keep the sign of a zero sum in s and a clean zero in t.
    let t = if s != T::zero() {
        T::zero() - (up + vpp)
    } else {
        s
    };
    (s, t)
}

/// Error-free product: returns `(p, e)` with `p = fl(a * b)` and
/// `p + e = a * b` exactly (barring underflow).
#[inline]
pub fn two_product<T: Float>(a: T, b: T) -> (T, T) {
    let p = a * b;
    let e = a.mul_add(b, -p);
    (p, e)
}

// ============================================================================
// Accumulator
// ============================================================================

/// Running sum with compensated error tracking.
#[derive(Debug, Clone, Copy)]
pub struct Accumulator<T> {
    /// Rounded running sum.
    s: T,

    /// Error carry; the accumulated value is `s + t`.
    t: T,
}

impl<T: Float> Default for Accumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> From<T> for Accumulator<T> {
    fn from(y: T) -> Self {
        Self::with_value(y)
    }
}

impl<T: Float> Accumulator<T> {
    /// Create an accumulator holding zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            s: T::zero(),
            t: T::zero(),
        }
    }

    /// Create an accumulator holding `y`.
    #[inline]
    pub fn with_value(y: T) -> Self {
        Self { s: y, t: T::zero() }
    }

    /// Add `y` to the running sum.
    #[inline]
    pub fn add(&mut self, y: T) {
        // Accumulate starting at the least significant end; the exact sum is
        // then s + t + u with the components non-overlapping.
        let (y, u) = two_sum(y, self.t);
        let (s, t) = two_sum(y, self.s);
        self.s = s;
        self.t = t;
        if self.s == T::zero() {
            // s == 0 implies t == 0, so the whole sum is u.
            self.s = u;
        } else {
            self.t = self.t + u;
        }
    }

    /// Add the exact product `a * b` to the running sum.
    #[inline]
    pub fn add_product(&mut self, a: T, b: T) {
        let (p, e) = two_product(a, b);
        self.add(e);
        self.add(p);
    }

    /// Return the accumulated value plus `y` without changing the state.
    #[inline]
    pub fn sum(&self, y: T) -> T {
        let mut a = *self;
        a.add(y);
        a.s
    }

    /// The accumulated value, rounded to `T`.
    #[inline]
    pub fn value(&self) -> T {
        self.s
    }

    /// The raw `(s, t)` pair.
    #[inline]
    pub fn components(&self) -> (T, T) {
        (self.s, self.t)
    }

    /// Flip the sign of the accumulated value.
    #[inline]
    pub fn negate(&mut self) {
        self.s = -self.s;
        self.t = -self.t;
    }

    /// Multiply the accumulated value by `y`.
    ///
    /// The rounding error of `s * y` is recovered with a fused multiply-add
    /// and kept in the error carry.
    #[inline]
    pub fn mul(&mut self, y: T) {
        let d = self.s;
        self.s = self.s * y;
        let d = y.mul_add(d, -self.s);
        self.t = y.mul_add(self.t, d);
    }

    /// Compensated difference `self - other`, rounded to `T`.
    #[inline]
    fn difference(&self, other: &Self) -> T {
        let mut d = *self;
        d.add(-other.t);
        d.add(-other.s);
        d.s
    }

    /// Compare the effective value with a scalar.
    #[inline]
    pub fn compare(&self, y: T) -> Option<Ordering> {
        self.sum(-y).partial_cmp(&T::zero())
    }
}

// ============================================================================
// Comparisons
// ============================================================================

impl<T: Float> PartialEq for Accumulator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.difference(other) == T::zero()
    }
}

impl<T: Float> PartialOrd for Accumulator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.difference(other).partial_cmp(&T::zero())
    }
}

macro_rules! impl_scalar_comparisons {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for Accumulator<$t> {
                fn eq(&self, other: &$t) -> bool {
                    self.compare(*other) == Some(Ordering::Equal)
                }
            }

            impl PartialOrd<$t> for Accumulator<$t> {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.compare(*other)
                }
            }
        )*
    };
}

impl_scalar_comparisons!(f32, f64);

// ============================================================================
// Operators
// ============================================================================

impl<T: Float> AddAssign<T> for Accumulator<T> {
    fn add_assign(&mut self, y: T) {
        self.add(y);
    }
}

impl<T: Float> SubAssign<T> for Accumulator<T> {
    fn sub_assign(&mut self, y: T) {
        self.add(-y);
    }
}

impl<T: Float> MulAssign<T> for Accumulator<T> {
    fn mul_assign(&mut self, y: T) {
        self.mul(y);
    }
}

impl<T: Float> Neg for Accumulator<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

impl<T: Float + Display> Display for Accumulator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.s)
    }
}
