//! Decomposition of evaluation points into circle and azimuth parts.
//!
//! ## Purpose
//!
//! This module splits a cartesian point into the quantities the two halves
//! of the sum need: the circle part `(r, t, u, q)` used by the degree sum and
//! the azimuth `(cos lambda, sin lambda)` used by the order sum.
//!
//! ## Design notes
//!
//! * **Pole**: On the polar axis the azimuth is undefined; it is taken as
//!   `lambda = 0` and `u = sin(theta)` is clamped to `eps^(3/2)`. The order
//!   `m > 0` terms then carry a factor of at most `eps^(3/2)` in the value
//!   while the gradient keeps its finite limit.
//! * **Origin**: At `r = 0` the colatitude is taken as `pi / 2`.
//!
//! ## Invariants
//!
//! * `t^2 + u^2 = 1` up to rounding away from the pole.
//! * `cos^2 + sin^2 = 1` for every [`Azimuth`] produced here.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::angle::sincosd;

/// Lower bound on `u = sin(theta)`: `eps^(3/2)`.
#[inline]
pub fn pole_guard<T: Float>() -> T {
    let eps = T::epsilon();
    eps * eps.sqrt()
}

// ============================================================================
// Circle Geometry
// ============================================================================

/// Quantities shared by all points of one circle of latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry<T> {
    /// Radius of the circle, `p`.
    pub p: T,

    /// Height of the circle above the equatorial plane, `z`.
    pub z: T,

    /// Distance from the origin.
    pub r: T,

    /// `cos(theta) = z / r`.
    pub t: T,

    /// `sin(theta) = p / r`, clamped away from zero.
    pub u: T,

    /// `a / r` with `a` the reference radius.
    pub q: T,
}

impl<T: Float> CircleGeometry<T> {
    /// Geometry of the circle of radius `p` at height `z`.
    pub fn new(p: T, z: T, reference_radius: T) -> Self {
        let r = p.hypot(z);
        let (t, u) = if r != T::zero() {
            (z / r, (p / r).max(pole_guard()))
        } else {
            (T::zero(), T::one())
        };
        Self {
            p,
            z,
            r,
            t,
            u,
            q: reference_radius / r,
        }
    }

    /// `u * q`.
    #[inline]
    pub fn uq(&self) -> T {
        self.u * self.q
    }

    /// `t / u`.
    #[inline]
    pub fn tu(&self) -> T {
        self.t / self.u
    }
}

// ============================================================================
// Azimuth
// ============================================================================

/// Cosine and sine of the longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Azimuth<T> {
    /// `cos(lambda)`.
    pub cos: T,

    /// `sin(lambda)`.
    pub sin: T,
}

impl<T: Float> Azimuth<T> {
    /// Azimuth of the point `(x, y)` at in-plane radius `p = hypot(x, y)`.
    ///
    /// On the polar axis (`p = 0`) the azimuth is taken as zero.
    #[inline]
    pub fn from_xy(x: T, y: T, p: T) -> Self {
        if p != T::zero() {
            Self {
                cos: x / p,
                sin: y / p,
            }
        } else {
            Self {
                cos: T::one(),
                sin: T::zero(),
            }
        }
    }

    /// Azimuth of a longitude in degrees, exact at multiples of 90.
    #[inline]
    pub fn from_degrees(lon: T) -> Self {
        let (sin, cos) = sincosd(lon);
        Self { cos, sin }
    }

    /// Azimuth from a (not necessarily normalized) cosine/sine pair.
    #[inline]
    pub fn from_cossin(cos: T, sin: T) -> Self {
        let f = sin.hypot(cos);
        Self {
            cos: cos / f,
            sin: sin / f,
        }
    }
}

/// Split a cartesian point into its circle geometry and azimuth.
#[inline]
pub fn decompose<T: Float>(x: T, y: T, z: T, reference_radius: T) -> (CircleGeometry<T>, Azimuth<T>) {
    let p = x.hypot(y);
    (
        CircleGeometry::new(p, z, reference_radius),
        Azimuth::from_xy(x, y, p),
    )
}
