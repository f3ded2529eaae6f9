//! # spharm — Spherical-Harmonic Series for Rust
//!
//! Evaluation of truncated spherical-harmonic series, the representation
//! used by geomagnetic and gravity field models, and of their gradient at
//! arbitrary cartesian points.
//!
//! ## What is evaluated?
//!
//! Given cosine and sine coefficients `C[n,m]`, `S[n,m]` and a reference
//! radius `a`, the series is
//!
//! ```text
//! V(r, theta, lambda) = sum_{n=0..nmx} sum_{m=0..min(n,mmx)}
//!     (a/r)^(n+1) P[n,m](cos theta) (C[n,m] cos(m lambda) + S[n,m] sin(m lambda))
//! ```
//!
//! with `P[n,m]` fully normalized or Schmidt semi-normalized. The sum is run
//! with Clenshaw recurrences (no Legendre function is ever formed), so it is
//! stable to degrees in the thousands.
//!
//! ## Quick Start
//!
//! ```rust
//! use spharm::prelude::*;
//!
//! // Degree-1 model, triangular layout: C00, C10, C11.
//! let c = [1.0, 0.5, 0.25];
//! let s = [0.0, 0.0, 0.1];
//!
//! let series = Harmonic::new()
//!     .coefficients(&c, &s)
//!     .reference_radius(1.0)
//!     .normalization(Schmidt)
//!     .adapter(Single)
//!     .build()?;
//!
//! let v = series.evaluate(1.0, 2.0, 3.0);
//! let g = series.evaluate_gradient(1.0, 2.0, 3.0);
//! assert_eq!(v, g.value);
//! # Result::<(), SpharmError>::Ok(())
//! ```
//!
//! ### Circles of latitude
//!
//! Many points at the same radius `p` and height `z` share all degree sums.
//! A [`CircleEvaluator`](prelude::CircleEvaluator) pays for them once:
//!
//! ```rust
//! use spharm::prelude::*;
//! # let c = [1.0f64, 0.5, 0.25];
//! # let s = [0.0, 0.0, 0.1];
//!
//! let series = HarmonicSeries::full(&c, &s, 1, 1.0, Full)?;
//! let circle = series.circle(2.0, 3.0, true)?;
//!
//! for lon in [0.0, 90.0, 180.0, 270.0] {
//!     let value = circle.evaluate(lon);
//!     let with_gradient = circle.evaluate_gradient(lon);
//!     assert!(value.is_finite());
//!     assert!(with_gradient.is_some());
//! }
//! # Result::<(), SpharmError>::Ok(())
//! ```
//!
//! ### Secular variation
//!
//! A corrected series evaluates `V + tau V'`, for instance with `tau` the
//! time in years since the model epoch:
//!
//! ```rust
//! use spharm::prelude::*;
//! # let c = [1.0f64, 0.5, 0.25];
//! # let s = [0.0, 0.0, 0.1];
//! let c1 = [0.01, 0.0, 0.0];
//! let s1 = [0.0, 0.0, 0.0];
//!
//! let model = Harmonic::new()
//!     .coefficients(&c, &s)
//!     .correction(&c1, &s1)
//!     .adapter(Corrected)
//!     .build()?;
//!
//! let v = model.evaluate(2.5, 1.0, 2.0, 3.0);
//! assert!(v.is_finite());
//! # Result::<(), SpharmError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Construction returns `Result<_, SpharmError>`: truncations that violate
//! `N >= nmx >= mmx >= -1`, correction truncations exceeding the primary
//! one, and coefficient arrays shorter than the layout are rejected before
//! any evaluation. Evaluation itself never fails.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! spharm = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Holmes, S. A. & Featherstone, W. E. (2002). "A unified approach to the
//!   Clenshaw summation and the recursive computation of very high degree and
//!   order normalised associated Legendre functions"
//! - Clenshaw, C. W. (1955). "A note on the summation of Chebyshev series"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - Clenshaw recursions.
mod algorithms;

// Layer 4: Engine - orchestration and validation.
mod engine;

// Layer 5: Adapters - series objects and circle evaluator.
mod adapters;

// High-level fluent API.
mod api;

// Standard spharm prelude.
pub mod prelude {
    pub use crate::api::{
        Accumulator,
        Adapter::{Corrected, Single},
        CircleEvaluator, CoefficientSet, CorrectedAt, Evaluation, HarmonicBuilder as Harmonic,
        HarmonicSeries, HarmonicSeriesWithCorrection, Normalization,
        Normalization::{Full, Schmidt},
        SpharmError, SphericalSum, Truncation,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
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
