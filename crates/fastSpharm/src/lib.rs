//! # fastSpharm — Parallel Spherical-Harmonic Evaluation
//!
//! Batch and grid evaluation of [`spharm`] series, parallelized over CPU
//! cores with `rayon` and speaking `ndarray`.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastSpharm::prelude::*;
//!
//! let c = [1.0, 0.5, 0.25];
//! let s = [0.0, 0.0, 0.1];
//! let series = Harmonic::new().coefficients(&c, &s).adapter(Single).build()?;
//!
//! // Many independent points.
//! let x = vec![1.0, 2.0, 3.0];
//! let y = vec![0.5, 0.0, -1.0];
//! let z = vec![2.0, 2.0, 2.0];
//! let values = series.batch().evaluate_points(&x, &y, &z)?;
//! assert_eq!(values.len(), 3);
//!
//! // A grid of circles (p, z) by longitudes in degrees.
//! let circles = [(2.0, 1.0), (2.0, -1.0)];
//! let lons = vec![0.0, 45.0, 90.0, 135.0];
//! let grid = series.batch().evaluate_grid(&circles, &lons)?;
//! assert_eq!(grid.dim(), (2, 4));
//! # Result::<(), SpharmError>::Ok(())
//! ```
//!
//! ### ndarray inputs
//!
//! ```rust
//! use fastSpharm::prelude::*;
//! use ndarray::Array1;
//! # let c = [1.0, 0.5, 0.25];
//! # let s = [0.0, 0.0, 0.1];
//! # let series = Harmonic::new().coefficients(&c, &s).adapter(Single).build()?;
//!
//! let x = Array1::linspace(1.0, 2.0, 8);
//! let y = Array1::<f64>::zeros(8);
//! let z = Array1::from_elem(8, 0.5);
//!
//! let values = series.batch().parallel(false).evaluate_points(&x, &y, &z)?;
//! assert_eq!(values.len(), 8);
//! # Result::<(), SpharmError>::Ok(())
//! ```

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution.
mod engine;

// Layer 5: Adapters - batch adapter.
mod adapters;

// High-level API and re-exports.
mod api;

// Input data handling.
mod input;

// Standard fastSpharm prelude.
pub mod prelude {
    pub use crate::api::{
        Accumulator,
        Adapter::{Corrected, Single},
        Batched, CircleEvaluator, CoefficientSet, CoordinateInput, CorrectedAt, Evaluation,
        HarmonicBuilder as Harmonic, HarmonicSeries, HarmonicSeriesWithCorrection, Normalization,
        Normalization::{Full, Schmidt},
        ParallelSeries, SpharmError, SphericalSum, Truncation,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
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
}
