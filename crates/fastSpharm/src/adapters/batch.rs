//! Batch adapter for evaluating a series at many points.
//!
//! ## Purpose
//!
//! This module provides [`ParallelSeries`], a thin wrapper around any
//! [`SphericalSum`] (a `HarmonicSeries` or a corrected series bound to a
//! `tau`) that evaluates whole coordinate arrays and longitude grids.
//!
//! ## Design notes
//!
//! * **Delegation**: All numerics stay in `spharm`; this adapter validates
//!   the batch inputs and schedules the work.
//! * **Parallelism**: Parallel by default with the `cpu` feature;
//!   `parallel(false)` runs on the calling thread with identical results.
//! * **Inputs**: Coordinates may be slices, vectors or `ndarray` arrays.
//!
//! ## Invariants
//!
//! * `x`, `y` and `z` have the same length.
//! * Grid rows follow the order of `circles`; columns the order of `lons`.
//!
//! ## Non-goals
//!
//! * This adapter does not convert geodetic coordinates.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{grid_parallel, points_parallel};

// External dependencies
use ndarray::{Array1, Array2};
use num_traits::Float;
use tracing::debug;

// Export dependencies from spharm crate
use spharm::internals::adapters::series::SphericalSum;
use spharm::internals::engine::output::Evaluation;
use spharm::internals::primitives::errors::SpharmError;

// Internal dependencies
use crate::engine::executor::{grid_sequential, points_sequential};
use crate::input::CoordinateInput;

// ============================================================================
// Parallel Series
// ============================================================================

/// Batch evaluator over a borrowed series.
#[derive(Debug, Clone, Copy)]
pub struct ParallelSeries<'s, S> {
    series: &'s S,
    parallel: bool,
}

impl<'s, S> ParallelSeries<'s, S> {
    /// Wrap a series; parallel execution is on by default.
    pub fn new(series: &'s S) -> Self {
        Self {
            series,
            parallel: true,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The wrapped series.
    pub fn series(&self) -> &'s S {
        self.series
    }

    /// Values at every point `(x[i], y[i], z[i])`.
    pub fn evaluate_points<T, I1, I2, I3>(
        &self,
        x: &I1,
        y: &I2,
        z: &I3,
    ) -> Result<Array1<T>, SpharmError>
    where
        T: Float + Send + Sync,
        S: SphericalSum<T> + Sync,
        I1: CoordinateInput<T> + ?Sized,
        I2: CoordinateInput<T> + ?Sized,
        I3: CoordinateInput<T> + ?Sized,
    {
        let evaluations = self.run_points(x, y, z, false)?;
        Ok(evaluations.iter().map(|e| e.value).collect())
    }

    /// Values and cartesian gradients at every point `(x[i], y[i], z[i])`.
    pub fn evaluate_points_gradient<T, I1, I2, I3>(
        &self,
        x: &I1,
        y: &I2,
        z: &I3,
    ) -> Result<Vec<Evaluation<T>>, SpharmError>
    where
        T: Float + Send + Sync,
        S: SphericalSum<T> + Sync,
        I1: CoordinateInput<T> + ?Sized,
        I2: CoordinateInput<T> + ?Sized,
        I3: CoordinateInput<T> + ?Sized,
    {
        self.run_points(x, y, z, true)
    }

    /// Values on a grid: one row per circle `(p, z)`, one column per
    /// longitude (degrees).
    pub fn evaluate_grid<T, I>(&self, circles: &[(T, T)], lons: &I) -> Result<Array2<T>, SpharmError>
    where
        T: Float + Send + Sync,
        S: SphericalSum<T> + Sync,
        I: CoordinateInput<T> + ?Sized,
    {
        let lons = lons.as_coordinate_slice()?;
        debug!(
            circles = circles.len(),
            longitudes = lons.len(),
            parallel = self.parallel,
            "evaluating grid"
        );

        #[cfg(feature = "cpu")]
        let values = if self.parallel {
            grid_parallel(self.series, circles, lons)?
        } else {
            grid_sequential(self.series, circles, lons)?
        };
        #[cfg(not(feature = "cpu"))]
        let values = grid_sequential(self.series, circles, lons)?;

        Array2::from_shape_vec((circles.len(), lons.len()), values)
            .map_err(|e| SpharmError::InvalidInput(e.to_string()))
    }

    fn run_points<T, I1, I2, I3>(
        &self,
        x: &I1,
        y: &I2,
        z: &I3,
        gradient: bool,
    ) -> Result<Vec<Evaluation<T>>, SpharmError>
    where
        T: Float + Send + Sync,
        S: SphericalSum<T> + Sync,
        I1: CoordinateInput<T> + ?Sized,
        I2: CoordinateInput<T> + ?Sized,
        I3: CoordinateInput<T> + ?Sized,
    {
        let x = x.as_coordinate_slice()?;
        let y = y.as_coordinate_slice()?;
        let z = z.as_coordinate_slice()?;
        for other in [y.len(), z.len()] {
            if other != x.len() {
                return Err(SpharmError::MismatchedInputs {
                    expected: x.len(),
                    got: other,
                });
            }
        }

        #[cfg(feature = "cpu")]
        if self.parallel {
            return Ok(points_parallel(self.series, x, y, z, gradient));
        }

        Ok(points_sequential(self.series, x, y, z, gradient))
    }
}
