//! Parallel execution engine for batch evaluation.
//!
//! ## Purpose
//!
//! This module evaluates a series at many independent points, or on a grid
//! of circles by longitudes, distributing the work over CPU cores with
//! `rayon`. Sequential counterparts produce bit-identical results.
//!
//! ## Design notes
//!
//! * **Points**: Each point is an independent task.
//! * **Grids**: Each circle is one task: it builds its circle evaluator and
//!   then sweeps every longitude, so the per-circle precomputation is never
//!   shared between threads.
//! * **Generics**: Generic over any [`SphericalSum`].
//!
//! ## Invariants
//!
//! * Output order matches input order.
//! * Coordinate slices have equal length (checked by the adapter).
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by the adapter).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from spharm crate
use spharm::internals::adapters::series::SphericalSum;
use spharm::internals::engine::output::Evaluation;
use spharm::internals::primitives::errors::SpharmError;

// ============================================================================
// Point Evaluation
// ============================================================================

/// Evaluate `series` at every `(x[i], y[i], z[i])` in parallel.
#[cfg(feature = "cpu")]
pub fn points_parallel<T, S>(series: &S, x: &[T], y: &[T], z: &[T], gradient: bool) -> Vec<Evaluation<T>>
where
    T: Float + Send + Sync,
    S: SphericalSum<T> + Sync,
{
    (0..x.len())
        .into_par_iter()
        .map(|i| point(series, x[i], y[i], z[i], gradient))
        .collect()
}

/// Evaluate `series` at every `(x[i], y[i], z[i])` on the calling thread.
pub fn points_sequential<T, S>(series: &S, x: &[T], y: &[T], z: &[T], gradient: bool) -> Vec<Evaluation<T>>
where
    T: Float,
    S: SphericalSum<T>,
{
    x.iter()
        .zip(y)
        .zip(z)
        .map(|((&x, &y), &z)| point(series, x, y, z, gradient))
        .collect()
}

#[inline]
fn point<T: Float, S: SphericalSum<T>>(series: &S, x: T, y: T, z: T, gradient: bool) -> Evaluation<T> {
    if gradient {
        series.value_gradient(x, y, z)
    } else {
        Evaluation::new(series.value(x, y, z), [T::zero(); 3])
    }
}

// ============================================================================
// Grid Evaluation
// ============================================================================

/// Evaluate one row per circle `(p, z)` over all longitudes, in parallel.
///
/// Returns the rows concatenated in circle order.
#[cfg(feature = "cpu")]
pub fn grid_parallel<T, S>(series: &S, circles: &[(T, T)], lons: &[T]) -> Result<Vec<T>, SpharmError>
where
    T: Float + Send + Sync,
    S: SphericalSum<T> + Sync,
{
    let rows = circles
        .par_iter()
        .map(|&(p, z)| row(series, p, z, lons))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows.concat())
}

/// Evaluate one row per circle `(p, z)` over all longitudes, sequentially.
pub fn grid_sequential<T, S>(series: &S, circles: &[(T, T)], lons: &[T]) -> Result<Vec<T>, SpharmError>
where
    T: Float,
    S: SphericalSum<T>,
{
    let mut values = Vec::with_capacity(circles.len() * lons.len());
    for &(p, z) in circles {
        values.extend(row(series, p, z, lons)?);
    }
    Ok(values)
}

fn row<T: Float, S: SphericalSum<T>>(series: &S, p: T, z: T, lons: &[T]) -> Result<Vec<T>, SpharmError> {
    let circle = series.circle(p, z, false)?;
    Ok(lons.iter().map(|&lon| circle.evaluate(lon)).collect())
}
