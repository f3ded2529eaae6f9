//! High-level API for batch evaluation.
//!
//! ## Purpose
//!
//! This module re-exports the `spharm` builder and series types next to the
//! batch adapter, so a single `use fastSpharm::prelude::*` covers building a
//! series and evaluating it in bulk.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Build a series with `Harmonic::new()` as in `spharm`.
//! 2. Wrap it with [`ParallelSeries::new`] (or `.batch()` via [`Batched`]).
//! 3. Call `evaluate_points` or `evaluate_grid`.

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::adapters::batch::ParallelSeries;
pub use crate::input::CoordinateInput;
pub use spharm::internals::api::{
    Accumulator, Adapter, CircleEvaluator, CoefficientSet, CorrectedAt, Evaluation,
    HarmonicBuilder, HarmonicSeries, HarmonicSeriesWithCorrection, Normalization, SpharmError,
    SphericalSum, Truncation,
};

// ============================================================================
// Extension Trait
// ============================================================================

/// Extension giving every series a batch evaluator.
pub trait Batched: Sized {
    /// Wrap `self` in a [`ParallelSeries`].
    fn batch(&self) -> ParallelSeries<'_, Self>;
}

impl<T: Float> Batched for HarmonicSeries<'_, T> {
    fn batch(&self) -> ParallelSeries<'_, Self> {
        ParallelSeries::new(self)
    }
}

impl<T: Float> Batched for CorrectedAt<'_, '_, T> {
    fn batch(&self) -> ParallelSeries<'_, Self> {
        ParallelSeries::new(self)
    }
}
