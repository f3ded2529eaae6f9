//! High-level API for spherical-harmonic series.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the coefficient arrays, truncations, reference radius
//! and normalization, and a choice of series kind (Single or Corrected).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HarmonicBuilder`] via `Harmonic::new()`.
//! 2. Chain configuration methods (`.coefficients()`, `.degree()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Single)` to get a series builder.
//! 4. Call `.build()`.
//!
//! ### Defaults
//!
//! * Layout degree: the largest `N` whose triangular layout fits the arrays.
//! * Truncation: `(N, N)`.
//! * Reference radius: `1`.
//! * Normalization: `Full`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::corrected::CorrectedSeriesBuilder;
use crate::adapters::series::SeriesBuilder;

// Publicly re-exported types
pub use crate::adapters::circle::CircleEvaluator;
pub use crate::adapters::corrected::{CorrectedAt, HarmonicSeriesWithCorrection};
pub use crate::adapters::series::{HarmonicSeries, SphericalSum};
pub use crate::engine::output::Evaluation;
pub use crate::math::normalization::Normalization;
pub use crate::primitives::accumulator::Accumulator;
pub use crate::primitives::coefficients::{CoefficientSet, Truncation};
pub use crate::primitives::errors::SpharmError;

/// Marker types for selecting the series kind.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Corrected, Single};
}

/// Fluent builder for configuring a harmonic series.
#[derive(Debug, Clone)]
pub struct HarmonicBuilder<'a, T> {
    /// Primary cosine and sine arrays.
    pub coefficients: Option<(&'a [T], &'a [T])>,

    /// Primary layout degree `N`.
    pub degree: Option<i32>,

    /// Primary `(nmx, mmx)`.
    pub truncation: Option<(i32, i32)>,

    /// Reference radius `a`.
    pub reference_radius: Option<T>,

    /// Normalization of the coefficients.
    pub normalization: Option<Normalization>,

    /// Correction cosine and sine arrays (Corrected only).
    pub correction: Option<(&'a [T], &'a [T])>,

    /// Correction layout degree `N1` (Corrected only).
    pub correction_degree: Option<i32>,

    /// Correction `(nmx1, mmx1)` (Corrected only).
    pub correction_truncation: Option<(i32, i32)>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for HarmonicBuilder<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Float + 'a> HarmonicBuilder<'a, T> {
    /// Select a series kind to transition to its builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: HarmonicAdapter<'a, T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            coefficients: None,
            degree: None,
            truncation: None,
            reference_radius: None,
            normalization: None,
            correction: None,
            correction_degree: None,
            correction_truncation: None,
            duplicate_param: None,
        }
    }

    /// Set the primary cosine and sine arrays.
    pub fn coefficients(mut self, c: &'a [T], s: &'a [T]) -> Self {
        if self.coefficients.is_some() {
            self.duplicate_param = Some("coefficients");
        }
        self.coefficients = Some((c, s));
        self
    }

    /// Set the primary layout degree `N`.
    pub fn degree(mut self, degree: i32) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the maximum degree and order summed.
    pub fn truncation(mut self, max_degree: i32, max_order: i32) -> Self {
        if self.truncation.is_some() {
            self.duplicate_param = Some("truncation");
        }
        self.truncation = Some((max_degree, max_order));
        self
    }

    /// Set the reference radius.
    pub fn reference_radius(mut self, a: T) -> Self {
        if self.reference_radius.is_some() {
            self.duplicate_param = Some("reference_radius");
        }
        self.reference_radius = Some(a);
        self
    }

    /// Set the normalization.
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        if self.normalization.is_some() {
            self.duplicate_param = Some("normalization");
        }
        self.normalization = Some(normalization);
        self
    }

    /// Set the correction cosine and sine arrays (Corrected only).
    pub fn correction(mut self, c1: &'a [T], s1: &'a [T]) -> Self {
        if self.correction.is_some() {
            self.duplicate_param = Some("correction");
        }
        self.correction = Some((c1, s1));
        self
    }

    /// Set the correction layout degree `N1` (Corrected only).
    pub fn correction_degree(mut self, degree: i32) -> Self {
        if self.correction_degree.is_some() {
            self.duplicate_param = Some("correction_degree");
        }
        self.correction_degree = Some(degree);
        self
    }

    /// Set the correction maximum degree and order (Corrected only).
    pub fn correction_truncation(mut self, max_degree: i32, max_order: i32) -> Self {
        if self.correction_truncation.is_some() {
            self.duplicate_param = Some("correction_truncation");
        }
        self.correction_truncation = Some((max_degree, max_order));
        self
    }
}

/// Trait for transitioning from the generic builder to a series builder.
pub trait HarmonicAdapter<'a, T: Float + 'a> {
    /// The output series builder.
    type Output;

    /// Convert a generic [`HarmonicBuilder`] into a specialized series builder.
    fn convert(builder: HarmonicBuilder<'a, T>) -> Self::Output;
}

/// Marker for a single coefficient set.
#[derive(Debug, Clone, Copy)]
pub struct Single;

impl<'a, T: Float + 'a> HarmonicAdapter<'a, T> for Single {
    type Output = SeriesBuilder<'a, T>;

    fn convert(builder: HarmonicBuilder<'a, T>) -> Self::Output {
        let mut result = SeriesBuilder::default();

        result.coefficients = builder.coefficients;
        result.degree = builder.degree;
        result.truncation = builder.truncation;
        if let Some(a) = builder.reference_radius {
            result.reference_radius = a;
        }
        if let Some(norm) = builder.normalization {
            result.normalization = norm;
        }

        if builder.correction.is_some()
            || builder.correction_degree.is_some()
            || builder.correction_truncation.is_some()
        {
            result.deferred_error = Some(SpharmError::UnsupportedFeature {
                adapter: "Single",
                feature: "correction",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for a primary set with a `tau`-weighted correction set.
#[derive(Debug, Clone, Copy)]
pub struct Corrected;

impl<'a, T: Float + 'a> HarmonicAdapter<'a, T> for Corrected {
    type Output = CorrectedSeriesBuilder<'a, T>;

    fn convert(builder: HarmonicBuilder<'a, T>) -> Self::Output {
        let mut result = CorrectedSeriesBuilder::default();

        result.coefficients = builder.coefficients;
        result.degree = builder.degree;
        result.truncation = builder.truncation;
        result.correction = builder.correction;
        result.correction_degree = builder.correction_degree;
        result.correction_truncation = builder.correction_truncation;
        if let Some(a) = builder.reference_radius {
            result.reference_radius = a;
        }
        if let Some(norm) = builder.normalization {
            result.normalization = norm;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
