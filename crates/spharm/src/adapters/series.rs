//! Single-set harmonic series.
//!
//! ## Purpose
//!
//! This module provides [`HarmonicSeries`], a validated view over one pair
//! of cosine/sine coefficient arrays together with its truncation, reference
//! radius and normalization. It evaluates the sum and its gradient at single
//! points and builds circle evaluators.
//!
//! ## Design notes
//!
//! * **Borrowed**: The caller's arrays are borrowed for `'a`; nothing is
//!   copied.
//! * **Validation**: Construction checks the truncation, the array lengths
//!   and the reference radius. Evaluation cannot fail.
//! * **Delegation**: All numerical work is delegated to the engine.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: [`SeriesBuilder`] is the adapter builder selected
//!   by `.adapter(Single)`.
//! * **[`SphericalSum`]**: The seam shared with the corrected series, used by
//!   extension crates to evaluate any series uniformly.
//!
//! ## Invariants
//!
//! * `N >= nmx >= mmx >= -1` and both arrays hold `(N + 1)(N + 2) / 2`
//!   entries.
//!
//! ## Non-goals
//!
//! * This adapter does not apply a `tau` correction (see `corrected`).

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::adapters::circle::CircleEvaluator;
use crate::engine::executor::{EngineConfig, SeriesExecutor};
use crate::engine::output::Evaluation;
use crate::engine::validator::Validator;
use crate::math::normalization::Normalization;
use crate::primitives::coefficients::{CoefficientSet, Truncation, degree_for_len};
use crate::primitives::errors::SpharmError;
use crate::primitives::roots::RootTable;

// ============================================================================
// Spherical Sum Trait
// ============================================================================

/// A harmonic sum that can be evaluated at points and along circles.
pub trait SphericalSum<T: Float> {
    /// Value at `(x, y, z)`.
    fn value(&self, x: T, y: T, z: T) -> T;

    /// Value and cartesian gradient at `(x, y, z)`.
    fn value_gradient(&self, x: T, y: T, z: T) -> Evaluation<T>;

    /// Circle evaluator for radius `p` and height `z`.
    fn circle(&self, p: T, z: T, gradient: bool) -> Result<CircleEvaluator<T>, SpharmError>;
}

// ============================================================================
// Harmonic Series
// ============================================================================

/// Spherical-harmonic series over one coefficient set.
#[derive(Debug, Clone)]
pub struct HarmonicSeries<'a, T> {
    set: CoefficientSet<'a, T>,
    roots: RootTable<T>,
    config: EngineConfig<T>,
}

impl<'a, T: Float> HarmonicSeries<'a, T> {
    /// Build a series with layout degree `degree`, summing degrees up to
    /// `max_degree` and orders up to `max_order`.
    pub fn new(
        c: &'a [T],
        s: &'a [T],
        degree: i32,
        max_degree: i32,
        max_order: i32,
        reference_radius: T,
        normalization: Normalization,
    ) -> Result<Self, SpharmError> {
        let truncation = Truncation::new(degree, max_degree, max_order);
        Validator::validate_truncation(&truncation)?;
        Validator::validate_coefficients(c, s, &truncation, ("C", "S"))?;
        Validator::validate_reference_radius(reference_radius)?;

        debug!(
            degree,
            max_degree,
            max_order,
            normalization = normalization.name(),
            "built harmonic series"
        );

        Ok(Self {
            set: CoefficientSet::new(c, s, truncation),
            roots: RootTable::new(max_degree),
            config: EngineConfig {
                reference_radius,
                normalization,
            },
        })
    }

    /// Build a series that sums every term of a layout of degree `degree`.
    pub fn full(
        c: &'a [T],
        s: &'a [T],
        degree: i32,
        reference_radius: T,
        normalization: Normalization,
    ) -> Result<Self, SpharmError> {
        Self::new(c, s, degree, degree, degree, reference_radius, normalization)
    }

    #[inline]
    fn executor(&self) -> SeriesExecutor<'_, T> {
        SeriesExecutor::new(&self.roots, self.config)
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Value of the series at `(x, y, z)`.
    pub fn evaluate(&self, x: T, y: T, z: T) -> T {
        self.executor().evaluate(&self.set, x, y, z, false).value
    }

    /// Value and cartesian gradient at `(x, y, z)`.
    pub fn evaluate_gradient(&self, x: T, y: T, z: T) -> Evaluation<T> {
        self.executor().evaluate(&self.set, x, y, z, true)
    }

    /// Precompute the circle of radius `p` at height `z`.
    ///
    /// With `gradient` false the circle evaluates values only.
    pub fn circle(&self, p: T, z: T, gradient: bool) -> Result<CircleEvaluator<T>, SpharmError> {
        let state = self.executor().circle(&self.set, None, p, z, gradient)?;
        debug!(orders = state.order_count(), gradient, "precomputed circle");
        Ok(CircleEvaluator::from_state(state))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The coefficient view.
    pub fn coefficients(&self) -> &CoefficientSet<'a, T> {
        &self.set
    }

    /// The truncation `(N, nmx, mmx)`.
    pub fn truncation(&self) -> Truncation {
        self.set.truncation()
    }

    /// The reference radius `a`.
    pub fn reference_radius(&self) -> T {
        self.config.reference_radius
    }

    /// The normalization of the coefficients.
    pub fn normalization(&self) -> Normalization {
        self.config.normalization
    }
}

impl<T: Float> SphericalSum<T> for HarmonicSeries<'_, T> {
    fn value(&self, x: T, y: T, z: T) -> T {
        self.evaluate(x, y, z)
    }

    fn value_gradient(&self, x: T, y: T, z: T) -> Evaluation<T> {
        self.evaluate_gradient(x, y, z)
    }

    fn circle(&self, p: T, z: T, gradient: bool) -> Result<CircleEvaluator<T>, SpharmError> {
        HarmonicSeries::circle(self, p, z, gradient)
    }
}

// ============================================================================
// Series Builder
// ============================================================================

/// Builder for a single-set [`HarmonicSeries`].
#[derive(Debug, Clone)]
pub struct SeriesBuilder<'a, T> {
    /// Cosine and sine arrays.
    pub coefficients: Option<(&'a [T], &'a [T])>,

    /// Layout degree `N` (inferred from the array length when unset).
    pub degree: Option<i32>,

    /// `(nmx, mmx)` (defaults to `(N, N)`).
    pub truncation: Option<(i32, i32)>,

    /// Reference radius `a`.
    pub reference_radius: T,

    /// Normalization of the coefficients.
    pub normalization: Normalization,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<SpharmError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SeriesBuilder<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Float> SeriesBuilder<'a, T> {
    /// Create a builder with unit reference radius and full normalization.
    fn new() -> Self {
        Self {
            coefficients: None,
            degree: None,
            truncation: None,
            reference_radius: T::one(),
            normalization: Normalization::default(),
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Set the cosine and sine arrays.
    pub fn coefficients(mut self, c: &'a [T], s: &'a [T]) -> Self {
        self.coefficients = Some((c, s));
        self
    }

    /// Set the layout degree `N`.
    pub fn degree(mut self, degree: i32) -> Self {
        self.degree = Some(degree);
        self
    }

    /// Set the maximum degree and order summed.
    pub fn truncation(mut self, max_degree: i32, max_order: i32) -> Self {
        self.truncation = Some((max_degree, max_order));
        self
    }

    /// Set the reference radius.
    pub fn reference_radius(mut self, a: T) -> Self {
        self.reference_radius = a;
        self
    }

    /// Set the normalization.
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the series.
    pub fn build(self) -> Result<HarmonicSeries<'a, T>, SpharmError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let (c, s) = self
            .coefficients
            .ok_or(SpharmError::MissingCoefficients { set: "primary" })?;
        let degree = self
            .degree
            .unwrap_or_else(|| degree_for_len(c.len().min(s.len())));
        let (max_degree, max_order) = self.truncation.unwrap_or((degree, degree));

        HarmonicSeries::new(
            c,
            s,
            degree,
            max_degree,
            max_order,
            self.reference_radius,
            self.normalization,
        )
    }
}
