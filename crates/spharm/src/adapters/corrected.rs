//! Harmonic series with a `tau`-weighted correction set.
//!
//! ## Purpose
//!
//! This module provides [`HarmonicSeriesWithCorrection`], which evaluates
//! `V + tau V'` where `V` is a primary series and `V'` a correction series
//! sharing the reference radius and normalization. `tau` (for instance the
//! time since the model epoch) is supplied on every call.
//!
//! ## Design notes
//!
//! * **Two passes**: Points run the primary and the correction series
//!   separately and combine them with an exact split of `tau V'`.
//! * **Circles**: The correction is folded into the per-order state with the
//!   `tau` given at construction of the circle.
//! * **Binding**: [`HarmonicSeriesWithCorrection::at`] fixes `tau` and yields
//!   a [`SphericalSum`] for code that evaluates series generically.
//!
//! ## Invariants
//!
//! * `N >= N1`, `nmx >= nmx1`, `mmx >= mmx1`, `N1 >= nmx1 >= mmx1 >= -1`.
//! * `evaluate(0, ..)` equals the primary series alone.
//!
//! ## Non-goals
//!
//! * This adapter does not support more than one correction set.

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::adapters::circle::CircleEvaluator;
use crate::adapters::series::SphericalSum;
use crate::engine::executor::{EngineConfig, SeriesExecutor};
use crate::engine::output::Evaluation;
use crate::engine::validator::Validator;
use crate::math::normalization::Normalization;
use crate::primitives::coefficients::{CoefficientSet, Truncation, degree_for_len};
use crate::primitives::errors::SpharmError;
use crate::primitives::roots::RootTable;

// ============================================================================
// Corrected Series
// ============================================================================

/// Spherical-harmonic series with a linear correction term.
#[derive(Debug, Clone)]
pub struct HarmonicSeriesWithCorrection<'a, T> {
    set: CoefficientSet<'a, T>,
    correction: CoefficientSet<'a, T>,
    roots: RootTable<T>,
    config: EngineConfig<T>,
}

impl<'a, T: Float> HarmonicSeriesWithCorrection<'a, T> {
    /// Build a corrected series from a primary set `(c, s)` with truncation
    /// `(degree, max_degree, max_order)` and a correction set `(c1, s1)` with
    /// truncation `(degree1, max_degree1, max_order1)`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c: &'a [T],
        s: &'a [T],
        degree: i32,
        max_degree: i32,
        max_order: i32,
        c1: &'a [T],
        s1: &'a [T],
        degree1: i32,
        max_degree1: i32,
        max_order1: i32,
        reference_radius: T,
        normalization: Normalization,
    ) -> Result<Self, SpharmError> {
        let truncation = Truncation::new(degree, max_degree, max_order);
        let truncation1 = Truncation::new(degree1, max_degree1, max_order1);

        Validator::validate_truncation(&truncation)?;
        Validator::validate_correction(&truncation, &truncation1)?;
        Validator::validate_coefficients(c, s, &truncation, ("C", "S"))?;
        Validator::validate_coefficients(c1, s1, &truncation1, ("C'", "S'"))?;
        Validator::validate_reference_radius(reference_radius)?;

        debug!(
            degree,
            max_degree,
            max_order,
            degree1,
            max_degree1,
            max_order1,
            normalization = normalization.name(),
            "built corrected harmonic series"
        );

        Ok(Self {
            set: CoefficientSet::new(c, s, truncation),
            correction: CoefficientSet::new(c1, s1, truncation1),
            roots: RootTable::new(max_degree),
            config: EngineConfig {
                reference_radius,
                normalization,
            },
        })
    }

    /// Build a corrected series summing every term of both layouts.
    #[allow(clippy::too_many_arguments)]
    pub fn full(
        c: &'a [T],
        s: &'a [T],
        degree: i32,
        c1: &'a [T],
        s1: &'a [T],
        degree1: i32,
        reference_radius: T,
        normalization: Normalization,
    ) -> Result<Self, SpharmError> {
        Self::new(
            c,
            s,
            degree,
            degree,
            degree,
            c1,
            s1,
            degree1,
            degree1,
            degree1,
            reference_radius,
            normalization,
        )
    }

    #[inline]
    fn executor(&self) -> SeriesExecutor<'_, T> {
        SeriesExecutor::new(&self.roots, self.config)
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Value of `V + tau V'` at `(x, y, z)`.
    pub fn evaluate(&self, tau: T, x: T, y: T, z: T) -> T {
        self.executor()
            .evaluate_with_correction(&self.set, &self.correction, tau, x, y, z, false)
            .value
    }

    /// Value and cartesian gradient of `V + tau V'` at `(x, y, z)`.
    pub fn evaluate_gradient(&self, tau: T, x: T, y: T, z: T) -> Evaluation<T> {
        self.executor()
            .evaluate_with_correction(&self.set, &self.correction, tau, x, y, z, true)
    }

    /// Precompute the circle of radius `p` at height `z` for this `tau`.
    pub fn circle(
        &self,
        tau: T,
        p: T,
        z: T,
        gradient: bool,
    ) -> Result<CircleEvaluator<T>, SpharmError> {
        let state = self
            .executor()
            .circle(&self.set, Some((&self.correction, tau)), p, z, gradient)?;
        debug!(orders = state.order_count(), gradient, "precomputed corrected circle");
        Ok(CircleEvaluator::from_state(state))
    }

    /// Bind `tau`, giving a [`SphericalSum`] view of this series.
    pub fn at(&self, tau: T) -> CorrectedAt<'_, 'a, T> {
        CorrectedAt { series: self, tau }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The primary coefficient view.
    pub fn coefficients(&self) -> &CoefficientSet<'a, T> {
        &self.set
    }

    /// The correction coefficient view.
    pub fn correction(&self) -> &CoefficientSet<'a, T> {
        &self.correction
    }

    /// The primary truncation `(N, nmx, mmx)`.
    pub fn truncation(&self) -> Truncation {
        self.set.truncation()
    }

    /// The correction truncation `(N1, nmx1, mmx1)`.
    pub fn correction_truncation(&self) -> Truncation {
        self.correction.truncation()
    }

    /// The reference radius `a`.
    pub fn reference_radius(&self) -> T {
        self.config.reference_radius
    }

    /// The normalization of both sets.
    pub fn normalization(&self) -> Normalization {
        self.config.normalization
    }
}

// ============================================================================
// Bound Tau
// ============================================================================

/// A corrected series with a fixed `tau`.
#[derive(Debug, Clone, Copy)]
pub struct CorrectedAt<'s, 'a, T> {
    series: &'s HarmonicSeriesWithCorrection<'a, T>,
    tau: T,
}

impl<T: Float> CorrectedAt<'_, '_, T> {
    /// The bound `tau`.
    pub fn tau(&self) -> T {
        self.tau
    }
}

impl<T: Float> SphericalSum<T> for CorrectedAt<'_, '_, T> {
    fn value(&self, x: T, y: T, z: T) -> T {
        self.series.evaluate(self.tau, x, y, z)
    }

    fn value_gradient(&self, x: T, y: T, z: T) -> Evaluation<T> {
        self.series.evaluate_gradient(self.tau, x, y, z)
    }

    fn circle(&self, p: T, z: T, gradient: bool) -> Result<CircleEvaluator<T>, SpharmError> {
        self.series.circle(self.tau, p, z, gradient)
    }
}

// ============================================================================
// Corrected Series Builder
// ============================================================================

/// Builder for a [`HarmonicSeriesWithCorrection`].
#[derive(Debug, Clone)]
pub struct CorrectedSeriesBuilder<'a, T> {
    /// Primary cosine and sine arrays.
    pub coefficients: Option<(&'a [T], &'a [T])>,

    /// Primary layout degree `N` (inferred when unset).
    pub degree: Option<i32>,

    /// Primary `(nmx, mmx)` (defaults to `(N, N)`).
    pub truncation: Option<(i32, i32)>,

    /// Correction cosine and sine arrays.
    pub correction: Option<(&'a [T], &'a [T])>,

    /// Correction layout degree `N1` (inferred when unset).
    pub correction_degree: Option<i32>,

    /// Correction `(nmx1, mmx1)` (defaults to `(N1, N1)`).
    pub correction_truncation: Option<(i32, i32)>,

    /// Reference radius `a`.
    pub reference_radius: T,

    /// Normalization of both sets.
    pub normalization: Normalization,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for CorrectedSeriesBuilder<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Float> CorrectedSeriesBuilder<'a, T> {
    fn new() -> Self {
        Self {
            coefficients: None,
            degree: None,
            truncation: None,
            correction: None,
            correction_degree: None,
            correction_truncation: None,
            reference_radius: T::one(),
            normalization: Normalization::default(),
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the primary cosine and sine arrays.
    pub fn coefficients(mut self, c: &'a [T], s: &'a [T]) -> Self {
        self.coefficients = Some((c, s));
        self
    }

    /// Set the primary layout degree `N`.
    pub fn degree(mut self, degree: i32) -> Self {
        self.degree = Some(degree);
        self
    }

    /// Set the primary maximum degree and order.
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
    // Correction Setters
    // ========================================================================

    /// Set the correction cosine and sine arrays.
    pub fn correction(mut self, c1: &'a [T], s1: &'a [T]) -> Self {
        self.correction = Some((c1, s1));
        self
    }

    /// Set the correction layout degree `N1`.
    pub fn correction_degree(mut self, degree: i32) -> Self {
        self.correction_degree = Some(degree);
        self
    }

    /// Set the correction maximum degree and order.
    pub fn correction_truncation(mut self, max_degree: i32, max_order: i32) -> Self {
        self.correction_truncation = Some((max_degree, max_order));
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the corrected series.
    pub fn build(self) -> Result<HarmonicSeriesWithCorrection<'a, T>, SpharmError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let (c, s) = self
            .coefficients
            .ok_or(SpharmError::MissingCoefficients { set: "primary" })?;
        let (c1, s1) = self
            .correction
            .ok_or(SpharmError::MissingCoefficients { set: "correction" })?;

        let degree = self
            .degree
            .unwrap_or_else(|| degree_for_len(c.len().min(s.len())));
        let (max_degree, max_order) = self.truncation.unwrap_or((degree, degree));

        let degree1 = self
            .correction_degree
            .unwrap_or_else(|| degree_for_len(c1.len().min(s1.len())));
        let (max_degree1, max_order1) = self.correction_truncation.unwrap_or((degree1, degree1));

        HarmonicSeriesWithCorrection::new(
            c,
            s,
            degree,
            max_degree,
            max_order,
            c1,
            s1,
            degree1,
            max_degree1,
            max_order1,
            self.reference_radius,
            self.normalization,
        )
    }
}
