//! Circle-of-latitude evaluator.
//!
//! ## Purpose
//!
//! This module provides [`CircleEvaluator`], which evaluates a series at many
//! longitudes on one circle of fixed radius `p` and height `z`. All degree
//! sums are run once when the circle is built; each longitude then costs only
//! the order sum.
//!
//! ## Design notes
//!
//! * **Ownership**: The evaluator owns its per-order state and keeps no
//!   reference to the series, so it may outlive it.
//! * **Longitudes**: Degrees are reduced exactly before conversion, so
//!   multiples of 90 give exact trigonometric values.
//! * **Gradient**: Available only when the circle was built with gradient
//!   support; otherwise the gradient accessors return `None`.
//!
//! ## Invariants
//!
//! * For every longitude, the result equals point evaluation at
//!   `(p cos lon, p sin lon, z)` up to rounding.
//! * The state is immutable once built.
//!
//! ## Non-goals
//!
//! * This module does not cache results across longitudes.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::CircleState;
use crate::engine::output::Evaluation;
use crate::math::geometry::Azimuth;

// ============================================================================
// Circle Evaluator
// ============================================================================

/// Evaluator of a harmonic series along one circle of latitude.
///
/// Built by `HarmonicSeries::circle` or `HarmonicSeriesWithCorrection::circle`.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleEvaluator<T> {
    state: CircleState<T>,
}

impl<T: Float> CircleEvaluator<T> {
    pub(crate) fn from_state(state: CircleState<T>) -> Self {
        Self { state }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Value of the series at longitude `lon` (degrees).
    pub fn evaluate(&self, lon: T) -> T {
        self.state.evaluate(&Azimuth::from_degrees(lon)).value
    }

    /// Value and gradient at longitude `lon` (degrees).
    ///
    /// Returns `None` when the circle was built without gradient support.
    pub fn evaluate_gradient(&self, lon: T) -> Option<Evaluation<T>> {
        self.has_gradient()
            .then(|| self.state.evaluate(&Azimuth::from_degrees(lon)))
    }

    /// Value at the longitude with direction `(cos lon, sin lon)`.
    ///
    /// The pair need not be normalized.
    pub fn evaluate_cossin(&self, cos: T, sin: T) -> T {
        self.state.evaluate(&Azimuth::from_cossin(cos, sin)).value
    }

    /// Value and gradient at the longitude with direction `(cos lon, sin lon)`.
    pub fn evaluate_gradient_cossin(&self, cos: T, sin: T) -> Option<Evaluation<T>> {
        self.has_gradient()
            .then(|| self.state.evaluate(&Azimuth::from_cossin(cos, sin)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whether the gradient was precomputed.
    #[inline]
    pub fn has_gradient(&self) -> bool {
        self.state.has_gradient()
    }

    /// Highest order stored, `mmx` (`-1` for an empty series).
    pub fn max_order(&self) -> i32 {
        self.state.order_count() as i32 - 1
    }

    /// Radius `p` of the circle.
    pub fn radius(&self) -> T {
        self.state.geometry().p
    }

    /// Height `z` of the circle.
    pub fn height(&self) -> T {
        self.state.geometry().z
    }
}
