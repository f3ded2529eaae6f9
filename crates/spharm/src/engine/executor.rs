//! Execution engine for harmonic sums.
//!
//! ## Purpose
//!
//! This module orchestrates the Clenshaw recursions of the algorithms layer
//! into complete evaluations: a single point, a point with a `tau`-weighted
//! correction, and the per-circle precomputation replayed by circle
//! evaluators.
//!
//! ## Design notes
//!
//! * **Borrowing**: The executor borrows the square-root table of its series;
//!   coefficient sets are passed per call.
//! * **Correction**: Point evaluation runs the primary and correction sets as
//!   two independent passes and combines `V + tau V'` with an exact product
//!   split. Circles fold the correction in per order.
//! * **Allocation**: Only circle precomputation allocates, with
//!   `try_reserve_exact`.
//!
//! ## Invariants
//!
//! * Coefficient sets handed to the executor have been validated.
//! * An empty truncation yields exactly zero without running a recursion.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not handle parallel execution (extension crates).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::clenshaw::{OrderSum, OrderTerms, degree_sum};
use crate::engine::output::Evaluation;
use crate::math::geometry::{Azimuth, CircleGeometry, decompose};
use crate::math::normalization::{Normalization, scale};
use crate::primitives::accumulator::Accumulator;
use crate::primitives::coefficients::CoefficientSet;
use crate::primitives::errors::SpharmError;
use crate::primitives::roots::RootTable;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters fixed for the lifetime of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig<T> {
    /// Reference radius `a`.
    pub reference_radius: T,

    /// Normalization of the coefficients.
    pub normalization: Normalization,
}

// ============================================================================
// Circle State
// ============================================================================

/// Precomputed degree sums of one circle of latitude.
///
/// Holds one [`OrderTerms`] per order `m = 0..=mmx` and the order-recursion
/// coefficients, so it does not borrow from the series that built it.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleState<T> {
    geometry: CircleGeometry<T>,
    terms: Vec<OrderTerms<T>>,
    steps: Vec<(T, T)>,
    base: (T, T),
    scale: T,
    gradient: bool,
}

impl<T: Float> CircleState<T> {
    /// Geometry of the circle.
    #[inline]
    pub fn geometry(&self) -> &CircleGeometry<T> {
        &self.geometry
    }

    /// Number of stored orders, `mmx + 1`.
    #[inline]
    pub fn order_count(&self) -> usize {
        self.terms.len()
    }

    /// Whether gradient lanes were computed.
    #[inline]
    pub fn has_gradient(&self) -> bool {
        self.gradient
    }

    /// Run the order sum at one longitude.
    ///
    /// The gradient is zero unless the state was built with gradient lanes.
    pub fn evaluate(&self, az: &Azimuth<T>) -> Evaluation<T> {
        let Some((first, rest)) = self.terms.split_first() else {
            return Evaluation::zero();
        };

        let mut outer = OrderSum::new(self.gradient, self.scale);
        for (m, (terms, &(alpha, beta))) in rest.iter().zip(self.steps.iter()).enumerate().rev() {
            outer.push(m + 1, terms, alpha, beta, az);
        }
        let (a0, b0) = self.base;
        outer.finish(first, a0, b0, &self.geometry, az).into()
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Evaluation engine bound to one series' root table and configuration.
#[derive(Debug, Clone, Copy)]
pub struct SeriesExecutor<'r, T> {
    roots: &'r RootTable<T>,
    config: EngineConfig<T>,
    scale: T,
}

impl<'r, T: Float> SeriesExecutor<'r, T> {
    /// Create an executor over a root table large enough for every set it
    /// will be given.
    pub fn new(roots: &'r RootTable<T>, config: EngineConfig<T>) -> Self {
        Self {
            roots,
            config,
            scale: scale::<T>(),
        }
    }

    // ========================================================================
    // Point Evaluation
    // ========================================================================

    /// Evaluate one coefficient set at `(x, y, z)`.
    pub fn evaluate(
        &self,
        set: &CoefficientSet<'_, T>,
        x: T,
        y: T,
        z: T,
        gradient: bool,
    ) -> Evaluation<T> {
        let (geo, az) = decompose(x, y, z, self.config.reference_radius);
        self.run(set, &geo, &az, gradient)
    }

    /// Evaluate `V + tau V'` at `(x, y, z)`.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate_with_correction(
        &self,
        set: &CoefficientSet<'_, T>,
        correction: &CoefficientSet<'_, T>,
        tau: T,
        x: T,
        y: T,
        z: T,
        gradient: bool,
    ) -> Evaluation<T> {
        let (geo, az) = decompose(x, y, z, self.config.reference_radius);
        let primary = self.run(set, &geo, &az, gradient);
        let secondary = self.run(correction, &geo, &az, gradient);
        combine(&primary, &secondary, tau)
    }

    /// Full two-phase sum for one point.
    fn run(
        &self,
        set: &CoefficientSet<'_, T>,
        geo: &CircleGeometry<T>,
        az: &Azimuth<T>,
        gradient: bool,
    ) -> Evaluation<T> {
        let truncation = set.truncation();
        if truncation.is_empty() {
            return Evaluation::zero();
        }

        let norm = self.config.normalization;
        let uq = geo.uq();
        let uq2 = uq * uq;

        let mut outer = OrderSum::new(gradient, self.scale);
        for m in (1..=truncation.max_order as usize).rev() {
            let terms = degree_sum(set, norm, self.roots, m, geo, self.scale, gradient);
            let (alpha, beta) = norm.order_step(self.roots, m, uq, uq2);
            outer.push(m, &terms, alpha, beta, az);
        }

        let terms = degree_sum(set, norm, self.roots, 0, geo, self.scale, gradient);
        let (a0, b0) = norm.base_step(self.roots, uq, uq2);
        outer.finish(&terms, a0, b0, geo, az).into()
    }

    // ========================================================================
    // Circle Precomputation
    // ========================================================================

    /// Run every degree sum of the circle of radius `p` at height `z`.
    ///
    /// With `correction = Some((set, tau))` the correction orders are folded
    /// in with weight `tau`.
    pub fn circle(
        &self,
        set: &CoefficientSet<'_, T>,
        correction: Option<(&CoefficientSet<'_, T>, T)>,
        p: T,
        z: T,
        gradient: bool,
    ) -> Result<CircleState<T>, SpharmError> {
        let geometry = CircleGeometry::new(p, z, self.config.reference_radius);
        let norm = self.config.normalization;
        let uq = geometry.uq();
        let uq2 = uq * uq;

        let orders = set.truncation().order_count();
        let mut terms = Vec::new();
        terms
            .try_reserve_exact(orders)
            .map_err(|_| SpharmError::Allocation { requested: orders })?;
        let mut steps = Vec::new();
        steps
            .try_reserve_exact(orders.saturating_sub(1))
            .map_err(|_| SpharmError::Allocation {
                requested: orders.saturating_sub(1),
            })?;

        let correction_orders = correction.map_or(0, |(c, _)| c.truncation().order_count());

        for m in 0..orders {
            let mut w = degree_sum(set, norm, self.roots, m, &geometry, self.scale, gradient);
            if let Some((correction, tau)) = correction {
                if m < correction_orders {
                    let w1 = degree_sum(correction, norm, self.roots, m, &geometry, self.scale, gradient);
                    w = w.combine(&w1, tau);
                }
            }
            terms.push(w);
            if m > 0 {
                steps.push(norm.order_step(self.roots, m, uq, uq2));
            }
        }

        Ok(CircleState {
            geometry,
            terms,
            steps,
            base: norm.base_step(self.roots, uq, uq2),
            scale: self.scale,
            gradient,
        })
    }
}

/// `primary + tau * secondary`, component by component.
pub fn combine<T: Float>(primary: &Evaluation<T>, secondary: &Evaluation<T>, tau: T) -> Evaluation<T> {
    let lane = |v: T, w: T| {
        let mut acc = Accumulator::with_value(v);
        acc.add_product(tau, w);
        acc.value()
    };
    Evaluation::new(
        lane(primary.value, secondary.value),
        [
            lane(primary.gradient[0], secondary.gradient[0]),
            lane(primary.gradient[1], secondary.gradient[1]),
            lane(primary.gradient[2], secondary.gradient[2]),
        ],
    )
}
