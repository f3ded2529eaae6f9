//! Clenshaw recursions over degree and order.
//!
//! ## Purpose
//!
//! This module evaluates the harmonic sum with the order and degree loops
//! exchanged:
//!
//! ```text
//! V = sum_{m=0..mmx} sum_{n=m..nmx} q^(n+1) P[n,m](t) (C[n,m] cos(m lambda) + S[n,m] sin(m lambda))
//! ```
//!
//! The inner sum over degree ([`degree_sum`]) depends only on the circle of
//! latitude `(r, t, u)`. The outer sum over order ([`OrderSum`]) depends on
//! the longitude. Point evaluation interleaves the two; a circle evaluator
//! runs every inner sum once and replays only the outer sum per longitude.
//!
//! ## Design notes
//!
//! * **Stability**: The associated Legendre functions are never formed;
//!   both sums run Clenshaw's backward recurrence.
//! * **Gradient**: The radial, colatitude and longitude derivatives ride
//!   along in the same pass as extra recurrence lanes.
//! * **Precision**: Each three-term step `A x1 + B x2 + R` is summed with an
//!   [`Accumulator`].
//! * **Scaling**: Coefficients enter multiplied by
//!   [`scale`](crate::math::normalization::scale) and the result is divided
//!   by it at the very end.
//! * **Allocation-free**: All state lives in fixed-size structs.
//!
//! ## Key concepts
//!
//! * **Lanes**: `c`/`s` for the cosine and sine series; `r`, `t`, `l` for the
//!   derivatives with respect to radius, colatitude and longitude.
//! * **Two phases**: `degree_sum` (per circle) then `OrderSum::push` /
//!   `OrderSum::finish` (per longitude).
//!
//! ## Invariants
//!
//! * `degree_sum` is only called with `m <= mmx <= nmx` of a non-empty set.
//! * The returned gradient is in cartesian components.
//!
//! ## Non-goals
//!
//! * This module does not validate truncations or array lengths.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::geometry::{Azimuth, CircleGeometry};
use crate::math::normalization::Normalization;
use crate::primitives::accumulator::Accumulator;
use crate::primitives::coefficients::CoefficientSet;
use crate::primitives::roots::{RootTable, real};

// ============================================================================
// Recurrence Lane
// ============================================================================

/// Compensated three-term step `a * x1 + b * x2 + r`.
#[inline]
pub fn clenshaw_step<T: Float>(a: T, x1: T, b: T, x2: T, r: T) -> T {
    let mut acc = Accumulator::with_value(r);
    acc.add(a * x1);
    acc.add(b * x2);
    acc.value()
}

/// The two most recent values of a backward recurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Lane<T> {
    /// `w[k]`.
    cur: T,
    /// `w[k + 1]`.
    prev: T,
}

impl<T: Float> Lane<T> {
    #[inline]
    fn zero() -> Self {
        Self {
            cur: T::zero(),
            prev: T::zero(),
        }
    }

    #[inline]
    fn push(&mut self, a: T, b: T, r: T) {
        let w = clenshaw_step(a, self.cur, b, self.prev, r);
        self.prev = self.cur;
        self.cur = w;
    }
}

// ============================================================================
// Inner Sum (degree)
// ============================================================================

/// Result of the degree sum for one order `m`.
///
/// Values are scaled by [`scale`](crate::math::normalization::scale). The
/// `wtc`/`wts` lanes already include the derivative of the sectoral factor
/// `u^m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTerms<T> {
    /// Cosine series.
    pub wc: T,
    /// Sine series.
    pub ws: T,
    /// Radial derivative, cosine series.
    pub wrc: T,
    /// Radial derivative, sine series.
    pub wrs: T,
    /// Colatitude derivative, cosine series.
    pub wtc: T,
    /// Colatitude derivative, sine series.
    pub wts: T,
}

impl<T: Float> OrderTerms<T> {
    /// `self + tau * other` lane by lane, with exact products.
    #[inline]
    pub fn combine(&self, other: &Self, tau: T) -> Self {
        let lane = |x: T, y: T| {
            let mut acc = Accumulator::with_value(x);
            acc.add_product(tau, y);
            acc.value()
        };
        Self {
            wc: lane(self.wc, other.wc),
            ws: lane(self.ws, other.ws),
            wrc: lane(self.wrc, other.wrc),
            wrs: lane(self.wrs, other.wrs),
            wtc: lane(self.wtc, other.wtc),
            wts: lane(self.wts, other.wts),
        }
    }
}

/// Run the degree sum `n = nmx..=m` for order `m` on one circle.
///
/// Coefficients enter multiplied by `scale`, normally
/// [`scale`](crate::math::normalization::scale) computed once per evaluation.
#[inline]
pub fn degree_sum<T: Float>(
    set: &CoefficientSet<'_, T>,
    norm: Normalization,
    root: &RootTable<T>,
    m: usize,
    geo: &CircleGeometry<T>,
    scale: T,
    gradp: bool,
) -> OrderTerms<T> {
    let nmx = set.truncation().max_degree as usize;
    let (q, t, u) = (geo.q, geo.t, geo.u);
    let q2 = q * q;

    let (mut wc, mut ws) = (Lane::zero(), Lane::zero());
    let (mut wrc, mut wrs) = (Lane::zero(), Lane::zero());
    let (mut wtc, mut wts) = (Lane::zero(), Lane::zero());

    for n in (m..=nmx).rev() {
        let step = norm.degree_step(root, n, m, q, q2, t);
        let (a, b) = (step.a, step.b);
        let rn1 = real::<T>(n + 1);

        let r = set.cos(n, m) * scale;
        wc.push(a, b, r);
        if gradp {
            wrc.push(a, b, rn1 * r);
            // wc.prev is w[n + 1] after the push.
            wtc.push(a, b, -u * step.ax * wc.prev);
        }

        if m > 0 {
            let r = set.sin(n, m) * scale;
            ws.push(a, b, r);
            if gradp {
                wrs.push(a, b, rn1 * r);
                wts.push(a, b, -u * step.ax * ws.prev);
            }
        }
    }

    let mut terms = OrderTerms {
        wc: wc.cur,
        ws: ws.cur,
        wrc: wrc.cur,
        wrs: wrs.cur,
        wtc: wtc.cur,
        wts: wts.cur,
    };

    if gradp && m > 0 {
        // Derivative of the sectoral factor u^m.
        let mt = real::<T>(m) * geo.tu();
        terms.wtc = terms.wtc + mt * terms.wc;
        terms.wts = terms.wts + mt * terms.ws;
    }

    terms
}

// ============================================================================
// Outer Sum (order)
// ============================================================================

/// State of the order recursion `m = mmx..=1`, closed at `m = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSum<T> {
    vc: Lane<T>,
    vs: Lane<T>,
    vrc: Lane<T>,
    vrs: Lane<T>,
    vtc: Lane<T>,
    vts: Lane<T>,
    vlc: Lane<T>,
    vls: Lane<T>,
    scale: T,
    gradp: bool,
}

impl<T: Float> OrderSum<T> {
    /// Empty recursion; `gradp` enables the derivative lanes.
    ///
    /// `scale` must be the factor the degree sums were run with.
    #[inline]
    pub fn new(gradp: bool, scale: T) -> Self {
        Self {
            vc: Lane::zero(),
            vs: Lane::zero(),
            vrc: Lane::zero(),
            vrs: Lane::zero(),
            vtc: Lane::zero(),
            vts: Lane::zero(),
            vlc: Lane::zero(),
            vls: Lane::zero(),
            scale,
            gradp,
        }
    }

    /// Fold in the degree sum of order `m >= 1`.
    ///
    /// `alpha` and `beta` come from [`Normalization::order_step`].
    #[inline]
    pub fn push(&mut self, m: usize, terms: &OrderTerms<T>, alpha: T, beta: T, az: &Azimuth<T>) {
        let a = az.cos * alpha;
        let b = beta;
        self.vc.push(a, b, terms.wc);
        self.vs.push(a, b, terms.ws);
        if self.gradp {
            let mr = real::<T>(m);
            self.vrc.push(a, b, terms.wrc);
            self.vrs.push(a, b, terms.wrs);
            self.vtc.push(a, b, terms.wtc);
            self.vts.push(a, b, terms.wts);
            self.vlc.push(a, b, mr * terms.ws);
            self.vls.push(a, b, -mr * terms.wc);
        }
    }

    /// Close the recursion with the order-zero terms.
    ///
    /// `a0`, `b0` come from [`Normalization::base_step`]. Returns the value
    /// and the cartesian gradient (zero when derivative lanes are off).
    #[inline]
    pub fn finish(
        self,
        terms: &OrderTerms<T>,
        a0: T,
        b0: T,
        geo: &CircleGeometry<T>,
        az: &Azimuth<T>,
    ) -> (T, [T; 3]) {
        let (cl, sl) = (az.cos, az.sin);
        let close = |w: T, c: &Lane<T>, s: &Lane<T>| {
            let mut acc = Accumulator::with_value(w);
            acc.add(a0 * (cl * c.cur + sl * s.cur));
            acc.add(b0 * c.prev);
            acc.value()
        };

        let mut qs = geo.q / self.scale;
        let value = qs * close(terms.wc, &self.vc, &self.vs);

        if !self.gradp {
            return (value, [T::zero(); 3]);
        }

        qs = qs / geo.r;
        // Spherical components: dV/dr, (1/r) dV/dtheta, 1/(r u) dV/dlambda.
        let vr = -qs * close(terms.wrc, &self.vrc, &self.vrs);
        let vt = qs * close(terms.wtc, &self.vtc, &self.vts);
        let vl = qs / geo.u * close(T::zero(), &self.vlc, &self.vls);

        let (t, u) = (geo.t, geo.u);
        let horizontal = u * vr + t * vt;
        let gradient = [
            cl * horizontal - sl * vl,
            sl * horizontal + cl * vl,
            t * vr - u * vt,
        ];
        (value, gradient)
    }
}
