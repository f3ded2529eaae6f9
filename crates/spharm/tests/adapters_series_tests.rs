//! Tests for the single-set harmonic series.
//!
//! These tests verify point evaluation of `HarmonicSeries`:
//! - Closed-form low-degree sums in both normalizations
//! - Truncation by maximum degree and order
//! - Gradients against finite differences
//! - Behavior on the polar axis
//! - Construction errors
//!
//! ## Test Organization
//!
//! 1. **Degree Zero** - Monopole term
//! 2. **Closed Forms** - Degree-2 sums written out by hand
//! 3. **Normalization** - Full versus Schmidt
//! 4. **Truncation** - nmx/mmx below the layout degree, empty sums
//! 5. **Gradient** - Finite differences, consistency with the value
//! 6. **Poles** - Polar axis and near-pole points
//! 7. **Errors** - Invalid truncations, short arrays, bad radius

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spharm::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn random_coefficients(degree: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = (degree + 1) * (degree + 2) / 2;
    let c = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();
    let s = (0..len).map(|_| rng.random_range(-1.0..1.0)).collect();
    (c, s)
}

fn index(n: usize, m: usize) -> usize {
    n * (n + 1) / 2 + m
}

/// Degree-2 series written out with explicit Schmidt functions.
fn degree2_reference(c: &[f64], s: &[f64], a: f64, full: bool, x: f64, y: f64, z: f64) -> f64 {
    let p = x.hypot(y);
    let r = p.hypot(z);
    let (t, u) = (z / r, p / r);
    let lambda = y.atan2(x);
    let q = a / r;
    let sq3 = 3f64.sqrt();

    let legendre = [
        (0, 0, 1.0),
        (1, 0, t),
        (1, 1, u),
        (2, 0, (3.0 * t * t - 1.0) / 2.0),
        (2, 1, sq3 * t * u),
        (2, 2, sq3 / 2.0 * u * u),
    ];

    legendre
        .iter()
        .map(|&(n, m, pnm)| {
            let norm = if full { ((2 * n + 1) as f64).sqrt() } else { 1.0 };
            let ml = m as f64 * lambda;
            let k = index(n, m);
            q.powi(n as i32 + 1) * norm * pnm * (c[k] * ml.cos() + s[k] * ml.sin())
        })
        .sum()
}

fn numeric_gradient(series: &HarmonicSeries<'_, f64>, x: f64, y: f64, z: f64) -> [f64; 3] {
    let h = 1e-5;
    let d = |dx: f64, dy: f64, dz: f64| {
        (series.evaluate(x + dx, y + dy, z + dz) - series.evaluate(x - dx, y - dy, z - dz))
            / (2.0 * h)
    };
    [d(h, 0.0, 0.0), d(0.0, h, 0.0), d(0.0, 0.0, h)]
}

// ============================================================================
// Degree Zero Tests
// ============================================================================

/// Test that a degree-0 series is exactly `C00 * a / r`.
#[test]
fn test_degree_zero_is_monopole() {
    let c = [0.75];
    let s = [0.0];
    let series = HarmonicSeries::full(&c, &s, 0, 1.0, Full).unwrap();

    assert_eq!(series.evaluate(0.0, 0.0, 2.0), 0.75 * (1.0 / 2.0));
    assert_eq!(series.evaluate(3.0, 0.0, 4.0), 0.75 * (1.0 / 5.0));
}

/// Test that the monopole does not depend on the normalization.
#[test]
fn test_degree_zero_normalization_independent() {
    let c = [1.25];
    let s = [3.0];
    let full = HarmonicSeries::full(&c, &s, 0, 2.0, Full).unwrap();
    let schmidt = HarmonicSeries::full(&c, &s, 0, 2.0, Schmidt).unwrap();

    let (x, y, z) = (1.0, -2.0, 0.5);
    assert_eq!(full.evaluate(x, y, z), schmidt.evaluate(x, y, z));
}

/// Test the monopole gradient points toward the origin with magnitude `C00 a / r^2`.
#[test]
fn test_degree_zero_gradient() {
    let c = [2.0];
    let s = [0.0];
    let series = HarmonicSeries::full(&c, &s, 0, 1.0, Schmidt).unwrap();

    let (x, y, z) = (1.0, 2.0, 2.0);
    let r: f64 = 3.0;
    let g = series.evaluate_gradient(x, y, z);

    assert_relative_eq!(g.value, 2.0 / r, max_relative = 1e-15);
    let magnitude = 2.0 / (r * r);
    assert_relative_eq!(g.gx(), -magnitude * x / r, max_relative = 1e-14);
    assert_relative_eq!(g.gy(), -magnitude * y / r, max_relative = 1e-14);
    assert_relative_eq!(g.gz(), -magnitude * z / r, max_relative = 1e-14);
}

// ============================================================================
// Closed Form Tests
// ============================================================================

/// Test a Schmidt degree-2 series against the explicit Legendre functions.
#[test]
fn test_degree2_schmidt_closed_form() {
    // S[n, 0] entries are never read; fill them with junk.
    let c = [0.3, -0.7, 0.2, 0.5, -0.4, 0.9];
    let s = [99.0, 99.0, 0.6, 99.0, -0.8, 0.1];
    let a = 1.5;
    let series = HarmonicSeries::full(&c, &s, 2, a, Schmidt).unwrap();

    for &(x, y, z) in &[(1.0, 2.0, 3.0), (-2.5, 0.4, -1.0), (0.3, -3.0, 0.2), (2.0, 0.0, 0.0)] {
        let expected = degree2_reference(&c, &s, a, false, x, y, z);
        assert_relative_eq!(series.evaluate(x, y, z), expected, max_relative = 1e-13);
    }
}

/// Test a fully normalized degree-2 series against the explicit Legendre functions.
#[test]
fn test_degree2_full_closed_form() {
    let c = [0.3, -0.7, 0.2, 0.5, -0.4, 0.9];
    let s = [0.0, 0.0, 0.6, 0.0, -0.8, 0.1];
    let a = 0.8;
    let series = HarmonicSeries::full(&c, &s, 2, a, Full).unwrap();

    for &(x, y, z) in &[(1.0, 2.0, 3.0), (-2.5, 0.4, -1.0), (0.3, -3.0, 0.2), (0.0, 1.0, 1.0)] {
        let expected = degree2_reference(&c, &s, a, true, x, y, z);
        assert_relative_eq!(series.evaluate(x, y, z), expected, max_relative = 1e-13);
    }
}

/// Test single sectoral terms, which exercise only the order recursion.
#[test]
fn test_sectoral_terms() {
    let (x, y, z): (f64, f64, f64) = (1.0, 1.0, 0.5);
    let p = x.hypot(y);
    let r = p.hypot(z);
    let (u, q, lambda) = (p / r, 1.0 / r, y.atan2(x));

    // C11 = 1 only.
    let mut c = [0.0; 6];
    let s = [0.0; 6];
    c[index(1, 1)] = 1.0;
    let series = HarmonicSeries::full(&c, &s, 2, 1.0, Schmidt).unwrap();
    assert_relative_eq!(
        series.evaluate(x, y, z),
        q * q * u * lambda.cos(),
        max_relative = 1e-14
    );

    // S22 = 1 only.
    let c = [0.0; 6];
    let mut s = [0.0; 6];
    s[index(2, 2)] = 1.0;
    let series = HarmonicSeries::full(&c, &s, 2, 1.0, Schmidt).unwrap();
    let expected = q.powi(3) * 3f64.sqrt() / 2.0 * u * u * (2.0 * lambda).sin();
    assert_relative_eq!(series.evaluate(x, y, z), expected, max_relative = 1e-14);
}

// ============================================================================
// Normalization Tests
// ============================================================================

/// Test that Full coefficients scaled by `1/sqrt(2n+1)` reproduce Schmidt.
#[test]
fn test_full_matches_rescaled_schmidt() {
    let degree = 12;
    let (c, s) = random_coefficients(degree, 7);

    let mut c_full = c.clone();
    let mut s_full = s.clone();
    for n in 0..=degree {
        let f = ((2 * n + 1) as f64).sqrt();
        for m in 0..=n {
            c_full[index(n, m)] /= f;
            s_full[index(n, m)] /= f;
        }
    }

    let schmidt = HarmonicSeries::full(&c, &s, degree as i32, 1.0, Schmidt).unwrap();
    let full = HarmonicSeries::full(&c_full, &s_full, degree as i32, 1.0, Full).unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let x = rng.random_range(-2.0..2.0);
        let y = rng.random_range(-2.0..2.0);
        let z = rng.random_range(-2.0..2.0);
        let a = schmidt.evaluate_gradient(x, y, z);
        let b = full.evaluate_gradient(x, y, z);
        assert_relative_eq!(a.value, b.value, epsilon = 1e-13, max_relative = 1e-12);
        for k in 0..3 {
            assert_relative_eq!(
                a.gradient[k],
                b.gradient[k],
                epsilon = 1e-13,
                max_relative = 1e-12
            );
        }
    }
}

// ============================================================================
// Truncation Tests
// ============================================================================

/// Test that `nmx < N` ignores every coefficient above `nmx`.
#[test]
fn test_max_degree_below_layout() {
    let (c, s) = random_coefficients(4, 3);
    let truncated = HarmonicSeries::new(&c, &s, 4, 2, 2, 1.0, Full).unwrap();
    let small = HarmonicSeries::full(&c[..6], &s[..6], 2, 1.0, Full).unwrap();

    for &(x, y, z) in &[(1.0, 2.0, 3.0), (-0.5, 0.5, -1.5)] {
        assert_eq!(truncated.evaluate(x, y, z), small.evaluate(x, y, z));
    }
}

/// Test that `mmx < nmx` drops the high orders.
#[test]
fn test_max_order_below_max_degree() {
    let (c, s) = random_coefficients(3, 5);
    let truncated = HarmonicSeries::new(&c, &s, 3, 3, 1, 1.0, Schmidt).unwrap();

    let mut c0 = c.clone();
    let mut s0 = s.clone();
    for n in 2..=3 {
        for m in 2..=n {
            c0[index(n, m)] = 0.0;
            s0[index(n, m)] = 0.0;
        }
    }
    let zeroed = HarmonicSeries::full(&c0, &s0, 3, 1.0, Schmidt).unwrap();

    let (x, y, z) = (1.2, -0.7, 0.9);
    assert_relative_eq!(
        truncated.evaluate(x, y, z),
        zeroed.evaluate(x, y, z),
        max_relative = 1e-14
    );
}

/// Test that `mmx = -1` is an empty sum with zero gradient.
#[test]
fn test_empty_order_range() {
    let (c, s) = random_coefficients(2, 1);
    let series = HarmonicSeries::new(&c, &s, 2, 2, -1, 1.0, Full).unwrap();

    assert_eq!(series.evaluate(1.0, 2.0, 3.0), 0.0);
    let g = series.evaluate_gradient(1.0, 2.0, 3.0);
    assert_eq!(g, Evaluation::zero());
}

/// Test that the layout `N = -1` accepts empty arrays and sums to zero.
#[test]
fn test_empty_layout() {
    let c: [f64; 0] = [];
    let s: [f64; 0] = [];
    let series = HarmonicSeries::full(&c, &s, -1, 1.0, Full).unwrap();

    assert_eq!(series.truncation(), Truncation::empty());
    assert_eq!(series.evaluate(1.0, 0.0, 0.0), 0.0);
}

/// Test that trailing entries beyond the layout are ignored.
#[test]
fn test_longer_arrays_accepted() {
    let c = [1.0, 0.5, 0.25, 123.0, 456.0];
    let s = [0.0, 0.0, 0.1, 789.0];
    let long = HarmonicSeries::full(&c, &s, 1, 1.0, Full).unwrap();
    let exact = HarmonicSeries::full(&c[..3], &s[..3], 1, 1.0, Full).unwrap();

    assert_eq!(long.evaluate(0.5, 1.0, 1.5), exact.evaluate(0.5, 1.0, 1.5));
}

// ============================================================================
// Gradient Tests
// ============================================================================

/// Test the gradient against central differences.
#[test]
fn test_gradient_matches_finite_differences() {
    let degree = 8;
    let (c, s) = random_coefficients(degree, 21);
    for norm in [Full, Schmidt] {
        let series = HarmonicSeries::full(&c, &s, degree as i32, 1.0, norm).unwrap();

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            let x = rng.random_range(-2.0..2.0);
            let y = rng.random_range(-2.0..2.0);
            let z = rng.random_range(-2.0..2.0);

            let g = series.evaluate_gradient(x, y, z);
            let numeric = numeric_gradient(&series, x, y, z);
            for k in 0..3 {
                assert_relative_eq!(g.gradient[k], numeric[k], epsilon = 1e-7, max_relative = 1e-6);
            }
        }
    }
}

/// Test that the gradient pass returns the same value as the value pass.
#[test]
fn test_gradient_value_consistent() {
    let (c, s) = random_coefficients(6, 4);
    let series = HarmonicSeries::full(&c, &s, 6, 1.0, Full).unwrap();

    let (x, y, z) = (0.9, -1.1, 0.4);
    let g = series.evaluate_gradient(x, y, z);
    assert_eq!(g.value, series.evaluate(x, y, z));
}

// ============================================================================
// Pole Tests
// ============================================================================

/// Test that on the polar axis only the zonal terms survive.
#[test]
fn test_pole_matches_zonal_series() {
    let (c, s) = random_coefficients(5, 8);
    let series = HarmonicSeries::full(&c, &s, 5, 1.0, Full).unwrap();
    let zonal = HarmonicSeries::new(&c, &s, 5, 5, 0, 1.0, Full).unwrap();

    for z in [2.0, -1.5] {
        assert_relative_eq!(
            series.evaluate(0.0, 0.0, z),
            zonal.evaluate(0.0, 0.0, z),
            max_relative = 1e-13
        );
    }
}

/// Test that the gradient on the polar axis is finite and close to nearby points.
#[test]
fn test_pole_gradient_finite() {
    let (c, s) = random_coefficients(5, 9);
    let series = HarmonicSeries::full(&c, &s, 5, 1.0, Schmidt).unwrap();

    let g = series.evaluate_gradient(0.0, 0.0, 1.5);
    assert!(g.value.is_finite());
    assert!(g.gradient.iter().all(|v| v.is_finite()));

    let near = series.evaluate_gradient(1e-9, 0.0, 1.5);
    for k in 0..3 {
        assert_relative_eq!(g.gradient[k], near.gradient[k], epsilon = 1e-6);
    }
}

// ============================================================================
// Precision Tests
// ============================================================================

/// Test that the engine works in single precision.
#[test]
fn test_f32_series() {
    let (c, s) = random_coefficients(4, 12);
    let c32: Vec<f32> = c.iter().map(|&v| v as f32).collect();
    let s32: Vec<f32> = s.iter().map(|&v| v as f32).collect();

    let series64 = HarmonicSeries::full(&c, &s, 4, 1.0, Full).unwrap();
    let series32 = HarmonicSeries::full(&c32, &s32, 4, 1.0f32, Full).unwrap();

    let v64 = series64.evaluate(1.0, 0.5, -0.25);
    let v32 = series32.evaluate(1.0f32, 0.5, -0.25);
    assert_relative_eq!(v32 as f64, v64, epsilon = 1e-5, max_relative = 1e-4);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test that `nmx > N` is rejected.
#[test]
fn test_max_degree_above_layout_rejected() {
    let (c, s) = random_coefficients(2, 0);
    let result = HarmonicSeries::new(&c, &s, 2, 3, 1, 1.0, Full);
    assert_eq!(
        result.unwrap_err(),
        SpharmError::InvalidTruncation {
            degree: 2,
            max_degree: 3,
            max_order: 1
        }
    );
}

/// Test that `mmx > nmx` and `mmx < -1` are rejected.
#[test]
fn test_bad_max_order_rejected() {
    let (c, s) = random_coefficients(3, 0);
    assert!(matches!(
        HarmonicSeries::new(&c, &s, 3, 2, 3, 1.0, Full),
        Err(SpharmError::InvalidTruncation { .. })
    ));
    assert!(matches!(
        HarmonicSeries::new(&c, &s, 3, 3, -2, 1.0, Full),
        Err(SpharmError::InvalidTruncation { .. })
    ));
}

/// Test that arrays shorter than the layout are rejected.
#[test]
fn test_short_arrays_rejected() {
    let c = [0.0; 5];
    let s = [0.0; 6];
    let result = HarmonicSeries::full(&c, &s, 2, 1.0, Full);
    assert_eq!(
        result.unwrap_err(),
        SpharmError::CoefficientsTooShort {
            name: "C",
            got: 5,
            min: 6
        }
    );

    let result = HarmonicSeries::full(&s, &c, 2, 1.0, Full);
    assert!(matches!(
        result,
        Err(SpharmError::CoefficientsTooShort { name: "S", .. })
    ));
}

/// Test that non-positive or non-finite radii are rejected.
#[test]
fn test_bad_reference_radius_rejected() {
    let c = [1.0];
    let s = [0.0];
    for a in [0.0, -1.0, f64::INFINITY, f64::NAN] {
        assert!(matches!(
            HarmonicSeries::full(&c, &s, 0, a, Full),
            Err(SpharmError::InvalidReferenceRadius(_))
        ));
    }
}

/// Test the accessors report the construction parameters.
#[test]
fn test_accessors() {
    let (c, s) = random_coefficients(3, 0);
    let series = HarmonicSeries::new(&c, &s, 3, 2, 1, 6371.2, Schmidt).unwrap();

    assert_eq!(series.truncation(), Truncation::new(3, 2, 1));
    assert_eq!(series.reference_radius(), 6371.2);
    assert_eq!(series.normalization(), Schmidt);
    assert_eq!(series.coefficients().cos_coefficients().len(), c.len());
}
