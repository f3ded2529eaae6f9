//! Tests for the circle-of-latitude evaluator.
//!
//! These tests verify that a precomputed circle reproduces point evaluation:
//! - Values and gradients at many longitudes
//! - Corrected series folded per order
//! - Longitude conventions and the cosine/sine entry points
//! - Gradient availability and accessors
//!
//! ## Test Organization
//!
//! 1. **Agreement** - Circle versus point evaluation
//! 2. **Corrected Circles** - Circles of `V + tau V'`
//! 3. **Longitudes** - Degrees, periodicity, cos/sin pairs
//! 4. **Gradient Availability** - Circles built without gradient lanes
//! 5. **Edge Cases** - Empty sums, poles, accessors

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

fn point_on_circle(p: f64, z: f64, lon: f64) -> (f64, f64, f64) {
    let lam = lon.to_radians();
    (p * lam.cos(), p * lam.sin(), z)
}

// ============================================================================
// Agreement Tests
// ============================================================================

/// Test circle values against point evaluation around a full circle.
#[test]
fn test_circle_matches_point_values() {
    let degree = 10;
    let (c, s) = random_coefficients(degree, 1);
    for norm in [Full, Schmidt] {
        let series = HarmonicSeries::full(&c, &s, degree as i32, 1.0, norm).unwrap();
        let (p, z) = (1.3, -0.6);
        let circle = series.circle(p, z, false).unwrap();

        for k in 0..24 {
            let lon = -180.0 + 15.0 * k as f64;
            let (x, y, z) = point_on_circle(p, z, lon);
            assert_relative_eq!(
                circle.evaluate(lon),
                series.evaluate(x, y, z),
                epsilon = 1e-13,
                max_relative = 1e-12
            );
        }
    }
}

/// Test circle gradients against point evaluation.
#[test]
fn test_circle_matches_point_gradients() {
    let degree = 7;
    let (c, s) = random_coefficients(degree, 2);
    let series = HarmonicSeries::full(&c, &s, degree as i32, 1.0, Full).unwrap();
    let (p, z) = (0.8, 1.1);
    let circle = series.circle(p, z, true).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..16 {
        let lon = rng.random_range(-180.0..180.0);
        let (x, y, z) = point_on_circle(p, z, lon);
        let expected = series.evaluate_gradient(x, y, z);
        let got = circle.evaluate_gradient(lon).unwrap();

        assert_relative_eq!(got.value, expected.value, epsilon = 1e-13, max_relative = 1e-12);
        for k in 0..3 {
            assert_relative_eq!(
                got.gradient[k],
                expected.gradient[k],
                epsilon = 1e-13,
                max_relative = 1e-11
            );
        }
    }
}

/// Test a truncated series (`nmx < N`, `mmx < nmx`) along a circle.
#[test]
fn test_truncated_circle() {
    let (c, s) = random_coefficients(6, 4);
    let series = HarmonicSeries::new(&c, &s, 6, 4, 2, 2.0, Schmidt).unwrap();
    let (p, z) = (3.0, 0.5);
    let circle = series.circle(p, z, false).unwrap();

    assert_eq!(circle.max_order(), 2);
    for lon in [0.0, 33.0, 210.0] {
        let (x, y, z) = point_on_circle(p, z, lon);
        assert_relative_eq!(
            circle.evaluate(lon),
            series.evaluate(x, y, z),
            epsilon = 1e-13,
            max_relative = 1e-12
        );
    }
}

// ============================================================================
// Corrected Circle Tests
// ============================================================================

/// Test a corrected circle against corrected point evaluation.
#[test]
fn test_corrected_circle_matches_points() {
    let (c, s) = random_coefficients(6, 5);
    let (c1, s1) = random_coefficients(3, 6);
    let model = HarmonicSeriesWithCorrection::full(&c, &s, 6, &c1, &s1, 3, 1.0, Schmidt).unwrap();

    let tau = 7.5;
    let (p, z) = (1.1, 0.3);
    let circle = model.circle(tau, p, z, true).unwrap();

    for lon in [-170.0, -45.0, 0.0, 12.5, 90.0, 179.0] {
        let (x, y, z) = point_on_circle(p, z, lon);
        let expected = model.evaluate_gradient(tau, x, y, z);
        let got = circle.evaluate_gradient(lon).unwrap();

        assert_relative_eq!(got.value, expected.value, epsilon = 1e-12, max_relative = 1e-12);
        for k in 0..3 {
            assert_relative_eq!(
                got.gradient[k],
                expected.gradient[k],
                epsilon = 1e-12,
                max_relative = 1e-11
            );
        }
    }
}

/// Test that a corrected circle at `tau = 0` matches the primary circle.
#[test]
fn test_corrected_circle_zero_tau() {
    let (c, s) = random_coefficients(4, 8);
    let (c1, s1) = random_coefficients(4, 9);
    let model = HarmonicSeriesWithCorrection::full(&c, &s, 4, &c1, &s1, 4, 1.0, Full).unwrap();
    let series = HarmonicSeries::full(&c, &s, 4, 1.0, Full).unwrap();

    let corrected = model.circle(0.0, 1.0, 1.0, false).unwrap();
    let primary = series.circle(1.0, 1.0, false).unwrap();

    for lon in [0.0, 60.0, 120.0] {
        assert_eq!(corrected.evaluate(lon), primary.evaluate(lon));
    }
}

// ============================================================================
// Longitude Tests
// ============================================================================

/// Test longitudes differing by full turns give the same result.
#[test]
fn test_longitude_periodicity() {
    let (c, s) = random_coefficients(5, 10);
    let series = HarmonicSeries::full(&c, &s, 5, 1.0, Full).unwrap();
    let circle = series.circle(1.0, 0.2, false).unwrap();

    for lon in [0.0, 90.0, -90.0, 180.0] {
        assert_eq!(circle.evaluate(lon), circle.evaluate(lon + 360.0));
        assert_eq!(circle.evaluate(lon), circle.evaluate(lon - 720.0));
    }
}

/// Test that quarter-turn longitudes hit the coordinate axes exactly.
#[test]
fn test_quarter_turns_exact() {
    let (c, s) = random_coefficients(4, 11);
    let series = HarmonicSeries::full(&c, &s, 4, 1.0, Schmidt).unwrap();
    let (p, z) = (2.0, -1.0);
    let circle = series.circle(p, z, false).unwrap();

    assert_eq!(circle.evaluate(0.0), series.evaluate(p, 0.0, z));
    assert_eq!(circle.evaluate(90.0), series.evaluate(0.0, p, z));
    assert_eq!(circle.evaluate(180.0), series.evaluate(-p, 0.0, z));
    assert_eq!(circle.evaluate(-90.0), series.evaluate(0.0, -p, z));
}

/// Test the cosine/sine entry point normalizes its arguments.
#[test]
fn test_evaluate_cossin() {
    let (c, s) = random_coefficients(5, 12);
    let series = HarmonicSeries::full(&c, &s, 5, 1.0, Full).unwrap();
    let circle = series.circle(1.5, 0.5, true).unwrap();

    let lon: f64 = 37.0;
    let (sl, cl) = lon.to_radians().sin_cos();
    assert_relative_eq!(
        circle.evaluate_cossin(3.0 * cl, 3.0 * sl),
        circle.evaluate(lon),
        epsilon = 1e-14,
        max_relative = 1e-13
    );

    let a = circle.evaluate_gradient_cossin(cl, sl).unwrap();
    let b = circle.evaluate_gradient(lon).unwrap();
    assert_relative_eq!(a.value, b.value, epsilon = 1e-14, max_relative = 1e-13);
    assert_relative_eq!(a.gradient_norm(), b.gradient_norm(), max_relative = 1e-13);
}

// ============================================================================
// Gradient Availability Tests
// ============================================================================

/// Test that a circle built without gradient lanes reports no gradient.
#[test]
fn test_gradient_unavailable() {
    let (c, s) = random_coefficients(3, 13);
    let series = HarmonicSeries::full(&c, &s, 3, 1.0, Full).unwrap();

    let plain = series.circle(1.0, 0.0, false).unwrap();
    assert!(!plain.has_gradient());
    assert!(plain.evaluate_gradient(45.0).is_none());
    assert!(plain.evaluate_gradient_cossin(1.0, 0.0).is_none());

    let full = series.circle(1.0, 0.0, true).unwrap();
    assert!(full.has_gradient());
    assert_eq!(full.evaluate_gradient(45.0).unwrap().value, full.evaluate(45.0));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that an empty sum gives a zero circle.
#[test]
fn test_empty_circle() {
    let (c, s) = random_coefficients(2, 14);
    let series = HarmonicSeries::new(&c, &s, 2, 2, -1, 1.0, Full).unwrap();
    let circle = series.circle(1.0, 1.0, true).unwrap();

    assert_eq!(circle.max_order(), -1);
    assert_eq!(circle.evaluate(10.0), 0.0);
    assert_eq!(circle.evaluate_gradient(10.0), Some(Evaluation::zero()));
}

/// Test that a degenerate circle on the polar axis agrees at all longitudes.
#[test]
fn test_polar_circle() {
    let (c, s) = random_coefficients(4, 15);
    let series = HarmonicSeries::full(&c, &s, 4, 1.0, Full).unwrap();
    let circle = series.circle(0.0, 2.0, false).unwrap();

    let reference = series.evaluate(0.0, 0.0, 2.0);
    for lon in [0.0, 45.0, 135.0, -100.0] {
        assert_relative_eq!(circle.evaluate(lon), reference, max_relative = 1e-13);
    }
}

/// Test the circle accessors.
#[test]
fn test_circle_accessors() {
    let (c, s) = random_coefficients(3, 16);
    let series = HarmonicSeries::full(&c, &s, 3, 1.0, Full).unwrap();
    let circle = series.circle(1.25, -0.5, false).unwrap();

    assert_eq!(circle.radius(), 1.25);
    assert_eq!(circle.height(), -0.5);
    assert_eq!(circle.max_order(), 3);
}

/// Test that a circle outlives its series.
#[test]
fn test_circle_owns_state() {
    let circle = {
        let c = vec![1.0f64, 0.5, 0.25];
        let s = vec![0.0, 0.0, 0.1];
        let series = HarmonicSeries::full(&c, &s, 1, 1.0, Full).unwrap();
        series.circle(2.0, 0.0, false).unwrap()
    };
    assert!(circle.evaluate(30.0).is_finite());
}
