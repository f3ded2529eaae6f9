//! Spherical-harmonic evaluation benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Point evaluation cost versus maximum degree (value and gradient)
//! - Circle precomputation and per-longitude evaluation
//! - Batch point evaluation (1K to 50K points)
//! - Regular latitude/longitude grids
//! - Secular-variation models evaluated at a time offset
//!
//! For serial execution, use `FASTSPHARM_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTSPHARM_BACKEND=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastSpharm::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use spharm::internals::primitives::coefficients::triangular_len;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTSPHARM_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a gravity-like model: coefficients with power decaying as `1/n^2`.
fn generate_model(degree: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = triangular_len(degree as i32);
    let mut c = vec![0.0; len];
    let mut s = vec![0.0; len];

    c[0] = 1.0;
    let mut k = 1;
    for n in 1..=degree {
        let sigma = 1e-5 / (n * n) as f64;
        let dist = Normal::new(0.0, sigma).unwrap();
        for m in 0..=n {
            c[k] = dist.sample(&mut rng);
            if m > 0 {
                s[k] = dist.sample(&mut rng);
            }
            k += 1;
        }
    }
    (c, s)
}

/// Generate points scattered over a spherical shell of radius 1 to 1.2.
fn generate_points(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let dir = Normal::new(0.0, 1.0).unwrap();
    let radius = Uniform::new(1.0, 1.2).unwrap();

    let mut x = Vec::with_capacity(size);
    let mut y = Vec::with_capacity(size);
    let mut z = Vec::with_capacity(size);
    for _ in 0..size {
        let (a, b, c): (f64, f64, f64) = (dir.sample(&mut rng), dir.sample(&mut rng), dir.sample(&mut rng));
        let f = radius.sample(&mut rng) / (a * a + b * b + c * c).sqrt();
        x.push(a * f);
        y.push(b * f);
        z.push(c * f);
    }
    (x, y, z)
}

/// Circles `(p, z)` of a regular colatitude grid at radius `r`.
fn generate_circles(rows: usize, r: f64) -> Vec<(f64, f64)> {
    (0..rows)
        .map(|i| {
            let colat = (180.0 * (i as f64 + 0.5) / rows as f64).to_radians();
            (r * colat.sin(), r * colat.cos())
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_degree(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_degree");
    group.sample_size(50);

    for degree in [12, 36, 120, 360] {
        let (cc, ss) = generate_model(degree, 42);
        let series = HarmonicSeries::full(&cc, &ss, degree as i32, 1.0, Full).unwrap();

        group.bench_with_input(BenchmarkId::new("value", degree), &degree, |b, _| {
            b.iter(|| series.evaluate(black_box(0.3), black_box(-0.4), black_box(0.9)))
        });
        group.bench_with_input(BenchmarkId::new("gradient", degree), &degree, |b, _| {
            b.iter(|| series.evaluate_gradient(black_box(0.3), black_box(-0.4), black_box(0.9)))
        });
    }
    group.finish();
}

fn bench_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");
    group.sample_size(50);

    let degree = 360;
    let (cc, ss) = generate_model(degree, 42);
    let series = HarmonicSeries::full(&cc, &ss, degree as i32, 1.0, Full).unwrap();
    let (p, z) = (0.8, 0.6);

    group.bench_function("precompute_value", |b| {
        b.iter(|| series.circle(black_box(p), black_box(z), false).unwrap())
    });
    group.bench_function("precompute_gradient", |b| {
        b.iter(|| series.circle(black_box(p), black_box(z), true).unwrap())
    });

    let circle = series.circle(p, z, true).unwrap();
    let lons: Vec<f64> = (0..720).map(|i| -180.0 + 0.5 * i as f64).collect();
    group.throughput(Throughput::Elements(lons.len() as u64));
    group.bench_function("sweep_value", |b| {
        b.iter(|| lons.iter().map(|&lon| circle.evaluate(lon)).sum::<f64>())
    });
    group.bench_function("sweep_gradient", |b| {
        b.iter(|| {
            lons.iter()
                .filter_map(|&lon| circle.evaluate_gradient(lon))
                .map(|e| e.value)
                .sum::<f64>()
        })
    });
    group.finish();
}

fn bench_batch_points(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("batch_points_{}", mode_name));
    group.sample_size(20);

    let degree = 36;
    let (cc, ss) = generate_model(degree, 42);
    let series = HarmonicSeries::full(&cc, &ss, degree as i32, 1.0, Full).unwrap();

    for size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (x, y, z) = generate_points(size, 7);

        group.bench_with_input(BenchmarkId::new("value", size), &size, |b, _| {
            b.iter(|| {
                series
                    .batch()
                    .parallel(use_parallel)
                    .evaluate_points(black_box(&x), black_box(&y), black_box(&z))
                    .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("gradient", size), &size, |b, _| {
            b.iter(|| {
                series
                    .batch()
                    .parallel(use_parallel)
                    .evaluate_points_gradient(black_box(&x), black_box(&y), black_box(&z))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("grid_{}", mode_name));
    group.sample_size(10);

    for degree in [36, 120] {
        let (cc, ss) = generate_model(degree, 42);
        let series = HarmonicSeries::full(&cc, &ss, degree as i32, 1.0, Full).unwrap();

        let circles = generate_circles(90, 1.05);
        let lons: Vec<f64> = (0..180).map(|i| -180.0 + 2.0 * i as f64).collect();
        group.throughput(Throughput::Elements((circles.len() * lons.len()) as u64));

        group.bench_with_input(BenchmarkId::new("2deg", degree), &degree, |b, _| {
            b.iter(|| {
                series
                    .batch()
                    .parallel(use_parallel)
                    .evaluate_grid(black_box(&circles), black_box(&lons))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_corrected(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("corrected_{}", mode_name));
    group.sample_size(20);

    // Magnetic-style model: degree 13 main field, degree 8 secular variation.
    let (cc, ss) = generate_model(13, 1);
    let (c1, s1) = generate_model(8, 2);
    let model = Harmonic::new()
        .coefficients(&cc, &ss)
        .correction(&c1, &s1)
        .normalization(Schmidt)
        .adapter(Corrected)
        .build()
        .unwrap();

    group.bench_function("point_gradient", |b| {
        b.iter(|| model.evaluate_gradient(black_box(2.5), black_box(0.3), black_box(-0.4), black_box(0.9)))
    });

    let (x, y, z) = generate_points(10_000, 3);
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("batch_value", |b| {
        let view = model.at(2.5);
        b.iter(|| {
            view.batch()
                .parallel(use_parallel)
                .evaluate_points(black_box(&x), black_box(&y), black_box(&z))
                .unwrap()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_degree,
    bench_circle,
    bench_batch_points,
    bench_grid,
    bench_corrected,
);

criterion_main!(benches);
