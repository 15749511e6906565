//! Benchmarks for synthetic data generation and histogram binning
//!
//! Measures the data side of the figures, which is everything except the
//! rasterization done by plotters.
//!
//! # What We're Measuring
//!
//! 1. **Spatial noise** (`SpatialNoise::with_size`):
//!    - Three per-pixel draws (normal, uniform, normal) plus two matrix sums
//!    - Should scale linearly with pixel count
//!
//! 2. **Histogram binning** (`bin_counts`):
//!    - One pass for the range, one pass for the counts
//!    - Linear in the number of samples, independent of the bin count
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench synthetic_generation
//!
//! # Only the spatial noise group
//! cargo bench --bench synthetic_generation spatial
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sensor_figures::figures::bin_counts;
use sensor_figures::synthetic::{clipped_gaussian_pixels, temporal_noise_trace, SpatialNoise};
use std::hint::black_box;

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Spatial noise decomposition for square-ish images of growing size
///
/// ```text
/// 60x110    ->  6 600 px
/// 120x220   -> 26 400 px (report size)
/// 240x440   -> 105 600 px
/// ```
fn benchmark_spatial_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_noise");

    for &(height, width) in [(60, 110), (120, 220), (240, 440)].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", height, width)),
            &(height, width),
            |b, &(height, width)| {
                b.iter(|| SpatialNoise::with_size(black_box(0), height, width));
            },
        );
    }

    group.finish();
}

/// Histogram of 20 000 pixels with varying bin counts
fn benchmark_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    let pixels = clipped_gaussian_pixels(0, 20_000);

    for bins in [10, 50, 256].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(bins), bins, |b, &bins| {
            b.iter(|| bin_counts(black_box(&pixels), bins));
        });
    }

    group.finish();
}

fn benchmark_temporal_trace(c: &mut Criterion) {
    c.bench_function("temporal_trace", |b| {
        b.iter(|| temporal_noise_trace(black_box(0)));
    });
}

criterion_group!(
    benches,
    benchmark_spatial_noise,
    benchmark_histogram,
    benchmark_temporal_trace
);
criterion_main!(benches);
