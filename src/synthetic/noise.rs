//! One-dimensional noise samples
//!
//! - [`clipped_gaussian_pixels`]: 8-bit pixel values for the histogram figure
//! - [`temporal_noise_trace`]: one pixel observed over consecutive frames

use std::f64::consts::PI;

use super::{normal_sample, seeded_rng};

/// Number of pixel samples drawn for the histogram example
pub const HISTOGRAM_SAMPLES: usize = 20_000;

/// Number of frames in the temporal noise trace
pub const TRACE_FRAMES: usize = 100;

const PIXEL_MEAN: f64 = 128.0;
const PIXEL_STD: f64 = 30.0;
const PIXEL_MAX: f64 = 255.0;

const TRACE_BASELINE: f64 = 250.0;
const TRACE_NOISE_STD: f64 = 4.0;
const TRACE_RIPPLE_AMPLITUDE: f64 = 2.0;
const TRACE_RIPPLE_PERIOD: f64 = 30.0;

/// Draw `n` pixel values from N(128, 30), clipped to the 8-bit range [0, 255]
///
/// Clipping keeps every sample, so the output always has exactly `n` values.
pub fn clipped_gaussian_pixels(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = seeded_rng(seed);
    (0..n)
        .map(|_| normal_sample(&mut rng, PIXEL_MEAN, PIXEL_STD).clamp(0.0, PIXEL_MAX))
        .collect()
}

/// Temporal noise of a single pixel over [`TRACE_FRAMES`] frames
///
/// Returns `(frame_index, value)` with
/// `value = 250 + N(0, 4) + 2 sin(2 pi t / 30)`.
pub fn temporal_noise_trace(seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = seeded_rng(seed);

    // Draw all the noise first, then add the ripple
    let noise: Vec<f64> = (0..TRACE_FRAMES)
        .map(|_| normal_sample(&mut rng, 0.0, TRACE_NOISE_STD))
        .collect();

    let frames: Vec<f64> = (0..TRACE_FRAMES).map(|t| t as f64).collect();
    let values = frames
        .iter()
        .zip(noise.iter())
        .map(|(t, n)| {
            TRACE_BASELINE + n + TRACE_RIPPLE_AMPLITUDE * (2.0 * PI * t / TRACE_RIPPLE_PERIOD).sin()
        })
        .collect();

    (frames, values)
}
