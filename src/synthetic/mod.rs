//! Seeded synthetic data for the example figures
//!
//! Every generator here is a pure function of its seed: the same seed always
//! yields the same samples, so re-rendering a figure produces the same image.
//!
//! # Organization
//!
//! - **noise**: 1-D samples (pixel histogram, temporal noise trace)
//! - **image**: 2-D sensor images (average image, fixed-pattern noise)
//! - **spectra**: analytic Gaussian peaks for the interference concept plot
//!
//! # Example
//!
//! ```rust
//! use sensor_figures::synthetic::{clipped_gaussian_pixels, DEFAULT_SEED};
//!
//! let a = clipped_gaussian_pixels(DEFAULT_SEED, 100);
//! let b = clipped_gaussian_pixels(DEFAULT_SEED, 100);
//! assert_eq!(a, b);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

pub mod image;
pub mod noise;
pub mod spectra;

pub use image::{average_image, SpatialNoise, IMAGE_HEIGHT, IMAGE_WIDTH};
pub use noise::{clipped_gaussian_pixels, temporal_noise_trace, HISTOGRAM_SAMPLES, TRACE_FRAMES};
pub use spectra::{
    linspace, GaussianPeak, PeakOrder, FIRST_ORDER_PEAKS, PEAK_SAMPLES, SECOND_ORDER_PEAKS,
};

/// Seed used by every synthetic figure when the caller does not pick one
pub const DEFAULT_SEED: u64 = 0;

/// Build the generator shared by all synthetic figures
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw one sample from N(mean, std)
///
/// Goes through `StandardNormal` so that no parameter validation can fail.
pub(crate) fn normal_sample<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std * z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_normal_sample_moments() {
        let mut rng = seeded_rng(DEFAULT_SEED);
        let n = 50_000;
        let samples: Vec<f64> = (0..n).map(|_| normal_sample(&mut rng, 10.0, 2.0)).collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;

        assert!((mean - 10.0).abs() < 0.05, "mean {}", mean);
        assert!((var.sqrt() - 2.0).abs() < 0.05, "std {}", var.sqrt());
    }
}
