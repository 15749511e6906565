//! Synthetic sensor images
//!
//! The "average image" is a smooth Gaussian bump on a flat pedestal, standing in
//! for the mean of a stack of flat-field frames. [`SpatialNoise`] adds a
//! per-pixel fixed pattern plus an independent random term to obtain a
//! reference frame, then recovers the fixed-pattern estimate by subtraction.
//!
//! All matrices are `IMAGE_HEIGHT` rows by `IMAGE_WIDTH` columns, indexed
//! `(row, col)` = `(y, x)` like an image.

use nalgebra::DMatrix;

use super::{normal_sample, seeded_rng};
use rand::Rng;

/// Image height in pixels
pub const IMAGE_HEIGHT: usize = 120;

/// Image width in pixels
pub const IMAGE_WIDTH: usize = 220;

const PEDESTAL: f64 = 210.0;
const BUMP_AMPLITUDE: f64 = 40.0;
const BUMP_CENTER_X: f64 = 0.45;
const BUMP_CENTER_Y: f64 = 0.40;
const BUMP_WIDTH: f64 = 0.35;

const FPN_STD: f64 = 1.2;
const FPN_UNIFORM_SPAN: f64 = 0.6;
const TEMPORAL_STD: f64 = 0.8;

/// Smooth average image of size `height x width`
///
/// `210 + 40 exp(-((x - 0.45 W)^2 + (y - 0.40 H)^2) / (2 (0.35 min(H, W))^2))`
pub fn average_image(height: usize, width: usize) -> DMatrix<f64> {
    let cx = width as f64 * BUMP_CENTER_X;
    let cy = height as f64 * BUMP_CENTER_Y;
    let sigma = BUMP_WIDTH * height.min(width) as f64;
    let denom = 2.0 * sigma * sigma;

    DMatrix::from_fn(height, width, |row, col| {
        let dx = col as f64 - cx;
        let dy = row as f64 - cy;
        PEDESTAL + BUMP_AMPLITUDE * (-(dx * dx + dy * dy) / denom).exp()
    })
}

/// Spatial noise decomposition of one synthetic frame
#[derive(Debug, Clone)]
pub struct SpatialNoise {
    /// Noise-free average image
    pub average: DMatrix<f64>,

    /// True fixed-pattern offset per pixel
    pub fixed_pattern: DMatrix<f64>,

    /// Reference frame: average + fixed pattern + temporal noise
    pub reference: DMatrix<f64>,

    /// Recovered fixed-pattern estimate: reference - average
    pub estimate: DMatrix<f64>,
}

impl SpatialNoise {
    /// Synthesize the standard 120 x 220 example from `seed`
    pub fn generate(seed: u64) -> Self {
        Self::with_size(seed, IMAGE_HEIGHT, IMAGE_WIDTH)
    }

    /// Synthesize a `height x width` example from `seed`
    ///
    /// Random fields are drawn in a fixed order (fixed-pattern normal, uniform,
    /// temporal normal), each in row-major order.
    pub fn with_size(seed: u64, height: usize, width: usize) -> Self {
        let mut rng = seeded_rng(seed);
        let average = average_image(height, width);

        let gaussian = row_major(height, width, || normal_sample(&mut rng, 0.0, FPN_STD));
        let uniform = row_major(height, width, || rng.random::<f64>());
        let fixed_pattern = gaussian.zip_map(&uniform, |g, u| g + (u - 0.5) * FPN_UNIFORM_SPAN);

        let temporal = row_major(height, width, || normal_sample(&mut rng, 0.0, TEMPORAL_STD));
        let reference = &average + &fixed_pattern + temporal;
        let estimate = &reference - &average;

        Self { average, fixed_pattern, reference, estimate }
    }

    /// `(rows, cols)` shared by every matrix of the decomposition
    pub fn shape(&self) -> (usize, usize) {
        self.average.shape()
    }
}

/// Fill a matrix by calling `sample` in row-major order
///
/// `DMatrix::from_fn` visits column-major, which would change the meaning of
/// a seed.
fn row_major(height: usize, width: usize, mut sample: impl FnMut() -> f64) -> DMatrix<f64> {
    let values: Vec<f64> = (0..height * width).map(|_| sample()).collect();
    DMatrix::from_row_slice(height, width, &values)
}
