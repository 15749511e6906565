//! Figure 3: typical 8-bit image histogram
//!
//! 20 000 clipped Gaussian pixel values binned into 50 equal bins spanning the
//! sample range.

use std::error::Error;
use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::Figure;
use crate::output::visualization::{cartesian_axes, Canvas, PlotConfig};
use crate::synthetic::{clipped_gaussian_pixels, DEFAULT_SEED, HISTOGRAM_SAMPLES};

/// Number of histogram bins
pub const HISTOGRAM_BINS: usize = 50;

/// Equal-width histogram over a closed range
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` bin edges, ascending
    pub edges: Vec<f64>,

    /// Count per bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Total number of counted samples
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `[left, right)` edges of bin `i` (the last bin is closed)
    pub fn bin(&self, i: usize) -> Range<f64> {
        self.edges[i]..self.edges[i + 1]
    }
}

/// Bin `samples` into `bins` equal bins over `[min, max]` of the samples
///
/// Every bin is half-open except the last, which includes `max`, so every
/// finite sample is counted exactly once. A constant sample set uses the
/// window `[v - 0.5, v + 0.5]`.
pub fn bin_counts(samples: &[f64], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let (mut lo, mut hi) = samples
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if !lo.is_finite() {
        lo = 0.0;
        hi = 1.0;
    } else if hi <= lo {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for &v in samples.iter().filter(|v| v.is_finite()) {
        let index = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[index] += 1;
    }

    Histogram { edges, counts }
}

/// Histogram of synthetic 8-bit pixel values
#[derive(Debug, Clone)]
pub struct PixelHistogram {
    pub histogram: Histogram,
    pub config: PlotConfig,
}

impl PixelHistogram {
    /// Draw the samples for `seed` (default 0) and bin them
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let pixels = clipped_gaussian_pixels(seed, HISTOGRAM_SAMPLES);
        let histogram = bin_counts(&pixels, HISTOGRAM_BINS);

        log::debug!(
            "Histogram (seed {}): {} samples over [{:.1}, {:.1}]",
            seed,
            histogram.total(),
            histogram.edges[0],
            histogram.edges[HISTOGRAM_BINS]
        );

        let mut config = PlotConfig::default()
            .with_xlabel("Pixel value (8-bit)")
            .with_ylabel("Count");
        config.title = "Typical image histogram (example)".to_string();

        Self { histogram, config }
    }
}

impl Figure for PixelHistogram {
    fn stem(&self) -> &str {
        "fig3_histogram"
    }

    fn figsize(&self) -> (f64, f64) {
        self.config.figsize
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        canvas: &Canvas,
    ) -> Result<(), Box<dyn Error>>
    where
        DB::ErrorType: 'static,
    {
        let hist = &self.histogram;
        let (x_min, x_max) = (hist.edges[0], hist.edges[hist.edges.len() - 1]);
        let x_pad = 0.05 * (x_max - x_min);
        let y_max = hist.counts.iter().copied().max().unwrap_or(1).max(1) as f64;

        let mut chart = cartesian_axes(
            root,
            canvas,
            &self.config,
            (x_min - x_pad)..(x_max + x_pad),
            0.0..(1.05 * y_max),
        )?;

        let fill = self.config.line_color.filled();
        chart.draw_series((0..hist.counts.len()).map(|i| {
            let bin = hist.bin(i);
            Rectangle::new([(bin.start, 0.0), (bin.end, hist.counts[i] as f64)], fill)
        }))?;

        Ok(())
    }
}
