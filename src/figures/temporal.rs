//! Figure 6: temporal noise of one pixel

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::Figure;
use crate::output::visualization::{cartesian_axes, data_range, Canvas, PlotConfig};
use crate::synthetic::{temporal_noise_trace, DEFAULT_SEED};

/// One pixel observed over 100 frames
#[derive(Debug, Clone)]
pub struct TemporalNoise {
    pub frames: Vec<f64>,
    pub values: Vec<f64>,
    pub config: PlotConfig,
}

impl TemporalNoise {
    pub fn new(seed: Option<u64>) -> Self {
        let (frames, values) = temporal_noise_trace(seed.unwrap_or(DEFAULT_SEED));
        let config = PlotConfig::time_series("Temporal noise: one pixel over time (example)")
            .with_ylabel("Pixel value (DN)");

        Self { frames, values, config }
    }
}

impl Figure for TemporalNoise {
    fn stem(&self) -> &str {
        "fig6_temporal_noise"
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
        let mut chart = cartesian_axes(
            root,
            canvas,
            &self.config,
            data_range(self.frames.iter().copied()),
            data_range(self.values.iter().copied()),
        )?;

        chart.draw_series(LineSeries::new(
            self.frames.iter().copied().zip(self.values.iter().copied()),
            self.config.line_color.stroke_width(canvas.px(self.config.line_width_pt)),
        ))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_matches_zero() {
        assert_eq!(TemporalNoise::new(None).values, TemporalNoise::new(Some(0)).values);
    }

    #[test]
    fn test_labels() {
        let fig = TemporalNoise::new(None);
        assert_eq!(fig.config.xlabel, "Frame index (time)");
        assert_eq!(fig.config.ylabel, "Pixel value (DN)");
        assert_eq!(fig.frames.len(), 100);
    }
}
