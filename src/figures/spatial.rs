//! Figure 7: spatial noise maps
//!
//! Left: the average image. Right: the fixed-pattern estimate obtained by
//! subtracting it from a reference frame. Raster only, since a per-pixel
//! vector rendering would be tens of thousands of rectangles.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::Figure;
use crate::output::visualization::{draw_grayscale_panel, Canvas, OutputFormat};
use crate::synthetic::{SpatialNoise, DEFAULT_SEED};

const TITLE_PT: f64 = 12.0;
const TICK_PT: f64 = 9.0;

/// Average image and fixed-pattern estimate side by side
#[derive(Debug, Clone)]
pub struct SpatialNoiseMaps {
    pub noise: SpatialNoise,
}

impl SpatialNoiseMaps {
    pub fn new(seed: Option<u64>) -> Self {
        let noise = SpatialNoise::generate(seed.unwrap_or(DEFAULT_SEED));
        log::debug!(
            "Spatial noise: {:?} px, estimate in [{:.2}, {:.2}]",
            noise.shape(),
            noise.estimate.min(),
            noise.estimate.max()
        );
        Self { noise }
    }
}

impl Figure for SpatialNoiseMaps {
    fn stem(&self) -> &str {
        "fig7_spatial_noise"
    }

    fn figsize(&self) -> (f64, f64) {
        (8.0, 3.0)
    }

    fn formats(&self) -> &'static [OutputFormat] {
        OutputFormat::RASTER_ONLY
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        canvas: &Canvas,
    ) -> Result<(), Box<dyn Error>>
    where
        DB::ErrorType: 'static,
    {
        let panels = root.split_evenly((1, 2));

        draw_grayscale_panel(
            &panels[0],
            &self.noise.average,
            "Average image (example)",
            canvas,
            TITLE_PT,
            TICK_PT,
        )?;
        draw_grayscale_panel(
            &panels[1],
            &self.noise.estimate,
            "Fixed-pattern noise (example)",
            canvas,
            TITLE_PT,
            TICK_PT,
        )?;

        Ok(())
    }
}
