//! Figure 2: second-order diffraction/interference (conceptual)
//!
//! Three first-order colour peaks and, dashed, their weaker second-order
//! replicas at twice the wavelength. Illustrates why a monochromator needs an
//! order-sorting filter.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::Figure;
use crate::output::visualization::{
    cartesian_axes, draw_legend_grid, series_color, Canvas, LegendEntry, PlotConfig,
};
use crate::synthetic::{GaussianPeak, PeakOrder, FIRST_ORDER_PEAKS, PEAK_SAMPLES, SECOND_ORDER_PEAKS};

const X_LIMITS: (f64, f64) = (380.0, 1400.0);
const LEGEND_COLUMNS: usize = 3;
const LEGEND_FONT_PT: f64 = 7.0;

/// Conceptual first/second-order spectral overlay
#[derive(Debug, Clone)]
pub struct InterferenceConcept {
    pub peaks: Vec<GaussianPeak>,
    pub config: PlotConfig,
}

impl Default for InterferenceConcept {
    fn default() -> Self {
        let config = PlotConfig::spectrum("Second-order diffraction/interference (conceptual)")
            .with_ylabel("Relative intensity (arb.)")
            .with_figsize(7.0, 3.6);

        let peaks = FIRST_ORDER_PEAKS
            .iter()
            .chain(SECOND_ORDER_PEAKS.iter())
            .copied()
            .collect();

        Self { peaks, config }
    }
}

impl InterferenceConcept {
    /// Sampled curves, one per peak, in legend order
    pub fn curves(&self) -> Vec<Vec<(f64, f64)>> {
        self.peaks.iter().map(|p| p.sample(PEAK_SAMPLES)).collect()
    }

    fn legend_entries(&self) -> Vec<LegendEntry> {
        self.peaks
            .iter()
            .enumerate()
            .map(|(i, peak)| LegendEntry {
                label: peak.label.to_string(),
                color: series_color(i),
                dashed: peak.order == PeakOrder::Second,
            })
            .collect()
    }
}

impl Figure for InterferenceConcept {
    fn stem(&self) -> &str {
        "fig2_second_order_interference_concept"
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
        let y_max = self.peaks.iter().map(|p| p.amplitude).fold(0.0, f64::max);
        // Headroom for the legend above the tallest peak
        let y_range = (-0.05 * y_max)..(1.35 * y_max);

        let mut chart =
            cartesian_axes(root, canvas, &self.config, X_LIMITS.0..X_LIMITS.1, y_range)?;

        let width = canvas.px(self.config.line_width_pt);
        for (i, (peak, curve)) in self.peaks.iter().zip(self.curves()).enumerate() {
            let style = series_color(i).stroke_width(width);
            match peak.order {
                PeakOrder::First => {
                    chart.draw_series(LineSeries::new(curve, style))?;
                }
                PeakOrder::Second => {
                    let dash = canvas.px(3.7 * self.config.line_width_pt);
                    let gap = canvas.px(1.6 * self.config.line_width_pt);
                    chart.draw_series(DashedLineSeries::new(curve, dash, gap, style))?;
                }
            }
        }

        // Legend anchored to the upper-right corner of the plotting area
        let (x_pixels, y_pixels) = chart.plotting_area().get_pixel_range();
        let base = root.get_base_pixel();
        let inset = canvas.px(6.0) as i32;
        let top_right = (x_pixels.end - base.0 - inset, y_pixels.start - base.1 + inset);

        draw_legend_grid(
            root,
            top_right,
            &self.legend_entries(),
            LEGEND_COLUMNS,
            canvas,
            LEGEND_FONT_PT,
            self.config.line_width_pt,
        )?;

        Ok(())
    }
}
