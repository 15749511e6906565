//! Figure 1: measurement bench schematic
//!
//! Light source → monochromator → integrating sphere → sensor under test, with
//! a calibrated detector tapping the sphere. Pure vector drawing on a unit
//! square, no axes.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::Figure;
use crate::output::visualization::{draw_arrow, draw_labeled_box, Canvas};

const FONT_PT: f64 = 10.0;
const BOX_LINE_PT: f64 = 1.5;
const ARROW_SCALE_PT: f64 = 12.0;

/// A labelled box: lower-left corner, size, text (all normalized)
struct BenchComponent {
    origin: (f64, f64),
    size: (f64, f64),
    label: &'static str,
}

const COMPONENTS: [BenchComponent; 5] = [
    BenchComponent { origin: (0.02, 0.35), size: (0.18, 0.3), label: "Light source" },
    BenchComponent { origin: (0.26, 0.35), size: (0.18, 0.3), label: "Monochromator" },
    BenchComponent { origin: (0.50, 0.35), size: (0.18, 0.3), label: "Integrating\nsphere" },
    BenchComponent { origin: (0.74, 0.35), size: (0.22, 0.3), label: "Sensor under test\n(camera)" },
    BenchComponent { origin: (0.52, 0.05), size: (0.18, 0.22), label: "Calibrated\ndetector" },
];

/// Arrows along the optical path: (from, to, line width in points)
const ARROWS: [((f64, f64), (f64, f64), f64); 4] = [
    ((0.20, 0.50), (0.26, 0.50), 1.5),
    ((0.44, 0.50), (0.50, 0.50), 1.5),
    ((0.68, 0.50), (0.74, 0.50), 1.5),
    // Sphere down to the calibrated detector
    ((0.59, 0.35), (0.59, 0.27), 1.2),
];

/// Optical bench schematic
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchSchematic;

impl Figure for BenchSchematic {
    fn stem(&self) -> &str {
        "fig1_measurement_bench_schematic"
    }

    fn figsize(&self) -> (f64, f64) {
        (9.0, 2.2)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        canvas: &Canvas,
    ) -> Result<(), Box<dyn Error>>
    where
        DB::ErrorType: 'static,
    {
        let mut chart = ChartBuilder::on(root)
            .margin(canvas.px(4.0))
            .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

        for component in &COMPONENTS {
            draw_labeled_box(
                &mut chart,
                component.origin,
                component.size,
                component.label,
                canvas,
                FONT_PT,
                BOX_LINE_PT,
            )?;
        }

        for &(from, to, width_pt) in &ARROWS {
            draw_arrow(&mut chart, from, to, canvas, width_pt, ARROW_SCALE_PT)?;
        }

        log::debug!("Schematic: {} components, {} arrows", COMPONENTS.len(), ARROWS.len());
        Ok(())
    }
}
