//! Figure 8: 3D view of the average image

use std::error::Error;

use nalgebra::DMatrix;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::Figure;
use crate::output::visualization::{data_range, normalize, Canvas, OutputFormat};
use crate::synthetic::{average_image, linspace, IMAGE_HEIGHT, IMAGE_WIDTH};

/// Every `SURFACE_STRIDE`-th row and column is drawn
pub const SURFACE_STRIDE: usize = 2;

const TITLE: &str = "3D view of the average image (example)";
const TITLE_PT: f64 = 12.0;
const LABEL_PT: f64 = 10.0;
const TICK_PT: f64 = 8.0;

/// Axis title anchors in `(x, intensity, y)` chart coordinates. The floor
/// height is filled in at draw time; `y = 1` is the edge facing the viewer.
const X_TITLE_AT: (f64, f64) = (0.5, 1.2);
const Y_TITLE_AT: (f64, f64) = (1.15, 0.5);

/// Strided samples of an image on the unit square
///
/// This is exactly what the surface series is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,

    /// `values[j][i]` is the intensity at `(xs[i], ys[j])`
    pub values: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    /// Intensity at the sample nearest to `(x, y)`
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        self.values[nearest_index(&self.ys, y)][nearest_index(&self.xs, x)]
    }
}

/// Index of the entry of ascending `axis` closest to `v`
fn nearest_index(axis: &[f64], v: f64) -> usize {
    let last = axis.len().saturating_sub(1);
    match axis.partition_point(|&a| a < v) {
        0 => 0,
        i if i > last => last,
        i if axis[i] - v <= v - axis[i - 1] => i,
        i => i - 1,
    }
}

/// Surface plot of the noise-free average image over `x, y in [0, 1]`
#[derive(Debug, Clone)]
pub struct AverageSurface {
    pub image: DMatrix<f64>,
}

impl AverageSurface {
    /// The average image has no random component, so `_seed` is not used.
    pub fn new(_seed: Option<u64>) -> Self {
        Self {
            image: average_image(IMAGE_HEIGHT, IMAGE_WIDTH),
        }
    }

    /// Every [`SURFACE_STRIDE`]-th row and column of the image
    pub fn grid(&self) -> SurfaceGrid {
        let (rows, cols) = self.image.shape();
        let all_x = linspace(0.0, 1.0, cols);
        let all_y = linspace(0.0, 1.0, rows);

        let col_idx: Vec<usize> = (0..cols).step_by(SURFACE_STRIDE).collect();
        let row_idx: Vec<usize> = (0..rows).step_by(SURFACE_STRIDE).collect();

        SurfaceGrid {
            xs: col_idx.iter().map(|&c| all_x[c]).collect(),
            ys: row_idx.iter().map(|&r| all_y[r]).collect(),
            values: row_idx
                .iter()
                .map(|&r| col_idx.iter().map(|&c| self.image[(r, c)]).collect())
                .collect(),
        }
    }
}

impl Figure for AverageSurface {
    fn stem(&self) -> &str {
        "fig8_average_3d"
    }

    fn figsize(&self) -> (f64, f64) {
        (6.0, 4.5)
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
        let (lo, hi) = (self.image.min(), self.image.max());
        let z_range = data_range([lo, hi]);

        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, canvas.font(TITLE_PT))
            .margin(canvas.px(8.0))
            .build_cartesian_3d(0.0..1.0, z_range.clone(), 0.0..1.0)?;

        chart.with_projection(|mut p| {
            p.yaw = 0.7;
            p.pitch = 0.45;
            p.scale = 0.8;
            p.into_matrix()
        });

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.1))
            .max_light_lines(3)
            .label_style(canvas.font(TICK_PT))
            .draw()?;

        // Plotters puts the vertical axis second, so image y maps to depth.
        let grid = self.grid();
        let color_of = |v: &f64| -> ShapeStyle {
            let t = normalize(*v, lo, hi);
            HSLColor(0.7 - 0.55 * t, 0.7, 0.35 + 0.25 * t).filled()
        };

        chart.draw_series(
            SurfaceSeries::xoz(
                grid.xs.iter().copied(),
                grid.ys.iter().copied(),
                |x, y| grid.value_at(x, y),
            )
            .style_func(&color_of),
        )?;

        let label_font = canvas.font(LABEL_PT);
        let floor = z_range.start;
        chart.draw_series([
            Text::new("x", (X_TITLE_AT.0, floor, X_TITLE_AT.1), label_font.clone()),
            Text::new("y", (Y_TITLE_AT.0, floor, Y_TITLE_AT.1), label_font.clone()),
            Text::new("Intensity (DN)", (-0.1, z_range.end, -0.1), label_font),
        ])?;

        Ok(())
    }
}
