//! Report figures
//!
//! Every figure implements [`Figure`]: it knows its file stem, its size in
//! inches, which formats it is saved in, and how to draw itself on any
//! `plotters` backend. [`render`] does the rest: one drawing surface per
//! format, presented and dropped before the next one is created.
//!
//! # Available Figures
//!
//! | Stem | Type | Data | Formats |
//! |------|------|------|---------|
//! | `fig1_measurement_bench_schematic` | [`BenchSchematic`] | none | PNG + SVG |
//! | `fig2_second_order_interference_concept` | [`InterferenceConcept`] | analytic | PNG + SVG |
//! | `fig3_histogram` | [`PixelHistogram`] | seeded | PNG + SVG |
//! | `fig4_power_vs_wavelength` | [`SpectralLinePlot`] | CSV | PNG + SVG |
//! | `fig5_camera_response` | [`SpectralLinePlot`] | CSV | PNG + SVG |
//! | `fig6_temporal_noise` | [`TemporalNoise`] | seeded | PNG + SVG |
//! | `fig7_spatial_noise` | [`SpatialNoiseMaps`] | seeded | PNG |
//! | `fig8_average_3d` | [`AverageSurface`] | analytic | PNG |

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::output::visualization::{Canvas, OutputFormat};

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod histogram;
pub mod interference;
pub mod schematic;
pub mod spatial;
pub mod spectral;
pub mod surface;
pub mod temporal;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use histogram::{bin_counts, Histogram, PixelHistogram};
pub use interference::InterferenceConcept;
pub use schematic::BenchSchematic;
pub use spatial::SpatialNoiseMaps;
pub use spectral::{SpectralLinePlot, SpectralSource, CAMERA_RESPONSE, POWER_VS_WAVELENGTH};
pub use surface::AverageSurface;
pub use temporal::TemporalNoise;

// =================================================================================================
// Figure Trait
// =================================================================================================

/// A figure that can be drawn on any backend
pub trait Figure {
    /// Base file name shared by all outputs of this figure
    fn stem(&self) -> &str;

    /// Figure size in inches `(width, height)`
    fn figsize(&self) -> (f64, f64);

    /// Formats to write, PNG and SVG unless overridden
    fn formats(&self) -> &'static [OutputFormat] {
        OutputFormat::BOTH
    }

    /// Draw the figure on an already cleared `root`
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        canvas: &Canvas,
    ) -> Result<(), Box<dyn Error>>
    where
        DB::ErrorType: 'static;
}

/// Files written for one figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFigure {
    pub stem: String,
    pub files: Vec<PathBuf>,
}

/// Write `figure` into `out_dir` in each of its formats
///
/// Creates `out_dir` if needed and overwrites existing files of the same
/// name.
///
/// # Errors
///
/// Returns error if the directory or a file cannot be written, or if drawing
/// fails.
pub fn render<F: Figure>(figure: &F, out_dir: &Path) -> Result<RenderedFigure, Box<dyn Error>> {
    fs::create_dir_all(out_dir)?;

    let mut files = Vec::with_capacity(figure.formats().len());
    for &format in figure.formats() {
        let path = out_dir.join(format!("{}.{}", figure.stem(), format.extension()));
        let canvas = Canvas::new(figure.figsize(), format);

        render_to(figure, &path, format, &canvas)?;

        log::info!("Saved {} ({}x{} px)", path.display(), canvas.width, canvas.height);
        files.push(path);
    }

    Ok(RenderedFigure {
        stem: figure.stem().to_string(),
        files,
    })
}

/// Draw `figure` into one file; the drawing surface is dropped on return
fn render_to<F: Figure>(
    figure: &F,
    path: &Path,
    format: OutputFormat,
    canvas: &Canvas,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(path, canvas.size()).into_drawing_area();
            root.fill(&WHITE)?;
            figure.draw(&root, canvas)?;
            root.present()?;
        }
        OutputFormat::Png => {
            let root = BitMapBackend::new(path, canvas.size()).into_drawing_area();
            root.fill(&WHITE)?;
            figure.draw(&root, canvas)?;
            root.present()?;
        }
    }

    Ok(())
}
