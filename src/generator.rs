//! Driver running every report figure
//!
//! Each routine builds one figure and renders it into
//! [`ReportPaths::out_dir`]. The routines share nothing but the paths, so any
//! of them can be called alone. [`FigureGenerator::generate_all`] runs them in
//! report order and stops at the first error.

use std::error::Error;

use crate::figures::{
    render, AverageSurface, BenchSchematic, InterferenceConcept, PixelHistogram, RenderedFigure,
    SpatialNoiseMaps, SpectralLinePlot, SpectralSource, TemporalNoise, CAMERA_RESPONSE,
    POWER_VS_WAVELENGTH,
};
use crate::paths::ReportPaths;

/// Renders the report figures into one output directory
#[derive(Debug, Clone, Default)]
pub struct FigureGenerator {
    pub paths: ReportPaths,
}

impl FigureGenerator {
    pub fn new(paths: ReportPaths) -> Self {
        Self { paths }
    }

    /// Figure 1: block diagram of the measurement bench
    pub fn measurement_bench_schematic(&self) -> Result<RenderedFigure, Box<dyn Error>> {
        render(&BenchSchematic, &self.paths.out_dir)
    }

    /// Figure 2: first- and second-order spectral peaks
    pub fn second_order_interference_concept(&self) -> Result<RenderedFigure, Box<dyn Error>> {
        render(&InterferenceConcept::default(), &self.paths.out_dir)
    }

    /// Figure 3: histogram of synthetic 8-bit pixel values
    pub fn histogram_example(&self, seed: Option<u64>) -> Result<RenderedFigure, Box<dyn Error>> {
        render(&PixelHistogram::new(seed), &self.paths.out_dir)
    }

    /// Figure 4: spectral power from `spectral_power_detector_example.csv`
    ///
    /// # Errors
    ///
    /// A missing or malformed table is returned as a
    /// [`TableError`](crate::table::TableError) before any file is written.
    pub fn power_vs_wavelength(&self) -> Result<RenderedFigure, Box<dyn Error>> {
        self.spectral(&POWER_VS_WAVELENGTH)
    }

    /// Figure 5: camera response from `spectral_camera_response_example.csv`
    ///
    /// # Errors
    ///
    /// Same as [`power_vs_wavelength`](Self::power_vs_wavelength).
    pub fn camera_response(&self) -> Result<RenderedFigure, Box<dyn Error>> {
        self.spectral(&CAMERA_RESPONSE)
    }

    /// Figure 6: one pixel over 100 frames
    pub fn temporal_noise_example(
        &self,
        seed: Option<u64>,
    ) -> Result<RenderedFigure, Box<dyn Error>> {
        render(&TemporalNoise::new(seed), &self.paths.out_dir)
    }

    /// Figure 7: average image and fixed-pattern estimate (PNG only)
    pub fn spatial_noise_example(
        &self,
        seed: Option<u64>,
    ) -> Result<RenderedFigure, Box<dyn Error>> {
        render(&SpatialNoiseMaps::new(seed), &self.paths.out_dir)
    }

    /// Figure 8: 3D surface of the average image (PNG only)
    pub fn average_3d_example(&self, seed: Option<u64>) -> Result<RenderedFigure, Box<dyn Error>> {
        render(&AverageSurface::new(seed), &self.paths.out_dir)
    }

    /// Run figures 1 to 8 in order with the default seed
    pub fn generate_all(&self) -> Result<Vec<RenderedFigure>, Box<dyn Error>> {
        log::info!("Writing figures to {}", self.paths.out_dir.display());

        let rendered = vec![
            self.measurement_bench_schematic()?,
            self.second_order_interference_concept()?,
            self.histogram_example(None)?,
            self.power_vs_wavelength()?,
            self.camera_response()?,
            self.temporal_noise_example(None)?,
            self.spatial_noise_example(None)?,
            self.average_3d_example(None)?,
        ];

        let files: usize = rendered.iter().map(|r| r.files.len()).sum();
        log::info!("Done: {} figures, {} files", rendered.len(), files);

        Ok(rendered)
    }

    fn spectral(&self, source: &SpectralSource) -> Result<RenderedFigure, Box<dyn Error>> {
        let figure = SpectralLinePlot::load(source, &self.paths.data_dir)?;
        log::debug!("{}: {} rows from {}", source.stem, figure.table.len(), source.file_name);
        render(&figure, &self.paths.out_dir)
    }
}
