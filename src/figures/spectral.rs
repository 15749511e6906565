//! Figures 4 and 5: measured spectral curves
//!
//! Both read a two-column CSV (wavelength against a measured quantity) and
//! draw a marker-connected line. The table is loaded when the figure is
//! built, so a missing file or column fails before anything is written.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::Figure;
use crate::output::visualization::{cartesian_axes, data_range, Canvas, PlotConfig};
use crate::table::{SpectralTable, TableError};

const MARKER_RADIUS_PT: f64 = 3.0;

/// Fixed description of one measured-data figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectralSource {
    pub stem: &'static str,
    pub file_name: &'static str,
    pub x_column: &'static str,
    pub y_column: &'static str,
    pub ylabel: &'static str,
    pub title: &'static str,
}

/// Power at the integrating sphere output, from the calibrated detector
pub const POWER_VS_WAVELENGTH: SpectralSource = SpectralSource {
    stem: "fig4_power_vs_wavelength",
    file_name: "spectral_power_detector_example.csv",
    x_column: "wavelength_nm",
    y_column: "power_W",
    ylabel: "Power (W)",
    title: "Spectral power at integrating sphere output",
};

/// Camera response to the monochromator sweep
pub const CAMERA_RESPONSE: SpectralSource = SpectralSource {
    stem: "fig5_camera_response",
    file_name: "spectral_camera_response_example.csv",
    x_column: "wavelength_nm",
    y_column: "camera_response_arb",
    ylabel: "Spectral response (arb. units)",
    title: "Camera spectral response",
};

/// Marker-connected line plot of a [`SpectralTable`]
#[derive(Debug, Clone)]
pub struct SpectralLinePlot {
    pub stem: &'static str,
    pub table: SpectralTable,
    pub config: PlotConfig,
}

impl SpectralLinePlot {
    /// Load `source` from `data_dir`
    ///
    /// # Errors
    ///
    /// Propagates [`TableError`] if the file is missing or malformed.
    pub fn load(source: &SpectralSource, data_dir: &Path) -> Result<Self, TableError> {
        let table = SpectralTable::from_csv(
            data_dir.join(source.file_name),
            source.x_column,
            source.y_column,
        )?;
        Ok(Self::from_table(source, table))
    }

    /// Build the figure from an already loaded table
    pub fn from_table(source: &SpectralSource, table: SpectralTable) -> Self {
        Self {
            stem: source.stem,
            table,
            config: PlotConfig::spectrum(source.title).with_ylabel(source.ylabel),
        }
    }

    /// Points drawn, in file order
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.table.points()
    }
}

impl Figure for SpectralLinePlot {
    fn stem(&self) -> &str {
        self.stem
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
        let points = self.points();
        let x_range = data_range(self.table.x.iter().copied());
        let y_range = data_range(self.table.y.iter().copied());

        let mut chart = cartesian_axes(root, canvas, &self.config, x_range, y_range)?;

        let color = self.config.line_color;
        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            color.stroke_width(canvas.px(self.config.line_width_pt)),
        ))?;

        let radius = canvas.px(MARKER_RADIUS_PT);
        chart.draw_series(points.iter().map(|&p| Circle::new(p, radius, color.filled())))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(x: Vec<f64>, y: Vec<f64>) -> SpectralTable {
        SpectralTable {
            x_column: "wavelength_nm".to_string(),
            y_column: "power_W".to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_points_follow_table_order() {
        let fig = SpectralLinePlot::from_table(
            &POWER_VS_WAVELENGTH,
            table(vec![700.0, 400.0, 550.0], vec![3.0, 1.0, 2.0]),
        );
        assert_eq!(fig.points(), vec![(700.0, 3.0), (400.0, 1.0), (550.0, 2.0)]);
    }

    #[test]
    fn test_config_from_source() {
        let fig = SpectralLinePlot::from_table(&CAMERA_RESPONSE, table(vec![1.0], vec![2.0]));
        assert_eq!(fig.stem(), "fig5_camera_response");
        assert_eq!(fig.config.xlabel, "Wavelength (nm)");
        assert_eq!(fig.config.ylabel, "Spectral response (arb. units)");
        assert_eq!(fig.config.title, "Camera spectral response");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SpectralLinePlot::load(&POWER_VS_WAVELENGTH, Path::new("/nonexistent")).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }
}
