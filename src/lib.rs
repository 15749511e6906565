//! sensor-figures: report figures for camera sensor characterisation
//!
//! Renders the eight figures of a measurement report (bench schematic,
//! spectral curves, noise plots) as PNG and, where a vector version makes
//! sense, SVG. Data is either synthesized from a seeded generator or read
//! from small two-column CSV tables.
//!
//! # Architecture
//!
//! The crate keeps data and drawing apart:
//!
//! 1. **Data**
//!    - [`synthetic`] produces deterministic arrays for a given seed
//!    - [`table`] loads measured curves from CSV
//!
//! 2. **Drawing**
//!    - [`figures`] turns data into one [`Figure`](figures::Figure) per report figure
//!    - [`output`] holds the shared plot configuration and drawing helpers
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sensor_figures::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = FigureGenerator::new(ReportPaths::new("data", "figures/remade"));
//!
//! // One figure
//! let histogram = generator.histogram_example(Some(42))?;
//! println!("{:?}", histogram.files);
//!
//! // All eight, in report order
//! let all = generator.generate_all()?;
//! assert_eq!(all.len(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`figures`]: the figures and the [`render`](figures::render) entry point
//! - [`generator`]: one routine per figure plus `generate_all`
//! - [`synthetic`]: seeded sample data
//! - [`table`]: CSV input
//! - [`output`]: plot configuration and drawing helpers
//! - [`paths`]: input and output directories

pub mod figures;
pub mod generator;
pub mod output;
pub mod paths;
pub mod synthetic;
pub mod table;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use sensor_figures::prelude::*;
    //! ```
    pub use crate::figures::{render, Figure, RenderedFigure};
    pub use crate::generator::FigureGenerator;
    pub use crate::output::{Canvas, OutputFormat, PlotConfig};
    pub use crate::paths::ReportPaths;
    pub use crate::synthetic::DEFAULT_SEED;
    pub use crate::table::{SpectralTable, TableError};
}
