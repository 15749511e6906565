//! Visualization building blocks for the report figures
//!
//! This module wraps the `plotters` library with the few primitives the
//! figures share.
//!
//! # Organization
//!
//! - **config**: Figure geometry and cosmetics (`PlotConfig`, `Canvas`, `OutputFormat`)
//! - **elements**: Axes, schematic boxes and arrows, multi-column legends
//! - **image**: Grayscale image panels with colorbars
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sensor_figures::output::visualization::{cartesian_axes, data_range, Canvas, OutputFormat, PlotConfig};
//!
//! let config = PlotConfig::time_series("Temporal noise").with_ylabel("Pixel value (DN)");
//! let canvas = Canvas::new(config.figsize, OutputFormat::Png);
//! let mut chart = cartesian_axes(&root, &canvas, &config, data_range(xs), data_range(ys))?;
//! chart.draw_series(LineSeries::new(points, config.line_color.stroke_width(canvas.px(1.5))))?;
//! ```

pub mod config;
pub mod elements;
pub mod image;

pub use config::{series_color, Canvas, OutputFormat, PlotConfig, TAB10};

pub use elements::{
    cartesian_axes, data_range, draw_arrow, draw_labeled_box, draw_legend_grid, format_tick,
    Chart2d, LegendEntry,
};

pub use image::{draw_grayscale_panel, grayscale, normalize};
