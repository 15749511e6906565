//! Plot configuration shared across figures
//!
//! Sizes are given the way a report author thinks about them: figure size in
//! inches and font sizes in points. [`Canvas`] turns those into pixels for a
//! given [`OutputFormat`], so the PNG (200 DPI) and the SVG (72 px per inch)
//! of one figure share the same layout at different resolutions.

use plotters::prelude::*;
use plotters::style::FontDesc;

/// Points per inch (typographic)
const POINTS_PER_INCH: f64 = 72.0;

/// File formats a figure can be written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Raster, 200 DPI
    Png,

    /// Vector, 72 px per inch
    Svg,
}

impl OutputFormat {
    /// Raster and vector, the default pair for line figures
    pub const BOTH: &'static [OutputFormat] = &[OutputFormat::Png, OutputFormat::Svg];

    /// Raster only, for image-heavy figures
    pub const RASTER_ONLY: &'static [OutputFormat] = &[OutputFormat::Png];

    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// Pixels per inch used when rasterising / laying out
    pub fn dpi(self) -> f64 {
        match self {
            OutputFormat::Png => 200.0,
            OutputFormat::Svg => POINTS_PER_INCH,
        }
    }
}

/// Pixel geometry of one output file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,

    /// Pixels per typographic point
    pub scale: f64,
}

impl Canvas {
    /// Canvas for a `(width, height)` figure in inches
    pub fn new(figsize: (f64, f64), format: OutputFormat) -> Self {
        let dpi = format.dpi();
        Self {
            width: (figsize.0 * dpi).round() as u32,
            height: (figsize.1 * dpi).round() as u32,
            scale: dpi / POINTS_PER_INCH,
        }
    }

    /// `(width, height)` in pixels, as the backends expect it
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Convert a length in points to whole pixels (at least 1)
    pub fn px(&self, points: f64) -> u32 {
        ((points * self.scale).round() as u32).max(1)
    }

    /// Sans-serif font of `points` size
    pub fn font(&self, points: f64) -> FontDesc<'static> {
        ("sans-serif", points * self.scale).into_font()
    }
}

/// Configuration for customizing plots
///
/// # Fields
///
/// - `figsize`: Figure size in inches
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-series plots
/// - `line_width_pt`: Line thickness in points
/// - `title_pt`, `label_pt`, `tick_pt`: Font sizes in points
///
/// # Example
///
/// ```rust
/// use sensor_figures::output::visualization::PlotConfig;
///
/// let config = PlotConfig::spectrum("Camera spectral response")
///     .with_ylabel("Spectral response (arb. units)");
/// assert_eq!(config.xlabel, "Wavelength (nm)");
/// ```
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Figure size in inches (default: 6 x 4)
    pub figsize: (f64, f64),

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: empty, set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: empty)
    pub ylabel: String,

    /// Line color for single-series plots (default: tab:blue)
    pub line_color: RGBColor,

    /// Line width in points (default: 1.5)
    pub line_width_pt: f64,

    /// Title font size in points (default: 12)
    pub title_pt: f64,

    /// Axis label font size in points (default: 10)
    pub label_pt: f64,

    /// Tick label font size in points (default: 10)
    pub tick_pt: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            figsize: (6.0, 4.0),
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: String::new(),
            line_color: TAB10[0],
            line_width_pt: 1.5,
            title_pt: 12.0,
            label_pt: 10.0,
            tick_pt: 10.0,
        }
    }
}

/// matplotlib's default "tab10" color cycle
pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

impl PlotConfig {
    /// Config for wavelength-axis plots
    ///
    /// Sets xlabel to "Wavelength (nm)"
    pub fn spectrum(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            xlabel: "Wavelength (nm)".to_string(),
            ..Self::default()
        }
    }

    /// Config for frame-indexed time series
    ///
    /// Sets xlabel to "Frame index (time)"
    pub fn time_series(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            xlabel: "Frame index (time)".to_string(),
            ..Self::default()
        }
    }

    /// Builder pattern: set the y-axis label
    pub fn with_ylabel(mut self, ylabel: impl Into<String>) -> Self {
        self.ylabel = ylabel.into();
        self
    }

    /// Builder pattern: set the x-axis label
    pub fn with_xlabel(mut self, xlabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self
    }

    /// Builder pattern: set the figure size in inches
    pub fn with_figsize(mut self, width: f64, height: f64) -> Self {
        self.figsize = (width, height);
        self
    }
}

/// Color of series `index` in the tab10 cycle, wrapping after ten series
pub fn series_color(index: usize) -> RGBColor {
    TAB10[index % TAB10.len()]
}

// =================================================================================================
// Tests
// =================================================================================================
