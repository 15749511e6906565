//! Drawing helpers shared by the figures
//!
//! - [`cartesian_axes`]: titled, labelled 2-D axes from a [`PlotConfig`]
//! - [`draw_labeled_box`] / [`draw_arrow`]: schematic primitives in data coordinates
//! - [`draw_legend_grid`]: frameless multi-column legend
//! - [`data_range`]: axis limits with a 5 % margin

use std::error::Error;
use std::ops::Range;

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::config::{Canvas, PlotConfig};

/// Plain 2-D chart over `f64` axes
pub type Chart2d<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Axis margin on each side, as a fraction of the data span
const AXIS_MARGIN: f64 = 0.05;

// =================================================================================================
// Axes
// =================================================================================================

/// Build titled axes on `root` with labels and tick fonts from `config`
///
/// The caller draws series onto the returned chart. No grid lines are drawn
/// and tick labels go through [`format_tick`].
pub fn cartesian_axes<'a, DB: DrawingBackend>(
    root: &'a DrawingArea<DB, Shift>,
    canvas: &Canvas,
    config: &PlotConfig,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<Chart2d<'a, DB>, Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, canvas.font(config.title_pt))
        .margin(canvas.px(8.0))
        .margin_right(canvas.px(16.0))
        .x_label_area_size(canvas.px(3.2 * config.label_pt))
        .y_label_area_size(canvas.px(5.0 * config.label_pt))
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .axis_desc_style(canvas.font(config.label_pt))
        .label_style(canvas.font(config.tick_pt))
        .x_labels(8)
        .y_labels(6)
        .x_label_formatter(&|v| format_tick(*v))
        .draw()?;

    Ok(chart)
}

/// Compact tick label: whole numbers without decimals, others with at most
/// four, tiny magnitudes in exponent form
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        return format!("{:.0}", v.round() + 0.0);
    }
    if v.abs() < 1e-3 {
        return format!("{:.1e}", v);
    }

    let fixed = format!("{:.4}", v);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Axis limits covering `values` with a 5 % margin on each side
///
/// A constant series gets a unit-wide window around its value; an empty one
/// gets `0..1`.
pub fn data_range<I: IntoIterator<Item = f64>>(values: I) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }

    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        return (min - 0.5)..(max + 0.5);
    }

    (min - AXIS_MARGIN * span)..(max + AXIS_MARGIN * span)
}

// =================================================================================================
// Schematic Primitives
// =================================================================================================

/// Outlined rectangle with centered (possibly multi-line) text
///
/// `origin` is the lower-left corner and `size` the (width, height), both in
/// data coordinates. Lines of `text` are separated by `\n`.
pub fn draw_labeled_box<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    origin: (f64, f64),
    size: (f64, f64),
    text: &str,
    canvas: &Canvas,
    font_pt: f64,
    line_width_pt: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (x, y) = origin;
    let (w, h) = size;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(x, y), (x + w, y + h)],
        BLACK.stroke_width(canvas.px(line_width_pt)),
    )))?;

    let style = TextStyle::from(canvas.font(font_pt)).pos(Pos::new(HPos::Center, VPos::Center));
    let line_height = (1.25 * font_pt * canvas.scale).round() as i32;
    let center = (x + w / 2.0, y + h / 2.0);

    let lines: Vec<&str> = text.lines().collect();
    let n = lines.len() as i32;

    chart.draw_series(lines.iter().enumerate().map(|(i, line)| {
        // Lines stacked symmetrically around the box center
        let dy = (2 * i as i32 - (n - 1)) * line_height / 2;
        EmptyElement::at(center) + Text::new(line.to_string(), (0, dy), style.clone())
    }))?;

    Ok(())
}

/// Straight arrow with an open "->" head at `to`
///
/// `head_scale_pt` plays the role of matplotlib's `mutation_scale`: the head
/// is 0.4 of it long and 0.2 of it wide on each side.
pub fn draw_arrow<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    from: (f64, f64),
    to: (f64, f64),
    canvas: &Canvas,
    line_width_pt: f64,
    head_scale_pt: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let style = BLACK.stroke_width(canvas.px(line_width_pt));

    chart.draw_series(std::iter::once(PathElement::new(vec![from, to], style)))?;

    // Head geometry in pixel space, relative to the tip
    let p0 = chart.backend_coord(&from);
    let p1 = chart.backend_coord(&to);
    let (dx, dy) = ((p1.0 - p0.0) as f64, (p1.1 - p0.1) as f64);
    let length = (dx * dx + dy * dy).sqrt();
    if length < 1.0 {
        return Ok(());
    }

    let (ux, uy) = (dx / length, dy / length);
    let head_length = 0.4 * head_scale_pt * canvas.scale;
    let head_half_width = 0.2 * head_scale_pt * canvas.scale;

    let back = (-ux * head_length, -uy * head_length);
    let left = (
        (back.0 - uy * head_half_width).round() as i32,
        (back.1 + ux * head_half_width).round() as i32,
    );
    let right = (
        (back.0 + uy * head_half_width).round() as i32,
        (back.1 - ux * head_half_width).round() as i32,
    );

    chart.draw_series(std::iter::once(
        EmptyElement::at(to) + PathElement::new(vec![left, (0, 0), right], style),
    ))?;

    Ok(())
}

// =================================================================================================
// Legend
// =================================================================================================

/// One legend row: a line sample and its label
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: RGBColor,
    pub dashed: bool,
}

/// Frameless legend laid out in `ncol` columns, filled column by column
///
/// `top_right` is the pixel position (relative to `area`) of the legend's
/// upper-right corner.
pub fn draw_legend_grid<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    top_right: (i32, i32),
    entries: &[LegendEntry],
    ncol: usize,
    canvas: &Canvas,
    font_pt: f64,
    line_width_pt: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    if entries.is_empty() || ncol == 0 {
        return Ok(());
    }

    let nrows = entries.len().div_ceil(ncol);
    let style = TextStyle::from(canvas.font(font_pt)).pos(Pos::new(HPos::Left, VPos::Center));

    let handle_length = (2.0 * font_pt * canvas.scale).round() as i32;
    let handle_gap = (0.8 * font_pt * canvas.scale).round() as i32;
    let column_gap = (2.0 * font_pt * canvas.scale).round() as i32;
    let row_height = (1.4 * font_pt * canvas.scale).round() as i32;

    // Column widths from the widest label in each column
    let mut column_widths = vec![0i32; ncol];
    for (i, entry) in entries.iter().enumerate() {
        let (text_width, _) = area.estimate_text_size(&entry.label, &style)?;
        let col = i / nrows;
        let width = handle_length + handle_gap + text_width as i32;
        column_widths[col] = column_widths[col].max(width);
    }

    let total_width: i32 =
        column_widths.iter().sum::<i32>() + column_gap * (ncol as i32 - 1).max(0);
    let left = top_right.0 - total_width;

    let mut column_x = Vec::with_capacity(ncol);
    let mut x = left;
    for width in &column_widths {
        column_x.push(x);
        x += width + column_gap;
    }

    for (i, entry) in entries.iter().enumerate() {
        let (col, row) = (i / nrows, i % nrows);
        let x = column_x[col];
        let y = top_right.1 + row as i32 * row_height + row_height / 2;
        let line_style = entry.color.stroke_width(canvas.px(line_width_pt));

        if entry.dashed {
            let dash = handle_length * 2 / 5;
            area.draw(&PathElement::new(vec![(x, y), (x + dash, y)], line_style))?;
            area.draw(&PathElement::new(
                vec![(x + handle_length - dash, y), (x + handle_length, y)],
                line_style,
            ))?;
        } else {
            area.draw(&PathElement::new(vec![(x, y), (x + handle_length, y)], line_style))?;
        }

        area.draw(&Text::new(
            entry.label.clone(),
            (x + handle_length + handle_gap, y),
            style.clone(),
        ))?;
    }

    Ok(())
}
