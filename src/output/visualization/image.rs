//! Grayscale image panels with colorbars
//!
//! Draws a matrix like `imshow(..., cmap="gray")`: row 0 at the top, one
//! filled cell per pixel, no axes, and a vertical colorbar to the right
//! labelled with data values.

use std::error::Error;

use nalgebra::DMatrix;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::config::Canvas;
use super::elements::format_tick;

/// Number of gradient steps in a colorbar
const COLORBAR_STEPS: usize = 128;

/// Colorbar width as a fraction of the panel width
const COLORBAR_FRACTION: f64 = 0.12;

/// Map `t` in [0, 1] to a gray level (0 = black, 1 = white)
pub fn grayscale(t: f64) -> RGBColor {
    let level = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(level, level, level)
}

/// Normalize `value` to [0, 1] over `[min, max]`; a flat range maps to 0.5
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.abs() < 1e-12 {
        0.5
    } else {
        ((value - min) / span).clamp(0.0, 1.0)
    }
}

/// Draw `image` as a titled grayscale panel with a colorbar
///
/// The image keeps square pixels: the panel is letterboxed if its aspect
/// ratio differs from the image's.
pub fn draw_grayscale_panel<DB: DrawingBackend>(
    panel: &DrawingArea<DB, Shift>,
    image: &DMatrix<f64>,
    title: &str,
    canvas: &Canvas,
    title_pt: f64,
    tick_pt: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (rows, cols) = image.shape();
    if rows == 0 || cols == 0 {
        return Err("Empty image".into());
    }

    let vmin = image.min();
    let vmax = image.max();

    let (panel_w, panel_h) = panel.dim_in_pixel();
    let colorbar_w = (panel_w as f64 * COLORBAR_FRACTION).round() as u32;
    let colorbar_labels_w = canvas.px(3.5 * tick_pt);
    let (image_area, colorbar_area) =
        panel.split_horizontally(panel_w.saturating_sub(colorbar_w + colorbar_labels_w));

    // ============================= Letterbox ==============================

    let caption_h = canvas.px(2.0 * title_pt);
    let pad = canvas.px(4.0);
    let (area_w, _) = image_area.dim_in_pixel();
    let avail_w = area_w.saturating_sub(2 * pad) as f64;
    let avail_h = panel_h.saturating_sub(caption_h + 2 * pad) as f64;

    let cell = (avail_w / cols as f64).min(avail_h / rows as f64);
    let draw_w = (cell * cols as f64).floor() as u32;
    let draw_h = (cell * rows as f64).floor() as u32;
    let margin_x = (area_w.saturating_sub(draw_w)) / 2;
    let margin_y = (panel_h.saturating_sub(caption_h + draw_h)) / 2;

    // ============================= Image ==================================

    let mut chart = ChartBuilder::on(&image_area)
        .caption(title, canvas.font(title_pt))
        .margin_left(margin_x)
        .margin_right(margin_x)
        .margin_top(margin_y)
        .margin_bottom(margin_y)
        .build_cartesian_2d(0.0..cols as f64, 0.0..rows as f64)?;

    let rows_f = rows as f64;
    chart.draw_series((0..rows).flat_map(|r| {
        (0..cols).map(move |c| {
            // Row 0 is the top of the picture
            let y_top = rows_f - r as f64;
            let color = grayscale(normalize(image[(r, c)], vmin, vmax));
            Rectangle::new(
                [(c as f64, y_top - 1.0), (c as f64 + 1.0, y_top)],
                color.filled(),
            )
        })
    }))?;

    // ============================= Colorbar ===============================

    let mut colorbar = ChartBuilder::on(&colorbar_area)
        .margin_top(margin_y + caption_h)
        .margin_bottom(margin_y)
        .margin_left(canvas.px(2.0))
        .set_label_area_size(LabelAreaPosition::Right, colorbar_labels_w)
        .set_label_area_size(LabelAreaPosition::Left, 0)
        .build_cartesian_2d(0.0..1.0, vmin..vmax)?;

    let delta = (vmax - vmin) / COLORBAR_STEPS as f64;
    colorbar.draw_series((0..COLORBAR_STEPS).map(|step| {
        let v0 = vmin + delta * step as f64;
        let v1 = v0 + delta;
        let color = grayscale(normalize((v0 + v1) * 0.5, vmin, vmax));
        Rectangle::new([(0.0, v0), (1.0, v1)], color.filled())
    }))?;

    colorbar
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(5)
        .label_style(canvas.font(tick_pt))
        .y_label_formatter(&|v| format_tick(*v))
        .draw()?;

    colorbar.draw_series(std::iter::once(Rectangle::new(
        [(0.0, vmin), (1.0, vmax)],
        BLACK.stroke_width(canvas.px(0.8)),
    )))?;

    Ok(())
}
