//! PNG rendering of estimated percolation curves
//!
//! Draws a minimal chart: white background, axis frame, a polyline through
//! the sweep points, and a square marker at each point. The vertical axis is
//! always the full probability range `[0, 1]`; the horizontal axis spans the
//! swept occupation probabilities.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

use crate::analysis::sweep::SweepPoint;
use crate::io::configuration::{PLOT_HEIGHT, PLOT_MARGIN, PLOT_MARKER_RADIUS, PLOT_WIDTH};
use crate::io::error::{PercolationError, Result};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([96, 96, 96]);
const CURVE: Rgb<u8> = Rgb([24, 80, 200]);

/// Render an estimated curve as a PNG chart
///
/// Parent directories are created on demand.
///
/// # Errors
///
/// Returns an error if the curve is empty, the parent directory cannot be
/// created, or the image cannot be saved.
pub fn render_curve_png(points: &[SweepPoint], output_path: &Path) -> Result<()> {
    if points.is_empty() {
        return Err(PercolationError::EmptyCurve);
    }

    let mut img = RgbImage::from_pixel(PLOT_WIDTH, PLOT_HEIGHT, BACKGROUND);
    draw_frame(&mut img);

    let p_min = points.iter().map(|pt| pt.p).fold(f64::INFINITY, f64::min);
    let p_max = points
        .iter()
        .map(|pt| pt.p)
        .fold(f64::NEG_INFINITY, f64::max);

    let pixels: Vec<(u32, u32)> = points
        .iter()
        .map(|point| to_pixel(point, p_min, p_max))
        .collect();

    for pair in pixels.windows(2) {
        if let [from, to] = pair {
            draw_line(&mut img, *from, *to);
        }
    }
    for pixel in &pixels {
        draw_marker(&mut img, *pixel);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PercolationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create parent directory",
                source,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|source| PercolationError::PlotExport {
            path: output_path.to_path_buf(),
            source,
        })
}

// Maps a sweep point into the plot area. The horizontal axis spans the swept
// p range; a single-point sweep lands in the horizontal center.
fn to_pixel(point: &SweepPoint, p_min: f64, p_max: f64) -> (u32, u32) {
    let inner_width = f64::from(PLOT_WIDTH - 2 * PLOT_MARGIN);
    let inner_height = f64::from(PLOT_HEIGHT - 2 * PLOT_MARGIN);

    let x_fraction = if p_max > p_min {
        (point.p - p_min) / (p_max - p_min)
    } else {
        0.5
    };
    let y_fraction = point.probability.clamp(0.0, 1.0);

    let x = f64::from(PLOT_MARGIN) + x_fraction * inner_width;
    // Image rows grow downward; probability 1 sits at the top of the frame
    let y = f64::from(PLOT_MARGIN) + (1.0 - y_fraction) * inner_height;

    (x.round() as u32, y.round() as u32)
}

fn draw_frame(img: &mut RgbImage) {
    let left = PLOT_MARGIN;
    let right = PLOT_WIDTH - PLOT_MARGIN;
    let top = PLOT_MARGIN;
    let bottom = PLOT_HEIGHT - PLOT_MARGIN;

    for x in left..=right {
        put_pixel_checked(img, x, top, FRAME);
        put_pixel_checked(img, x, bottom, FRAME);
    }
    for y in top..=bottom {
        put_pixel_checked(img, left, y, FRAME);
        put_pixel_checked(img, right, y, FRAME);
    }
}

// Plain DDA segment; curve geometry never needs subpixel accuracy
fn draw_line(img: &mut RgbImage, from: (u32, u32), to: (u32, u32)) {
    let (x0, y0) = (f64::from(from.0), f64::from(from.1));
    let (x1, y1) = (f64::from(to.0), f64::from(to.1));

    let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as u32;
    for step in 0..=steps {
        let t = f64::from(step) / f64::from(steps);
        let x = (x1 - x0).mul_add(t, x0).round() as u32;
        let y = (y1 - y0).mul_add(t, y0).round() as u32;
        put_pixel_checked(img, x, y, CURVE);
    }
}

fn draw_marker(img: &mut RgbImage, center: (u32, u32)) {
    let (cx, cy) = center;
    for x in cx.saturating_sub(PLOT_MARKER_RADIUS)..=cx + PLOT_MARKER_RADIUS {
        for y in cy.saturating_sub(PLOT_MARKER_RADIUS)..=cy + PLOT_MARKER_RADIUS {
            put_pixel_checked(img, x, y, CURVE);
        }
    }
}

fn put_pixel_checked(img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>) {
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}
