//! Three-stop vertical gradient fill.
//!
//! The top half blends start -> middle and the bottom half middle -> end, so
//! with matching outer stops the swatch peaks at the middle color on its
//! center row. Channels are truncated, not rounded.

use image::RgbImage;

use super::draw::hline;
use crate::model::{GradientSpec, Rgb};

/// Color of scanline `row` in a gradient `height` rows tall.
pub fn gradient_row(stops: &GradientSpec, row: u32, height: u32) -> Rgb {
    let half = height as f64 / 2.0;
    if row < height / 2 {
        stops.start().lerp(stops.middle(), row as f64 / half)
    } else {
        stops.middle().lerp(stops.end(), (row as f64 - half) / half)
    }
}

/// Paint `height` scanlines starting at (`x`, `y`); each spans `x..=x + width`.
pub fn fill_gradient(
    canvas: &mut RgbImage,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    stops: &GradientSpec,
) {
    for row in 0..height {
        let color = gradient_row(stops, row, height);
        hline(canvas, x, x + width as i32, y + row as i32, 1, color);
    }
}
