//! Pixel primitives on an RGB canvas.
//!
//! Coordinates are signed and rectangles inclusive; everything is clipped
//! to the canvas, so callers can pass layout bounds that touch or cross the
//! right edge.

use image::RgbImage;

use crate::config::Bounds;
use crate::model::Rgb;

/// Fill an inclusive rectangle.
pub fn fill_rect(canvas: &mut RgbImage, bounds: Bounds, color: Rgb) {
    let Some((x0, y0, x1, y1)) = clip(canvas, bounds) else {
        return;
    };
    let pixel = color.to_pixel();
    for y in y0..=y1 {
        for x in x0..=x1 {
            canvas.put_pixel(x, y, pixel);
        }
    }
}

/// Stroke a rectangle outline of `width` pixels, drawn inward from the bounds.
pub fn stroke_rect(canvas: &mut RgbImage, bounds: Bounds, width: u32, color: Rgb) {
    if width == 0 {
        return;
    }
    let w = width as i32 - 1;
    let Bounds { x0, y0, x1, y1 } = bounds;

    // Outline wider than the rectangle is a solid fill
    if x0 + w >= x1 - w || y0 + w >= y1 - w {
        fill_rect(canvas, bounds, color);
        return;
    }

    fill_rect(canvas, Bounds::new(x0, y0, x1, y0 + w), color);
    fill_rect(canvas, Bounds::new(x0, y1 - w, x1, y1), color);
    fill_rect(canvas, Bounds::new(x0, y0, x0 + w, y1), color);
    fill_rect(canvas, Bounds::new(x1 - w, y0, x1, y1), color);
}

/// Horizontal line from `x0` to `x1` inclusive, `width` pixels thick,
/// centered on row `y`.
pub fn hline(canvas: &mut RgbImage, x0: i32, x1: i32, y: i32, width: u32, color: Rgb) {
    if width == 0 {
        return;
    }
    let top = y - (width as i32 - 1) / 2;
    fill_rect(canvas, Bounds::new(x0, top, x1, top + width as i32 - 1), color);
}

/// Copy `src` onto the canvas with its top-left corner at (`x`, `y`).
pub fn paste(canvas: &mut RgbImage, src: &RgbImage, x: i32, y: i32) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let dx = x + sx as i32;
        let dy = y + sy as i32;
        if in_canvas(canvas, dx, dy) {
            canvas.put_pixel(dx as u32, dy as u32, *pixel);
        }
    }
}

/// Blend `color` over one pixel with `alpha` in `0.0..=1.0`.
pub fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb, alpha: f32) {
    if !in_canvas(canvas, x, y) || alpha <= 0.0 {
        return;
    }
    let alpha = alpha.min(1.0);
    let inv_alpha = 1.0 - alpha;
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    let src = [color.0, color.1, color.2];
    for (dst, src) in pixel.0.iter_mut().zip(src) {
        *dst = (src as f32 * alpha + *dst as f32 * inv_alpha).round() as u8;
    }
}

fn in_canvas(canvas: &RgbImage, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height()
}

fn clip(canvas: &RgbImage, bounds: Bounds) -> Option<(u32, u32, u32, u32)> {
    let max_x = canvas.width() as i32 - 1;
    let max_y = canvas.height() as i32 - 1;
    let x0 = bounds.x0.max(0);
    let y0 = bounds.y0.max(0);
    let x1 = bounds.x1.min(max_x);
    let y1 = bounds.y1.min(max_y);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}
