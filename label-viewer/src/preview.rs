//! Scaling the rendered label into the preview panel.

use egui::{ColorImage, Vec2};
use image::RgbImage;

/// Largest size with the label's aspect ratio that fits `available`.
/// Never scales above 100%.
pub fn fit_size(label: Vec2, available: Vec2) -> Vec2 {
    if label.x <= 0.0 || label.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (available.x / label.x)
        .min(available.y / label.y)
        .clamp(0.0, 1.0);
    label * scale
}

/// Upload format for an egui texture.
pub fn to_color_image(label: &RgbImage) -> ColorImage {
    let size = [label.width() as usize, label.height() as usize];
    ColorImage::from_rgb(size, label.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_size_keeps_aspect() {
        let size = fit_size(Vec2::new(1650.0, 586.0), Vec2::new(825.0, 1000.0));
        assert_eq!(size, Vec2::new(825.0, 293.0));
    }

    #[test]
    fn test_fit_size_height_bound() {
        let size = fit_size(Vec2::new(1650.0, 586.0), Vec2::new(2000.0, 293.0));
        assert_eq!(size, Vec2::new(825.0, 293.0));
    }

    #[test]
    fn test_fit_size_never_upscales() {
        let size = fit_size(Vec2::new(1650.0, 586.0), Vec2::new(4000.0, 4000.0));
        assert_eq!(size, Vec2::new(1650.0, 586.0));
    }

    #[test]
    fn test_fit_size_degenerate() {
        assert_eq!(fit_size(Vec2::ZERO, Vec2::new(10.0, 10.0)), Vec2::ZERO);
        assert_eq!(
            fit_size(Vec2::new(10.0, 10.0), Vec2::new(-5.0, 10.0)),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_to_color_image() {
        let label = RgbImage::from_pixel(3, 2, image::Rgb([0, 99, 150]));
        let color = to_color_image(&label);
        assert_eq!(color.size, [3, 2]);
        assert_eq!(color.pixels[5], egui::Color32::from_rgb(0, 99, 150));
    }
}
