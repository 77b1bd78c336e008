//! Label renderer.
//!
//! Composites the swatch block, the title and material text and the status
//! banner onto a white canvas. Rendering is a pure function of the fields:
//! the same input always produces the same pixels.

mod draw;
mod gradient;
mod text;

pub use draw::{blend_pixel, fill_rect, hline, paste, stroke_rect};
pub use gradient::{fill_gradient, gradient_row};
pub use text::{FontSet, FontSource};

use image::{imageops::FilterType, RgbImage};
use tracing::{debug, warn};

use crate::config::{FontConfig, Layout};
use crate::error::{LabelError, Result};
use crate::model::{ColorChoice, ColorEntry, LabelFields, Rgb};
use crate::palette::Palette;

/// Renders labels with an injected palette, font and layout.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    fonts: FontSet,
    layout: Layout,
}

impl Renderer {
    pub fn new(palette: Palette, fonts: FontSet, layout: Layout) -> Self {
        Self {
            palette,
            fonts,
            layout,
        }
    }

    /// Standard palette and layout with fonts from the default search path.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(
            Palette::standard(),
            FontSet::load(&FontConfig::default())?,
            Layout::standard(),
        ))
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Render one label.
    pub fn render(&self, fields: &LabelFields) -> RgbImage {
        let layout = &self.layout;
        let mut canvas = RgbImage::from_pixel(
            layout.canvas_width,
            layout.canvas_height,
            Rgb::WHITE.to_pixel(),
        );

        self.draw_swatch(&mut canvas, &fields.color);
        stroke_rect(&mut canvas, layout.swatch, layout.border_width, Rgb::BLACK);

        let title = fields.title_text();
        let title_right = layout.title.x as f32 + self.fonts.text_width(layout.title.size, title);
        if title_right > layout.canvas_width as f32 {
            warn!("Title '{}' is wider than the label and will be clipped", title);
        }
        self.fonts.draw_text_bold(
            &mut canvas,
            layout.title.x,
            layout.title.y,
            layout.title.size,
            title,
            Rgb::BLACK,
            layout.title.bold,
        );

        hline(
            &mut canvas,
            layout.title.x,
            layout.canvas_width as i32,
            layout.divider_y,
            layout.divider_width,
            Rgb::BLACK,
        );

        self.fonts.draw_text_bold(
            &mut canvas,
            layout.material.x,
            layout.material.y,
            layout.material.size,
            &fields.material_text(),
            Rgb::BLACK,
            layout.material.bold,
        );

        fill_rect(&mut canvas, layout.banner, fields.status_color());
        self.fonts.draw_text_bold(
            &mut canvas,
            layout.status.x,
            layout.status.y,
            layout.status.size,
            fields.status_text(),
            Rgb::WHITE,
            layout.status.bold,
        );

        debug!(
            "Rendered label '{}' ({}x{})",
            title,
            canvas.width(),
            canvas.height()
        );
        canvas
    }

    fn draw_swatch(&self, canvas: &mut RgbImage, color: &ColorChoice) {
        let swatch = self.layout.swatch;
        match color {
            ColorChoice::Custom { rgb, .. } => fill_rect(canvas, swatch, *rgb),
            ColorChoice::MillFinish { image } => match image {
                Some(bytes) => match self.swatch_image(bytes) {
                    Ok(photo) => paste(canvas, &photo, swatch.x0, swatch.y0),
                    Err(e) => warn!("{}; leaving swatch blank", e),
                },
                None => debug!("No mill finish image supplied; leaving swatch blank"),
            },
            ColorChoice::Named(name) => match self.palette.lookup(name) {
                Some(ColorEntry::Flat(rgb)) => fill_rect(canvas, swatch, *rgb),
                Some(ColorEntry::Gradient(stops)) => {
                    let (width, height) = self.layout.swatch_size();
                    fill_gradient(canvas, swatch.x0, swatch.y0, width, height, stops);
                }
                Some(ColorEntry::MillFinish) => {
                    debug!("'{}' selected by name without an image", name)
                }
                None => warn!("Unknown color '{}'; leaving swatch blank", name),
            },
        }
    }

    /// Decode an uploaded photo and resize it to the swatch size.
    fn swatch_image(&self, bytes: &[u8]) -> Result<RgbImage> {
        let (width, height) = self.layout.swatch_size();
        let photo = image::load_from_memory(bytes).map_err(|e| LabelError::ImageLoad {
            message: e.to_string(),
        })?;
        Ok(photo
            .resize_exact(width, height, FilterType::CatmullRom)
            .to_rgb8())
    }
}
