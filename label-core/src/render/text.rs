//! Glyph runs drawn onto the canvas.

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, FontVec, GlyphId, PxScale, ScaleFont};
use image::RgbImage;
use tracing::{debug, info, warn};

use super::draw::blend_pixel;
use crate::config::FontConfig;
use crate::error::{LabelError, Result};
use crate::model::Rgb;

/// Where the loaded face came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    /// The face bundled with the crate.
    Bundled,
}

/// The label's font face, loaded once and shared read-only.
#[derive(Clone)]
pub struct FontSet {
    face: FontArc,
    source: FontSource,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl FontSet {
    /// Load the first usable font on the search path, falling back to the
    /// bundled face with a warning.
    pub fn load(config: &FontConfig) -> Result<Self> {
        Self::try_load(config).or_else(|e| {
            warn!("{}; using the bundled font", e);
            Self::bundled()
        })
    }

    /// Load the first usable font on the search path.
    pub fn try_load(config: &FontConfig) -> Result<Self> {
        for path in &config.search_paths {
            if !path.exists() {
                debug!("Font not found: {}", path.display());
                continue;
            }
            match Self::from_file(path) {
                Ok(fonts) => {
                    info!("Loaded font {}", path.display());
                    return Ok(fonts);
                }
                Err(e) => warn!("{}", e),
            }
        }

        let tried = config
            .search_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(LabelError::FontUnavailable { tried })
    }

    /// Load a TrueType/OpenType font or the first face of a collection.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let face = FontVec::try_from_vec_and_index(data, 0).map_err(|e| {
            LabelError::InvalidFont {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            face: FontArc::new(face),
            source: FontSource::File(path.to_path_buf()),
        })
    }

    /// The bundled sans face.
    pub fn bundled() -> Result<Self> {
        let face = FontArc::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT).map_err(|e| {
            LabelError::InvalidFont {
                path: PathBuf::from("<bundled>"),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            face,
            source: FontSource::Bundled,
        })
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Scale such that one em spans `size` pixels.
    fn scale_for(&self, size: f32) -> PxScale {
        let units_per_em = self.face.units_per_em().unwrap_or(1000.0);
        PxScale::from(size * self.face.height_unscaled() / units_per_em)
    }

    /// Advance width of `text` at `size`, kerning included.
    pub fn text_width(&self, size: f32, text: &str) -> f32 {
        let font = self.face.as_scaled(self.scale_for(size));
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars().filter(|c| !c.is_control()) {
            let id = font.glyph_id(c);
            if let Some(prev) = previous {
                width += font.kern(prev, id);
            }
            width += font.h_advance(id);
            previous = Some(id);
        }
        width
    }

    /// Draw `text` with the top of its line box at (`x`, `y`).
    pub fn draw_text(
        &self,
        canvas: &mut RgbImage,
        x: f32,
        y: f32,
        size: f32,
        text: &str,
        color: Rgb,
    ) {
        let scale = self.scale_for(size);
        let font = self.face.as_scaled(scale);
        let mut caret = point(x, y + font.ascent());
        let mut previous: Option<GlyphId> = None;

        for c in text.chars().filter(|c| !c.is_control()) {
            let id = font.glyph_id(c);
            if let Some(prev) = previous {
                caret.x += font.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, caret);
            caret.x += font.h_advance(id);
            previous = Some(id);

            let Some(outline) = self.face.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outline.px_bounds();
            let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
            outline.draw(|gx, gy, coverage| {
                blend_pixel(canvas, left + gx as i32, top + gy as i32, color, coverage);
            });
        }
    }

    /// Fake a heavier weight by drawing the run at every offset in
    /// `-spread..=spread` on both axes.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_bold(
        &self,
        canvas: &mut RgbImage,
        x: i32,
        y: i32,
        size: f32,
        text: &str,
        color: Rgb,
        spread: i32,
    ) {
        let spread = spread.abs();
        for dx in -spread..=spread {
            for dy in -spread..=spread {
                self.draw_text(canvas, (x + dx) as f32, (y + dy) as f32, size, text, color);
            }
        }
    }
}
