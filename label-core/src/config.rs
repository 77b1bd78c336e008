//! Layout constants and settings for the renderer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::Rgb;

/// Canvas width shared by both layouts.
pub const CANVAS_WIDTH: u32 = 1650;

/// Canvas height of the standard layout (includes the top margin).
pub const CANVAS_HEIGHT: u32 = 586;

/// Canvas height of the compact layout.
pub const COMPACT_CANVAS_HEIGHT: u32 = 570;

/// Top margin of the standard layout.
pub const TOP_MARGIN: i32 = 16;

/// Size an uploaded mill finish photo is resized to.
pub const SWATCH_IMAGE_WIDTH: u32 = 449;
pub const SWATCH_IMAGE_HEIGHT: u32 = 550;

/// Stroke width of the swatch border and the divider.
pub const STROKE_WIDTH: u32 = 5;

/// Left edge of the text column.
pub const TEXT_X: i32 = 459;

/// Height of the status banner.
pub const BANNER_HEIGHT: i32 = 105;

/// Em size of the color title.
pub const TITLE_SIZE: f32 = 160.0;

/// Em size of the material line and banner text.
pub const BODY_SIZE: f32 = 100.0;

/// Simulated bold spread of the title (offsets -2..=2).
pub const TITLE_BOLD_SPREAD: i32 = 2;

/// Simulated bold spread of the material line (offsets -1..=1).
pub const BODY_BOLD_SPREAD: i32 = 1;

/// Banner color for open stock.
pub const OPEN_GREEN: Rgb = Rgb(95, 178, 34);

/// Banner color for reserved stock.
pub const RESERVED_BLUE: Rgb = Rgb(0, 99, 150);

/// Fonts tried in order before falling back to the bundled face.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Inclusive pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Distance from the left to the right edge.
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0).max(0) as u32
    }

    /// Distance from the top to the bottom edge.
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0).max(0) as u32
    }

    /// Check if a pixel lies inside (edges included).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// A text run origin (top-left of the line box) with its size and bold spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextSlot {
    pub x: i32,
    pub y: i32,
    pub size: f32,
    /// Redraw at every offset in `-bold..=bold` on both axes; 0 draws once.
    pub bold: i32,
}

/// Pixel layout of a label.
///
/// All coordinates are constants of the layout rather than invariants of
/// the renderer; see [`Layout::standard`] and [`Layout::compact`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Swatch block. Gradients and uploaded photos are sized from it.
    pub swatch: Bounds,
    pub border_width: u32,
    pub title: TextSlot,
    /// Center row of the divider line.
    pub divider_y: i32,
    pub divider_width: u32,
    pub material: TextSlot,
    pub banner: Bounds,
    pub status: TextSlot,
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

impl Layout {
    /// 1650x586 with a 16px top margin.
    pub fn standard() -> Self {
        Self::with_margin(TOP_MARGIN, CANVAS_HEIGHT)
    }

    /// 1650x570 without a top margin.
    pub fn compact() -> Self {
        Self::with_margin(0, COMPACT_CANVAS_HEIGHT)
    }

    fn with_margin(margin: i32, canvas_height: u32) -> Self {
        let banner_y = 440 + margin;
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height,
            swatch: Bounds::new(
                0,
                margin,
                SWATCH_IMAGE_WIDTH as i32,
                margin + SWATCH_IMAGE_HEIGHT as i32,
            ),
            border_width: STROKE_WIDTH,
            title: TextSlot {
                x: TEXT_X,
                y: 20 + margin,
                size: TITLE_SIZE,
                bold: TITLE_BOLD_SPREAD,
            },
            divider_y: 320 + margin,
            divider_width: STROKE_WIDTH,
            material: TextSlot {
                x: TEXT_X,
                y: 330 + margin,
                size: BODY_SIZE,
                bold: BODY_BOLD_SPREAD,
            },
            banner: Bounds::new(TEXT_X, banner_y, CANVAS_WIDTH as i32, banner_y + BANNER_HEIGHT),
            status: TextSlot {
                x: TEXT_X,
                y: banner_y + 5,
                size: BODY_SIZE,
                bold: 0,
            },
        }
    }

    /// Size uploaded photos are resized to, and the gradient's width and
    /// scanline count.
    pub fn swatch_size(&self) -> (u32, u32) {
        (self.swatch.width(), self.swatch.height())
    }

    /// Parse a layout override from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a layout by name ("standard" or "compact").
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "standard" => Some(Self::standard()),
            "compact" => Some(Self::compact()),
            _ => None,
        }
    }
}

/// Where to look for the label font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Candidate font files, tried in order. Collections use face 0.
    pub search_paths: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            search_paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FontConfig {
    /// Try `path` before the default search paths.
    pub fn with_preferred(path: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.search_paths.insert(0, path.into());
        config
    }
}
