//! Colors and sizes for the generator window.

use egui::Color32;

// =============================================================================
// PANELS
// =============================================================================
pub const PREVIEW_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const PREVIEW_BORDER: Color32 = Color32::from_rgb(100, 115, 130);

// =============================================================================
// MESSAGES
// =============================================================================
pub const WARNING_TEXT: Color32 = Color32::from_rgb(255, 200, 100);
pub const DIM_TEXT: Color32 = Color32::from_rgb(140, 145, 150);

// =============================================================================
// SIZES
// =============================================================================
pub const FORM_PANEL_WIDTH: f32 = 280.0;
pub const PREVIEW_MARGIN: f32 = 16.0;
pub const PREVIEW_STROKE_WIDTH: f32 = 1.0;
