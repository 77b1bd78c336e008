//! label-core - Core library for sheet metal inventory labels.
//!
//! This library turns a set of label fields (color, material, gauge and
//! status) into a fixed-layout raster: a swatch block, a bold color title, a
//! material/gauge line and a colored status banner. Front-ends only collect
//! the fields; everything that touches pixels lives here.
//!
//! # Example
//!
//! ```no_run
//! use label_core::{FormSubmission, Renderer};
//! use std::path::Path;
//!
//! let form = FormSubmission::from_pairs([
//!     ("color", "Bright Silver"),
//!     ("material", "Aluminum"),
//!     ("gauge", ".032"),
//!     ("status", "Reserved"),
//!     ("project", "Unit 7B"),
//! ]);
//! let fields = form.into_fields().unwrap();
//! let label = Renderer::standard().unwrap().render(&fields);
//! label_core::save_png(&label, Path::new("label.png")).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod model;
pub mod palette;
pub mod render;
pub mod validation;

// Re-exports for convenience
pub use config::{Bounds, FontConfig, Layout, TextSlot};
pub use error::{ErrorKind, LabelError, Result};
pub use export::{encode_png, save_png};
pub use form::FormSubmission;
pub use model::{ColorChoice, ColorEntry, Gauge, GradientSpec, LabelFields, Material, Rgb, Status};
pub use palette::{Palette, PaletteEntry};
pub use render::{fill_gradient, gradient_row, FontSet, FontSource, Renderer};
pub use validation::{validate_fields, ValidationResult};

/// Convert a submitted form into PNG bytes.
///
/// This is the full web form pipeline:
/// 1. Convert the submission (rejects malformed custom colors)
/// 2. Validate the fields and log what will render incomplete
/// 3. Render the label
/// 4. Encode it as PNG
pub fn render_form_to_png(form: FormSubmission, renderer: &Renderer) -> Result<Vec<u8>> {
    let fields = form.into_fields()?;

    let validation = validate_fields(&fields, renderer.palette());
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for err in &validation.errors {
        tracing::error!("{}", err);
    }

    let label = renderer.render(&fields);
    encode_png(&label)
}
