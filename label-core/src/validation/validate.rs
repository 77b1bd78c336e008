//! Validation of label fields before rendering.
//!
//! Nothing here stops a render: warnings describe a label that will come out
//! visibly incomplete, errors describe input a front-end should not have
//! produced.

use crate::model::{ColorChoice, ColorEntry, LabelFields, Status, OTHER};
use crate::palette::Palette;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// True when there is nothing to report.
    pub fn is_clean(&self) -> bool {
        self.passed && self.warnings.is_empty()
    }
}

/// Validate label fields against the palette they will be rendered with.
pub fn validate_fields(fields: &LabelFields, palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::ok();

    match &fields.color {
        ColorChoice::Named(name) if name == OTHER => {
            result.add_error("Color 'Other' needs a custom RGB value and label");
        }
        ColorChoice::Named(name) => match palette.lookup(name) {
            None => result.add_warning(format!(
                "Unknown color '{}': swatch will be left blank",
                name
            )),
            Some(ColorEntry::MillFinish) => result.add_warning(format!(
                "'{}' has no image: swatch will be left blank",
                name
            )),
            Some(_) => {}
        },
        ColorChoice::Custom { label, .. } if label.trim().is_empty() => {
            result.add_warning("Custom color has no name: title will read 'Unknown'");
        }
        ColorChoice::Custom { .. } => {}
        ColorChoice::MillFinish { image: None } => {
            result.add_warning("No mill finish image uploaded: swatch will be left blank");
        }
        ColorChoice::MillFinish { image: Some(_) } => {}
    }

    if fields.material.as_str().trim().is_empty() {
        result.add_warning("Material is blank");
    }
    if fields.gauge.as_str().trim().is_empty() {
        result.add_warning("Gauge is blank");
    }

    if let Status::Reserved { project } = &fields.status {
        if project.as_deref().map_or(true, |p| p.trim().is_empty()) {
            result.add_warning("Reserved without a project name: banner will read 'Reserved'");
        }
    }

    result
}
