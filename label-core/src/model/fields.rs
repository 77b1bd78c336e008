//! Label fields collected by a front-end form.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::color::Rgb;
use crate::config::{OPEN_GREEN, RESERVED_BLUE};

/// Palette name whose swatch comes from an uploaded image.
pub const MILL_FINISH: &str = "Mill Finish";

/// Form value selecting a free-text alternative.
pub const OTHER: &str = "Other";

/// Title shown for a custom color without a name.
pub const UNKNOWN_COLOR: &str = "Unknown";

/// How the swatch gets its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorChoice {
    /// A palette entry by name.
    Named(String),
    /// "Other": explicit RGB with a free-text label.
    Custom { rgb: Rgb, label: String },
    /// Mill finish photo as raw encoded bytes (PNG or JPEG).
    MillFinish { image: Option<Arc<[u8]>> },
}

impl ColorChoice {
    pub fn named(name: impl Into<String>) -> Self {
        ColorChoice::Named(name.into())
    }

    pub fn custom(rgb: Rgb, label: impl Into<String>) -> Self {
        ColorChoice::Custom {
            rgb,
            label: label.into(),
        }
    }

    pub fn mill_finish(image: Option<Vec<u8>>) -> Self {
        ColorChoice::MillFinish {
            image: image.map(Arc::from),
        }
    }
}

/// Sheet material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Aluminum,
    Steel,
    Copper,
    Galvalume,
    Other(String),
}

impl Material {
    /// The fixed choices offered by the forms.
    pub const CHOICES: [Material; 4] = [
        Material::Aluminum,
        Material::Steel,
        Material::Copper,
        Material::Galvalume,
    ];

    /// Map a form value; unrecognized values are kept as free text.
    pub fn from_form(value: &str) -> Self {
        Self::CHOICES
            .into_iter()
            .find(|m| m.as_str() == value)
            .unwrap_or_else(|| Material::Other(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Material::Aluminum => "Aluminum",
            Material::Steel => "Steel",
            Material::Copper => "Copper",
            Material::Galvalume => "Galvalume",
            Material::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sheet thickness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gauge {
    /// 24 gauge steel
    Ga24,
    /// .032" aluminum
    Thou032,
    /// 22 gauge steel
    Ga22,
    Other(String),
}

impl Gauge {
    /// The fixed choices offered by the forms.
    pub const CHOICES: [Gauge; 3] = [Gauge::Ga24, Gauge::Thou032, Gauge::Ga22];

    /// Map a form value; unrecognized values are kept as free text.
    pub fn from_form(value: &str) -> Self {
        Self::CHOICES
            .into_iter()
            .find(|g| g.as_str() == value)
            .unwrap_or_else(|| Gauge::Other(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Gauge::Ga24 => "24ga",
            Gauge::Thou032 => ".032",
            Gauge::Ga22 => "22ga",
            Gauge::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inventory status of the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Open,
    Reserved { project: Option<String> },
}

impl Status {
    pub fn reserved(project: impl Into<String>) -> Self {
        Status::Reserved {
            project: Some(project.into()),
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::Reserved { .. } => "Reserved",
        }
    }
}

/// One label's worth of form input. Built fresh for every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFields {
    pub color: ColorChoice,
    pub material: Material,
    pub gauge: Gauge,
    pub status: Status,
}

impl LabelFields {
    pub fn new(color: ColorChoice, material: Material, gauge: Gauge, status: Status) -> Self {
        Self {
            color,
            material,
            gauge,
            status,
        }
    }

    /// Large title next to the swatch.
    pub fn title_text(&self) -> &str {
        match &self.color {
            ColorChoice::Named(name) => name.as_str(),
            ColorChoice::Custom { label, .. } if label.trim().is_empty() => UNKNOWN_COLOR,
            ColorChoice::Custom { label, .. } => label.as_str(),
            ColorChoice::MillFinish { .. } => MILL_FINISH,
        }
    }

    /// Gauge then material, e.g. "24ga Galvalume".
    pub fn material_text(&self) -> String {
        format!("{} {}", self.gauge, self.material).trim().to_string()
    }

    /// Banner text: the project when one is reserved, else the status word.
    pub fn status_text(&self) -> &str {
        match &self.status {
            Status::Reserved {
                project: Some(project),
            } if !project.trim().is_empty() => project.as_str(),
            status => status.word(),
        }
    }

    pub fn status_color(&self) -> Rgb {
        match self.status {
            Status::Open => OPEN_GREEN,
            Status::Reserved { .. } => RESERVED_BLUE,
        }
    }
}
