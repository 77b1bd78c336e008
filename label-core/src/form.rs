//! Web form adapter.
//!
//! A [`FormSubmission`] holds the flat, string-keyed values a label web form
//! posts: select values, the free-text fields shown when "Other" is picked,
//! the color picker's `#rrggbb` value and an optional uploaded file. It is
//! turned into [`LabelFields`] here, which is also where malformed custom
//! colors are rejected.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};
use crate::model::{
    ColorChoice, Gauge, LabelFields, Material, Rgb, Status, MILL_FINISH, OTHER,
};
use crate::palette::Palette;

fn default_custom_hex() -> String {
    "#000000".to_string()
}

fn default_status() -> String {
    "Open".to_string()
}

/// Raw values of a submitted label form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    /// Palette name, "Other" or "Mill Finish".
    pub color: String,
    /// Label shown when color is "Other".
    pub custom_color_name: String,
    /// Color picker value used when color is "Other".
    pub custom_color_hex: String,
    /// Material select value or "Other".
    pub material: String,
    pub custom_material: String,
    /// Gauge select value or "Other".
    pub gauge: String,
    pub custom_gauge: String,
    /// "Open" or "Reserved".
    pub status: String,
    /// Only read when status is "Reserved".
    pub project: String,
    /// Uploaded mill finish photo.
    #[serde(skip)]
    pub upload: Option<Arc<[u8]>>,
}

impl Default for FormSubmission {
    fn default() -> Self {
        Self {
            color: Palette::DEFAULT_COLOR.to_string(),
            custom_color_name: String::new(),
            custom_color_hex: default_custom_hex(),
            material: Material::Aluminum.to_string(),
            custom_material: String::new(),
            gauge: Gauge::Ga24.to_string(),
            custom_gauge: String::new(),
            status: default_status(),
            project: String::new(),
            upload: None,
        }
    }
}

impl FormSubmission {
    /// Build from posted `(key, value)` pairs. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "color" => &mut form.color,
                "custom_color_name" => &mut form.custom_color_name,
                "custom_color_hex" => &mut form.custom_color_hex,
                "material" => &mut form.material,
                "custom_material" => &mut form.custom_material,
                "gauge" => &mut form.gauge,
                "custom_gauge" => &mut form.custom_gauge,
                "status" => &mut form.status,
                "project" => &mut form.project,
                other => {
                    tracing::debug!("Ignoring unknown form field '{}'", other);
                    continue;
                }
            };
            *slot = value.into();
        }
        form
    }

    /// Parse a submission from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Attach the uploaded file.
    pub fn with_upload(mut self, bytes: Vec<u8>) -> Self {
        self.upload = Some(Arc::from(bytes));
        self
    }

    /// Convert to renderer input.
    pub fn into_fields(self) -> Result<LabelFields> {
        let color = match self.color.as_str() {
            OTHER => ColorChoice::Custom {
                rgb: Rgb::from_hex(&self.custom_color_hex)?,
                label: self.custom_color_name,
            },
            MILL_FINISH => ColorChoice::MillFinish { image: self.upload },
            _ => ColorChoice::Named(self.color),
        };

        let material = if self.material == OTHER {
            Material::Other(self.custom_material)
        } else {
            Material::from_form(&self.material)
        };

        let gauge = if self.gauge == OTHER {
            Gauge::Other(self.custom_gauge)
        } else {
            Gauge::from_form(&self.gauge)
        };

        let status = match self.status.trim().to_lowercase().as_str() {
            "open" => Status::Open,
            "reserved" => Status::Reserved {
                project: Some(self.project).filter(|p| !p.trim().is_empty()),
            },
            _ => {
                return Err(LabelError::InvalidValue {
                    field: "status".to_string(),
                    expected: "Open or Reserved".to_string(),
                    value: self.status,
                })
            }
        };

        Ok(LabelFields::new(color, material, gauge, status))
    }
}
