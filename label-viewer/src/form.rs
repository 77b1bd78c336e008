//! Desktop form state and its conversion to label fields.

use std::path::Path;
use std::sync::Arc;

use label_core::model::{MILL_FINISH, OTHER};
use label_core::{ColorChoice, Gauge, LabelFields, Material, Palette, Rgb, Status};

/// An uploaded mill finish photo.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Arc<[u8]>,
}

impl Upload {
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self {
            file_name: path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
            bytes: Arc::from(bytes),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPick {
    Open,
    Reserved,
}

/// Widget state of the label form.
///
/// `material` and `gauge` hold `Other("")` while "Other" is picked; the typed
/// text lives in `custom_material` / `custom_gauge`.
#[derive(Debug, Clone)]
pub struct DesktopForm {
    /// Palette name or "Other".
    pub color: String,
    pub custom_name: String,
    pub custom_rgb: [u8; 3],
    pub upload: Option<Upload>,
    pub material: Material,
    pub custom_material: String,
    pub gauge: Gauge,
    pub custom_gauge: String,
    pub status: StatusPick,
    pub project: String,
}

impl DesktopForm {
    pub fn new(palette: &Palette) -> Self {
        Self {
            color: palette.names().next().unwrap_or(OTHER).to_string(),
            custom_name: String::new(),
            custom_rgb: [0, 0, 0],
            upload: None,
            material: Material::Aluminum,
            custom_material: String::new(),
            gauge: Gauge::Ga24,
            custom_gauge: String::new(),
            status: StatusPick::Open,
            project: String::new(),
        }
    }

    pub fn is_other_color(&self) -> bool {
        self.color == OTHER
    }

    pub fn is_mill_finish(&self) -> bool {
        self.color == MILL_FINISH
    }

    /// Snapshot the widgets as renderer input.
    pub fn to_fields(&self) -> LabelFields {
        let color = if self.is_other_color() {
            ColorChoice::Custom {
                rgb: Rgb::from(self.custom_rgb),
                label: self.custom_name.clone(),
            }
        } else if self.is_mill_finish() {
            ColorChoice::MillFinish {
                image: self.upload.as_ref().map(|u| u.bytes.clone()),
            }
        } else {
            ColorChoice::Named(self.color.clone())
        };

        let material = match &self.material {
            Material::Other(_) => Material::Other(self.custom_material.clone()),
            m => m.clone(),
        };

        let gauge = match &self.gauge {
            Gauge::Other(_) => Gauge::Other(self.custom_gauge.clone()),
            g => g.clone(),
        };

        let status = match self.status {
            StatusPick::Open => Status::Open,
            StatusPick::Reserved => Status::Reserved {
                project: Some(self.project.clone()).filter(|p| !p.trim().is_empty()),
            },
        };

        LabelFields::new(color, material, gauge, status)
    }

    /// Suggested file name for the save dialog, e.g. `Regal_Blue_24ga_Steel.png`.
    pub fn file_name(&self) -> String {
        let fields = self.to_fields();
        let stem: String = format!("{} {}", fields.title_text(), fields.material_text())
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            .collect();
        if stem.is_empty() {
            "label.png".to_string()
        } else {
            format!("{}.png", stem)
        }
    }
}
