//! Named swatch colors.
//!
//! A [`Palette`] is an immutable, ordered table built once at startup and
//! handed to the renderer. The order is the order the forms list colors in.

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};
use crate::model::{ColorEntry, GradientSpec, Rgb, MILL_FINISH, OTHER};

const FLAT_COLORS: [(&str, Rgb); 23] = [
    ("Snowdrift White", Rgb(239, 240, 241)),
    ("Bone White", Rgb(225, 225, 212)),
    ("Regal White", Rgb(227, 231, 230)),
    ("Stone White", Rgb(223, 225, 222)),
    ("Medium Bronze", Rgb(89, 79, 68)),
    ("Almond", Rgb(211, 203, 183)),
    ("Sandstone", Rgb(196, 194, 177)),
    ("Sierra Tan", Rgb(163, 143, 124)),
    ("Dark Bronze", Rgb(58, 54, 53)),
    ("Aged Copper", Rgb(138, 169, 142)),
    ("Dove Gray", Rgb(143, 147, 145)),
    ("Ash Gray", Rgb(163, 159, 149)),
    ("Slate Gray", Rgb(118, 117, 111)),
    ("Charcoal Gray", Rgb(83, 86, 88)),
    ("Patina Green", Rgb(123, 133, 112)),
    ("Evergreen", Rgb(55, 82, 69)),
    ("Slate Blue", Rgb(84, 118, 132)),
    ("Regal Blue", Rgb(38, 80, 105)),
    ("Banner Red", Rgb(159, 36, 50)),
    ("Colonial Red", Rgb(111, 52, 46)),
    ("Terra Cotta", Rgb(154, 74, 57)),
    ("Mansard Brown", Rgb(72, 56, 51)),
    ("Matte Black", Rgb(48, 49, 47)),
];

const GRADIENT_COLORS: [(&str, [Rgb; 3]); 3] = [
    (
        "Bright Silver",
        [Rgb(189, 193, 196), Rgb(240, 240, 240), Rgb(189, 193, 196)],
    ),
    (
        "Pre-Weathered",
        [Rgb(129, 133, 136), Rgb(99, 99, 99), Rgb(129, 133, 136)],
    ),
    (
        "Copper Penny",
        [Rgb(172, 113, 71), Rgb(215, 125, 19), Rgb(172, 113, 71)],
    ),
];

/// One named palette row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub entry: ColorEntry,
}

/// Ordered color name table.
///
/// Deserializing goes through [`Palette::new`], so a palette read from any
/// serde format is checked the same way as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteEntry>", into = "Vec<PaletteEntry>")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl TryFrom<Vec<PaletteEntry>> for Palette {
    type Error = LabelError;

    fn try_from(entries: Vec<PaletteEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<Palette> for Vec<PaletteEntry> {
    fn from(palette: Palette) -> Self {
        palette.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Palette {
    /// First color of the standard table, preselected by the forms.
    pub const DEFAULT_COLOR: &'static str = FLAT_COLORS[0].0;

    /// The stock sheet colors: 23 flat, Mill Finish, then 3 gradients.
    pub fn standard() -> Self {
        let flat = FLAT_COLORS
            .iter()
            .map(|&(name, rgb)| (name, ColorEntry::Flat(rgb)));
        let mill = std::iter::once((MILL_FINISH, ColorEntry::MillFinish));
        let gradients = GRADIENT_COLORS.iter().map(|&(name, [start, middle, end])| {
            (
                name,
                ColorEntry::Gradient(GradientSpec::new(start, middle, end)),
            )
        });

        Self {
            entries: flat
                .chain(mill)
                .chain(gradients)
                .map(|(name, entry)| PaletteEntry {
                    name: name.to_string(),
                    entry,
                })
                .collect(),
        }
    }

    /// Build a palette from rows, rejecting empty, duplicate or reserved names.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        for (idx, row) in entries.iter().enumerate() {
            let name = row.name.trim();
            if name.is_empty() {
                return Err(LabelError::Palette {
                    message: format!("entry {} has an empty name", idx + 1),
                });
            }
            if name == OTHER {
                return Err(LabelError::Palette {
                    message: format!("'{}' is reserved for custom colors", OTHER),
                });
            }
            if entries[..idx].iter().any(|prev| prev.name.trim() == name) {
                return Err(LabelError::Palette {
                    message: format!("duplicate color '{}'", name),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Parse a palette from a JSON array of `{"name": ..., "entry": ...}` rows.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<PaletteEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find a color by exact name.
    pub fn lookup(&self, name: &str) -> Option<&ColorEntry> {
        self.entries
            .iter()
            .find(|row| row.name == name)
            .map(|row| &row.entry)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Color names in form order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|row| row.name.as_str())
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
