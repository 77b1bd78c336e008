//! Swatch colors: RGB triples, gradient stops and palette entries.

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Parse a `#rrggbb` color-picker value. The leading `#` is optional.
    pub fn from_hex(value: &str) -> Result<Self> {
        let invalid = || LabelError::InvalidCustomColor {
            value: value.to_string(),
        };

        let digits = value.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Interpolate from `self` towards `to`, truncating each channel.
    ///
    /// `t` is not clamped; results outside `0..=255` saturate.
    pub fn lerp(&self, to: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
        Rgb(mix(self.0, to.0), mix(self.1, to.1), mix(self.2, to.2))
    }

    pub fn to_pixel(&self) -> image::Rgb<u8> {
        image::Rgb([self.0, self.1, self.2])
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb(c[0], c[1], c[2])
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(p: image::Rgb<u8>) -> Self {
        Rgb(p[0], p[1], p[2])
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Three-stop vertical gradient (start, middle, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradientSpec {
    pub stops: [Rgb; 3],
}

impl GradientSpec {
    pub fn new(start: Rgb, middle: Rgb, end: Rgb) -> Self {
        Self {
            stops: [start, middle, end],
        }
    }

    pub fn start(&self) -> Rgb {
        self.stops[0]
    }

    pub fn middle(&self) -> Rgb {
        self.stops[1]
    }

    pub fn end(&self) -> Rgb {
        self.stops[2]
    }
}

/// What a palette name paints into the swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorEntry {
    /// Flat fill.
    Flat(Rgb),
    /// Brushed or weathered metal approximation.
    Gradient(GradientSpec),
    /// Swatch comes from an uploaded photo.
    MillFinish,
}
