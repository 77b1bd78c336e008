//! Error types for label rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Classification of label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No configured font could be loaded (falls back to the bundled face)
    FontUnavailable,
    /// Uploaded swatch image missing or undecodable (swatch left blank)
    ImageLoadFailure,
    /// Malformed custom color hex string
    InvalidCustomColor,
    /// Form field with a value outside its allowed set
    InvalidValue,
    /// Palette definition could not be used
    Palette,
    /// Reading or writing a file failed
    Io,
    /// PNG encoding failed
    Encode,
}

/// Main error type for label rendering.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("No usable font found (tried: {tried})")]
    FontUnavailable { tried: String },

    #[error("Invalid font data in {path}: {message}")]
    InvalidFont { path: PathBuf, message: String },

    #[error("Failed to load swatch image: {message}")]
    ImageLoad { message: String },

    #[error("Invalid custom color '{value}': expected #rrggbb")]
    InvalidCustomColor { value: String },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Invalid palette: {message}")]
    Palette { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl LabelError {
    /// Get the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LabelError::FontUnavailable { .. } => ErrorKind::FontUnavailable,
            LabelError::InvalidFont { .. } => ErrorKind::FontUnavailable,
            LabelError::ImageLoad { .. } => ErrorKind::ImageLoadFailure,
            LabelError::InvalidCustomColor { .. } => ErrorKind::InvalidCustomColor,
            LabelError::InvalidValue { .. } => ErrorKind::InvalidValue,
            LabelError::Palette { .. } => ErrorKind::Palette,
            LabelError::Json(_) => ErrorKind::Palette,
            LabelError::Io(_) => ErrorKind::Io,
            LabelError::Encode(_) => ErrorKind::Encode,
        }
    }

    /// Whether the renderer degrades instead of failing on this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::FontUnavailable | ErrorKind::ImageLoadFailure
        )
    }
}

/// Result type alias for label operations.
pub type Result<T> = std::result::Result<T, LabelError>;
