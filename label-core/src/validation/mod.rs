//! Validation module.

mod validate;

pub use validate::{validate_fields, ValidationResult};
