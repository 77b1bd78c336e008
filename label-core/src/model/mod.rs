//! Data model for label input.

mod color;
mod fields;

pub use color::{ColorEntry, GradientSpec, Rgb};
pub use fields::{
    ColorChoice, Gauge, LabelFields, Material, Status, MILL_FINISH, OTHER, UNKNOWN_COLOR,
};
