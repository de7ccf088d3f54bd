//! Paint model: colors as the GPU side expects them.

pub mod color;

pub use color::{srgb_to_linear, Color};
