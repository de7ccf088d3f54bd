//! Asset resolver.
//!
//! Turns user-supplied encoded images into ready-to-composite sprites. Every
//! failure is local to one file: it is logged and dropped, and an empty result
//! simply switches the compositor to vector fallback drawing.

mod resolve;
mod source;
mod sprite;

pub use resolve::{fit_width, resolve, ResolvedAssets, CARRIAGE_MAX_WIDTH, HORSE_MAX_WIDTH};
pub use source::{AssetError, AssetSource};
pub use sprite::Sprite;
