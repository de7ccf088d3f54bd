//! Geometry shared by the presenter and the runtime.
//!
//! Canonical CPU space is physical surface pixels, origin top-left, +X right,
//! +Y down. The presenter converts to NDC in its shader.

mod rect;
mod viewport;

pub use rect::Rect;
pub use viewport::Viewport;
