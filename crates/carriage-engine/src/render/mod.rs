//! GPU rendering subsystem.
//!
//! Frames are produced on the CPU; the GPU side only uploads and blits them.
//!
//! Convention:
//! - CPU geometry is in physical surface pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod present;

pub use ctx::{RenderCtx, RenderTarget};
pub use present::{FramePresenter, ImageRef};
