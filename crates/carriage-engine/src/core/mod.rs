//! Core engine-facing contracts.
//!
//! The interface between the runtime (platform loop) and the application:
//! input callbacks, the per-frame context, and the control directive both
//! return.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
