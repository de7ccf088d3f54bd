//! GPU device + surface management.
//!
//! Creates the wgpu Instance/Adapter/Device/Queue for a window, keeps the
//! surface configured across resizes, and hands out per-frame encoders.

mod gpu;

pub use gpu::{surface_error_action, Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
