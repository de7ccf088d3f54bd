//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single studio window, wires them to the
//! GPU layer, and turns scheduled ticks into redraws.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
