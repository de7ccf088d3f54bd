//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates window events into `InputEvent`s.

mod types;

pub use types::{ButtonState, InputEvent, Key, MouseButton, PointerButtonEvent};
