//! Time subsystem.
//!
//! - `FrameClock` stamps each presented frame with a monotonic timestamp.
//! - `TickSchedule` holds the single pending redraw deadline of a window.

mod frame_clock;
mod schedule;

pub use frame_clock::{FrameClock, FrameTime};
pub use schedule::TickSchedule;
