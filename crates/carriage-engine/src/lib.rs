//! Carriage engine crate.
//!
//! Platform + GPU runtime for the carriage studio: one window, a deadline
//! driven redraw loop, and a presenter that letterboxes CPU-rendered frames
//! onto the surface.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
