//! Carriage scene crate.
//!
//! Owns the deterministic part of the application: the scene state, the
//! stepper that advances it, the asset resolver, the CPU compositor and the
//! session driver that ties them into ticks. Presentation and scheduling are
//! reached only through the [`session::FrameSink`] and
//! [`session::RepaintScheduler`] traits.

pub mod assets;
pub mod compositor;
pub mod config;
pub mod figures;
pub mod raster;
pub mod session;
pub mod state;
pub mod stepper;

pub use assets::{AssetError, AssetSource, ResolvedAssets, Sprite};
pub use compositor::{Compositor, Frame};
pub use config::RenderConfig;
pub use session::{FrameSink, RepaintScheduler, SessionDriver, TICK_INTERVAL};
pub use state::SceneState;
pub use stepper::step;
