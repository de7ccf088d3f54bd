//! Session driver.
//!
//! One tick = measure `dt`, step, composite, present, and (while running)
//! ask for the next tick. The loop is edge-triggered: once the scene is
//! paused no further tick is requested, so there is nothing to cancel.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::assets::ResolvedAssets;
use crate::compositor::{Compositor, Frame};
use crate::config::RenderConfig;
use crate::state::SceneState;
use crate::stepper::step;

/// Delay between ticks while running (~20 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Receives finished frames for display.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// Arranges for the next tick to happen after a delay.
pub trait RepaintScheduler {
    fn schedule_tick(&mut self, delay: Duration);
}

/// Owns the scene state for one interactive session.
pub struct SessionDriver {
    state: SceneState,
    assets: ResolvedAssets,
    compositor: Compositor,
    started_at: Instant,
    last_tick: Instant,
}

impl SessionDriver {
    /// Starts a stopped session; `now` is the baseline for the first `dt`.
    pub fn new(config: RenderConfig, assets: ResolvedAssets, now: Instant) -> Result<Self> {
        Ok(Self {
            state: SceneState::default(),
            assets,
            compositor: Compositor::new(config)?,
            started_at: now,
            last_tick: now,
        })
    }

    #[inline]
    pub fn state(&self) -> SceneState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        self.compositor.config()
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.config().speed()
    }

    /// Applies a new scroll speed (sanitized) from the next tick on.
    pub fn set_speed(&mut self, px_per_sec: f64) -> f64 {
        let cfg = self.compositor.config_mut();
        cfg.set_speed(px_per_sec);
        log::debug!("speed set to {} px/s", cfg.speed());
        cfg.speed()
    }

    /// Swaps the sprite set; the scene state is left as it is.
    pub fn replace_assets(&mut self, assets: ResolvedAssets) {
        self.assets = assets;
    }

    #[inline]
    pub fn assets(&self) -> &ResolvedAssets {
        &self.assets
    }

    /// Flips run/stop at wall-clock time `now` and returns the new flag.
    ///
    /// Starting rebases the `dt` baseline to `now`, so time spent paused is
    /// not replayed as motion. Restarting the tick loop after this is the
    /// caller's job (request one tick); the driver keeps it going from there.
    pub fn toggle_running(&mut self, now: Instant) -> bool {
        let running = self.state.toggle_running();
        if running && now > self.last_tick {
            self.last_tick = now;
        }
        log::info!("scene {}", if running { "running" } else { "stopped" });
        running
    }

    /// Runs one tick at wall-clock time `now`.
    ///
    /// A clock that went backwards yields `dt = 0`.
    pub fn on_tick(
        &mut self,
        now: Instant,
        sink: &mut impl FrameSink,
        scheduler: &mut impl RepaintScheduler,
    ) -> Result<()> {
        let dt = now.saturating_duration_since(self.last_tick).as_secs_f64();
        if now > self.last_tick {
            self.last_tick = now;
        }

        self.state = step(self.state, dt, self.compositor.config());

        let clock = now.saturating_duration_since(self.started_at).as_secs_f64();
        let frame = self.compositor.render(&self.state, &self.assets, clock);

        log::trace!(
            "tick dt={dt:.4}s x={:.1} angle={:.1} frame={}",
            self.state.position,
            self.state.wheel_angle_deg,
            self.state.anim_frame_index
        );

        sink.present(&frame)?;

        if self.state.running {
            scheduler.schedule_tick(TICK_INTERVAL);
        }
        Ok(())
    }
}
