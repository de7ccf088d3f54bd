//! Frame compositor.
//!
//! Layers, back to front: background, ground strip, horse (sprite or vector),
//! carriage (sprite plus wheels, or vector). The canvas is allocated once and
//! reused for every frame.

use anyhow::{Context, Result};

use crate::assets::ResolvedAssets;
use crate::config::RenderConfig;
use crate::figures::{draw_fallback_carriage, draw_fallback_horse, draw_ground, draw_wheel};
use crate::raster::Canvas;
use crate::state::SceneState;

// ── layout ────────────────────────────────────────────────────────────────

/// Nominal size of the vector horse.
pub const HORSE_SIZE: (f32, f32) = (220.0, 140.0);
/// Nominal size of the vector carriage.
pub const CARRIAGE_SIZE: (f32, f32) = (260.0, 150.0);

/// Horse anchor relative to `(position, ground_y)`; places the feet on the ground.
pub const HORSE_OFFSET: (f32, f32) = (-40.0, -HORSE_SIZE.1 + 30.0);
/// Carriage anchor relative to `(position, ground_y)`.
pub const CARRIAGE_OFFSET: (f32, f32) = (120.0, -CARRIAGE_SIZE.1 + 50.0);

/// Distance from the carriage anchor's bottom to the axle line.
const AXLE_LIFT: f32 = 10.0;
/// Inset of the wheels drawn over a carriage sprite, from either side.
const SPRITE_WHEEL_INSET: f32 = 50.0;

/// Peak vertical bounce of a horse sprite, in pixels.
pub const BOUNCE_AMPLITUDE: f64 = 3.0;
/// Angular rate of the bounce, in radians per second of wall-clock time.
pub const BOUNCE_RATE: f64 = 6.0;

/// Finished RGBA8 frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height * 4` bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the RGBA value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.pixels.get(i..i + 4).and_then(|p| p.try_into().ok())
    }
}

/// Vertical sprite bounce for a wall-clock time in seconds.
#[inline]
pub fn bounce_offset(clock_seconds: f64) -> f64 {
    BOUNCE_AMPLITUDE * (clock_seconds * BOUNCE_RATE).sin()
}

pub struct Compositor {
    config: RenderConfig,
    canvas: Canvas,
}

impl Compositor {
    pub fn new(config: RenderConfig) -> Result<Self> {
        let canvas = Canvas::new(config.canvas_width, config.canvas_height).with_context(|| {
            format!(
                "cannot allocate a {}x{} canvas",
                config.canvas_width, config.canvas_height
            )
        })?;
        Ok(Self { config, canvas })
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Keeps the canvas; only non-geometry fields (speed) may differ.
    pub(crate) fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    /// Renders one frame.
    ///
    /// `clock_seconds` is wall-clock time and only drives the sprite bounce,
    /// so the horse keeps breathing while the scene is paused.
    pub fn render(&mut self, state: &SceneState, assets: &ResolvedAssets, clock_seconds: f64) -> Frame {
        let cfg = &self.config;
        let canvas = &mut self.canvas;
        let ground_y = cfg.ground_y;

        canvas.clear(cfg.background);
        draw_ground(canvas, ground_y, state.position);

        // Anchors are truncated to whole pixels before drawing.
        let hx = (state.position + HORSE_OFFSET.0 as f64) as i32;
        let hy = (ground_y + HORSE_OFFSET.1) as i32;

        match assets.horse_frame(state.anim_frame_index) {
            Some(sprite) => {
                let y = (hy as f64 + bounce_offset(clock_seconds)) as i32;
                canvas.composite(sprite.pixmap(), hx, y);
            }
            None => draw_fallback_horse(
                canvas,
                hx as f32,
                hy as f32 + HORSE_SIZE.1,
                state.anim_frame_index,
            ),
        }

        let cx = (state.position + CARRIAGE_OFFSET.0 as f64) as i32;
        let cy = (ground_y + CARRIAGE_OFFSET.1) as i32;
        let axle_y = cy as f32 + CARRIAGE_SIZE.1 - AXLE_LIFT;

        match assets.carriage() {
            Some(sprite) => {
                canvas.composite(sprite.pixmap(), cx, cy);
                // Carriage sprites are drawn without wheels; add rotating ones.
                let left = cx as f32 + SPRITE_WHEEL_INSET;
                let right = cx as f32 + sprite.width() as f32 - SPRITE_WHEEL_INSET;
                for wx in [left, right] {
                    draw_wheel(canvas, wx, axle_y, cfg.wheel_radius, state.wheel_angle_deg);
                }
            }
            None => draw_fallback_carriage(
                canvas,
                cx as f32,
                axle_y,
                cfg.wheel_radius,
                state.wheel_angle_deg,
            ),
        }

        Frame {
            width: canvas.width(),
            height: canvas.height(),
            pixels: canvas.data().to_vec(),
        }
    }
}
