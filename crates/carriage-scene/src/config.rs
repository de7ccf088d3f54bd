use std::f64::consts::PI;

use crate::raster::Rgb;

/// Lowest scroll speed the speed control allows, in px/s.
pub const SPEED_MIN: f64 = 60.0;
/// Highest scroll speed the speed control allows, in px/s.
pub const SPEED_MAX: f64 = 800.0;
/// Speed used at startup and whenever a supplied speed is unusable.
pub const DEFAULT_SPEED: f64 = 240.0;
/// Granularity of the speed control.
pub const SPEED_STEP: f64 = 10.0;

/// Static scene configuration plus the one user-adjustable value (speed).
///
/// Geometry is in canvas pixels, top-left origin, +Y down.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,

    /// Y coordinate of the ground line.
    pub ground_y: f32,

    /// Wheel radius; also drives the rolling-angle conversion.
    pub wheel_radius: f32,

    /// Horse animation cadence in frames per second.
    pub anim_fps: f64,

    pub background: Rgb,

    /// Scroll speed in px/s. Always within `[SPEED_MIN, SPEED_MAX]`.
    speed: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let canvas_height = 540;
        Self {
            canvas_width: 960,
            canvas_height,
            ground_y: (canvas_height - 120) as f32,
            wheel_radius: 30.0,
            anim_fps: 10.0,
            background: Rgb(235, 245, 255),
            speed: DEFAULT_SPEED,
        }
    }
}

impl RenderConfig {
    /// Returns a config with the given speed (sanitized, see [`sanitize_speed`]).
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.set_speed(speed);
        self
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = sanitize_speed(speed);
    }

    /// Degrees of wheel rotation per pixel of travel (rolling without slip).
    #[inline]
    pub fn degrees_per_px(&self) -> f64 {
        360.0 / (2.0 * PI * self.wheel_radius as f64)
    }
}

/// Maps any requested speed onto a usable one.
///
/// Non-finite or non-positive values fall back to [`DEFAULT_SPEED`]; finite
/// positive values are clamped into `[SPEED_MIN, SPEED_MAX]`.
pub fn sanitize_speed(speed: f64) -> f64 {
    if !speed.is_finite() || speed <= 0.0 {
        DEFAULT_SPEED
    } else {
        speed.clamp(SPEED_MIN, SPEED_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_canvas_layout() {
        let c = RenderConfig::default();
        assert_eq!((c.canvas_width, c.canvas_height), (960, 540));
        assert_eq!(c.ground_y, 420.0);
        assert_eq!(c.speed(), DEFAULT_SPEED);
    }

    #[test]
    fn unusable_speed_falls_back_to_default() {
        assert_eq!(sanitize_speed(0.0), DEFAULT_SPEED);
        assert_eq!(sanitize_speed(-30.0), DEFAULT_SPEED);
        assert_eq!(sanitize_speed(f64::NAN), DEFAULT_SPEED);
        assert_eq!(sanitize_speed(f64::INFINITY), DEFAULT_SPEED);
    }

    #[test]
    fn speed_is_clamped_into_control_range() {
        assert_eq!(sanitize_speed(10.0), SPEED_MIN);
        assert_eq!(sanitize_speed(5000.0), SPEED_MAX);
        assert_eq!(sanitize_speed(300.0), 300.0);
    }

    #[test]
    fn degrees_per_px_for_default_wheel() {
        let c = RenderConfig::default();
        let expected = 360.0 / (2.0 * PI * 30.0);
        assert!((c.degrees_per_px() - expected).abs() < 1e-12);
    }
}
