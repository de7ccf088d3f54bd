//! Physics/animation stepper.
//!
//! Pure over its inputs: no clock reads, no I/O. Motion is constant velocity,
//! so a single Euler step is exact for any `dt`.

use crate::config::RenderConfig;
use crate::state::SceneState;

/// Ceiling at which the animation counter wraps.
///
/// 10080 is divisible by every frame count from 1 to 10 (and by the 6-phase
/// fallback gait), so the wrap never shows as a hitch for typical sprite sets.
pub const ANIM_INDEX_CEILING: u64 = 10_080;

/// Once the scene has scrolled this far past the right edge it loops.
pub const WRAP_LEAD_PX: f64 = 300.0;

/// Position the scene restarts from after looping (off-screen left).
pub const WRAP_RESET_POSITION: f64 = -400.0;

/// Advances `state` by `dt` seconds.
///
/// A stopped state is returned unchanged. Negative or NaN `dt` counts as zero.
pub fn step(state: SceneState, dt: f64, config: &RenderConfig) -> SceneState {
    if !state.running {
        return state;
    }

    let dt = sanitize_dt(dt);
    let travel = config.speed() * dt;

    let mut position = state.position + travel;
    if position - WRAP_LEAD_PX > config.canvas_width as f64 {
        position = WRAP_RESET_POSITION;
    }

    let wheel_angle_deg = normalize_degrees(state.wheel_angle_deg + travel * config.degrees_per_px());

    SceneState {
        position,
        wheel_angle_deg,
        anim_frame_index: advance_frame_index(state.anim_frame_index, config.anim_fps * dt),
        running: true,
    }
}

/// Clamps a measured delta to a usable, non-negative value.
#[inline]
pub fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_nan() || dt < 0.0 { 0.0 } else { dt }
}

/// Reduces an angle into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// At least one frame per tick, otherwise `round(frames)`; the float to int
/// cast saturates, so huge deltas cannot overflow.
fn advance_frame_index(index: u64, frames: f64) -> u64 {
    let advance = (frames.round() as u64).max(1);
    (index % ANIM_INDEX_CEILING + advance % ANIM_INDEX_CEILING) % ANIM_INDEX_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> SceneState {
        SceneState { running: true, ..SceneState::default() }
    }

    // ── paused ────────────────────────────────────────────────────────────

    #[test]
    fn stopped_state_is_identity() {
        let cfg = RenderConfig::default();
        let s = SceneState { position: 123.5, wheel_angle_deg: 17.0, anim_frame_index: 9, running: false };
        for dt in [0.0, 0.05, 3.0, 1.0e6, -2.0] {
            assert_eq!(step(s, dt, &cfg), s);
        }
    }

    // ── translation ───────────────────────────────────────────────────────

    #[test]
    fn position_advances_by_speed_times_dt() {
        let cfg = RenderConfig::default().with_speed(300.0);
        for dt in [0.0, 0.016, 0.05, 0.25, 1.5] {
            let s = running();
            let next = step(s, dt, &cfg);
            assert_eq!(next.position, s.position + cfg.speed() * dt);
        }
    }

    #[test]
    fn negative_dt_freezes_motion_but_still_counts_a_frame() {
        let cfg = RenderConfig::default();
        let s = running();
        let next = step(s, -0.5, &cfg);
        assert_eq!(next.position, s.position);
        assert_eq!(next.wheel_angle_deg, s.wheel_angle_deg);
        assert_eq!(next.anim_frame_index, 1);
    }

    #[test]
    fn wraps_to_reset_position_past_right_edge() {
        let cfg = RenderConfig::default().with_speed(300.0);
        let s = SceneState { position: 1250.0, ..running() };
        // 1250 + 30 = 1280, 1280 - 300 = 980 > 960
        let next = step(s, 0.1, &cfg);
        assert_eq!(next.position, WRAP_RESET_POSITION);
    }

    #[test]
    fn does_not_wrap_at_exact_threshold() {
        let cfg = RenderConfig::default().with_speed(300.0);
        let s = SceneState { position: 1230.0, ..running() };
        // 1230 + 30 = 1260, 1260 - 300 = 960, not strictly greater
        assert_eq!(step(s, 0.1, &cfg).position, 1260.0);
    }

    #[test]
    fn huge_dt_is_a_single_exact_step() {
        let cfg = RenderConfig::default().with_speed(100.0);
        let s = SceneState { position: -400.0, ..running() };
        let next = step(s, 10.0, &cfg);
        // -400 + 1000 = 600: still on screen, no wrap.
        assert_eq!(next.position, 600.0);
        assert!(next.wheel_angle_deg >= 0.0 && next.wheel_angle_deg < 360.0);
        assert_eq!(next.anim_frame_index, 100);
    }

    // ── wheel ─────────────────────────────────────────────────────────────

    #[test]
    fn wheel_angle_tracks_arc_length() {
        let cfg = RenderConfig::default();
        let next = step(running(), 0.1, &cfg);
        let expected = 24.0 * 360.0 / (2.0 * std::f64::consts::PI * 30.0);
        assert!((next.wheel_angle_deg - expected).abs() < 1e-9);
        assert!((next.wheel_angle_deg - 45.84).abs() < 0.01);
    }

    #[test]
    fn wheel_angle_stays_in_range_over_many_steps() {
        let cfg = RenderConfig::default().with_speed(800.0);
        let mut s = running();
        for i in 0..2_000 {
            let dt = 0.013 * (i % 7) as f64 + 0.001;
            s = step(s, dt, &cfg);
            assert!(s.wheel_angle_deg >= 0.0 && s.wheel_angle_deg < 360.0, "angle {}", s.wheel_angle_deg);
        }
    }

    #[test]
    fn normalize_degrees_handles_edges() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-1.0e-20), 0.0);
        assert_eq!(normalize_degrees(f64::NAN), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }

    // ── animation cadence ─────────────────────────────────────────────────

    #[test]
    fn frame_index_advances_at_least_once_per_tick() {
        let cfg = RenderConfig::default();
        assert_eq!(step(running(), 0.001, &cfg).anim_frame_index, 1);
        assert_eq!(step(running(), 0.1, &cfg).anim_frame_index, 1);
        assert_eq!(step(running(), 0.26, &cfg).anim_frame_index, 3);
    }

    #[test]
    fn frame_index_wraps_at_ceiling() {
        let cfg = RenderConfig::default();
        let s = SceneState { anim_frame_index: ANIM_INDEX_CEILING - 1, ..running() };
        assert_eq!(step(s, 0.1, &cfg).anim_frame_index, 0);
    }

    #[test]
    fn frame_index_survives_absurd_dt() {
        let cfg = RenderConfig::default();
        let next = step(running(), 1.0e300, &cfg);
        assert!(next.anim_frame_index < ANIM_INDEX_CEILING);
    }
}
