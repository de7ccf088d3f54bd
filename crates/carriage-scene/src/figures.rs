//! Stateless scene figures: wheel, ground strip and the vector fallbacks.
//!
//! Each routine draws into a [`Canvas`] from explicit inputs only (anchor,
//! angle, phase), so the same state always yields the same pixels.

use crate::raster::{Canvas, Rgb};

// ── palette ───────────────────────────────────────────────────────────────

const WHEEL: Rgb = Rgb(30, 30, 30);
const GROUND_FILL: Rgb = Rgb(200, 220, 230);
const GROUND_LINE: Rgb = Rgb(170, 190, 200);
const BUSH: Rgb = Rgb(190, 210, 220);
const HORSE_COAT: Rgb = Rgb(90, 80, 60);
const HORSE_TAIL: Rgb = Rgb(70, 60, 45);
const HORSE_LEG: Rgb = Rgb(60, 50, 40);
const CARRIAGE_BODY: Rgb = Rgb(40, 60, 85);
const CARRIAGE_WINDOW: Rgb = Rgb(220, 235, 250);
const YOKE: Rgb = Rgb(60, 60, 60);

// ── wheel ─────────────────────────────────────────────────────────────────

/// Spoke directions before rotation, in degrees.
pub const SPOKE_BASE_ANGLES: [f32; 4] = [0.0, 45.0, 90.0, 135.0];
const HUB_RADIUS: f32 = 5.0;

/// Rim outline, four rotated spokes and a filled hub.
pub fn draw_wheel(canvas: &mut Canvas, cx: f32, cy: f32, radius: f32, angle_deg: f64) {
    canvas.stroke_circle(cx, cy, radius, 3.0, WHEEL);
    for base in SPOKE_BASE_ANGLES {
        let (x2, y2) = polar(cx, cy, radius, base as f64 + angle_deg);
        canvas.line(cx, cy, x2, y2, 2.0, WHEEL);
    }
    canvas.fill_circle(cx, cy, HUB_RADIUS, WHEEL);
}

// ── ground ────────────────────────────────────────────────────────────────

/// Horizontal spacing of the background bushes.
pub const BUSH_SPACING: f64 = 160.0;
/// Fraction of the foreground scroll applied to the bushes.
pub const BUSH_PARALLAX: f64 = 0.1;
pub const BUSH_COUNT: usize = 8;

/// Left edge of bush `i` for a given scene position.
pub fn bush_x(i: usize, position: f64) -> i32 {
    (i as f64 * BUSH_SPACING - (position * BUSH_PARALLAX).rem_euclid(BUSH_SPACING)) as i32
}

/// Ground band, ground line and the parallax bush row.
pub fn draw_ground(canvas: &mut Canvas, ground_y: f32, position: f64) {
    let w = canvas.width() as f32;
    let h = canvas.height() as f32;

    canvas.fill_rect(0.0, ground_y + 1.0, w, h, GROUND_FILL);
    canvas.line(0.0, ground_y, w, ground_y, 3.0, GROUND_LINE);

    for i in 0..BUSH_COUNT {
        let x = bush_x(i, position) as f32;
        canvas.fill_ellipse(x, ground_y - 26.0, x + 140.0, ground_y + 14.0, BUSH);
    }
}

// ── fallback horse ────────────────────────────────────────────────────────

/// Leg swing offsets in degrees, one per gait phase.
pub const GAIT_PHASES: [f32; 6] = [-15.0, 0.0, 15.0, -10.0, 10.0, 0.0];
const LEG_LENGTH: f32 = 55.0;

/// Leg swing for a free-running animation index.
pub fn gait_phase(anim_index: u64) -> f32 {
    GAIT_PHASES[(anim_index % GAIT_PHASES.len() as u64) as usize]
}

/// Vector horse facing right. `(x, feet_y)` is the left edge of the body and
/// the line its hooves stand on.
pub fn draw_fallback_horse(canvas: &mut Canvas, x: f32, feet_y: f32, anim_index: u64) {
    let phase = gait_phase(anim_index);
    let y = feet_y;

    // body, neck, head, eye
    canvas.fill_ellipse(x, y - 60.0, x + 140.0, y, HORSE_COAT);
    canvas.fill_rect(x + 110.0, y - 95.0, x + 126.0, y - 55.0, HORSE_COAT);
    canvas.fill_ellipse(x + 115.0, y - 105.0, x + 155.0, y - 75.0, HORSE_COAT);
    canvas.fill_ellipse(x + 143.0, y - 96.0, x + 149.0, y - 90.0, Rgb::BLACK);

    canvas.line(x + 10.0, y - 40.0, x - 10.0, y - 65.0, 6.0, HORSE_TAIL);

    // front pair then rear pair; each pair swings in opposition
    draw_leg(canvas, x + 120.0, y - 5.0, 90.0 + phase);
    draw_leg(canvas, x + 105.0, y - 5.0, 90.0 - phase);
    draw_leg(canvas, x + 25.0, y - 2.0, 90.0 - phase);
    draw_leg(canvas, x + 40.0, y - 2.0, 90.0 + phase);
}

fn draw_leg(canvas: &mut Canvas, x: f32, y: f32, angle_deg: f32) {
    let (x2, y2) = polar(x, y, LEG_LENGTH, angle_deg as f64);
    canvas.line(x, y, x2, y2, 8.0, HORSE_LEG);
}

// ── fallback carriage ─────────────────────────────────────────────────────

/// Wheel centres of the vector carriage, relative to its left edge.
pub const FALLBACK_WHEEL_OFFSETS: [f32; 2] = [50.0, 160.0];

/// Vector carriage. `(x, axle_y)` is the left edge of the body and the wheel
/// centre line.
pub fn draw_fallback_carriage(
    canvas: &mut Canvas,
    x: f32,
    axle_y: f32,
    wheel_radius: f32,
    wheel_angle_deg: f64,
) {
    let y = axle_y;

    canvas.fill_rounded_rect(x, y - 90.0, x + 200.0, y, 12.0, CARRIAGE_BODY);
    canvas.fill_rounded_rect(x + 20.0, y - 80.0, x + 80.0, y - 40.0, 6.0, CARRIAGE_WINDOW);
    canvas.fill_rounded_rect(x + 90.0, y - 80.0, x + 150.0, y - 40.0, 6.0, CARRIAGE_WINDOW);

    canvas.line(x + 200.0, y - 40.0, x + 260.0, y - 60.0, 6.0, YOKE);

    for dx in FALLBACK_WHEEL_OFFSETS {
        draw_wheel(canvas, x + dx, y, wheel_radius, wheel_angle_deg);
    }
}

fn polar(cx: f32, cy: f32, length: f32, angle_deg: f64) -> (f32, f32) {
    let a = angle_deg.to_radians();
    (
        cx + length * a.cos() as f32,
        cy + length * a.sin() as f32,
    )
}
