/// Mutable animation state of one interactive session.
///
/// Treated as a value: the stepper takes a state and returns the next one.
/// The session driver is the only owner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneState {
    /// Scene-space horizontal offset in pixels.
    pub position: f64,

    /// Wheel rotation in degrees, kept in `[0, 360)`.
    pub wheel_angle_deg: f64,

    /// Free-running animation counter; reduced modulo the frame count at draw time.
    pub anim_frame_index: u64,

    pub running: bool,
}

impl SceneState {
    pub const INITIAL_POSITION: f64 = 60.0;

    /// Flips the running flag and returns the new value.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            position: Self::INITIAL_POSITION,
            wheel_angle_deg: 0.0,
            anim_frame_index: 0,
            running: false,
        }
    }
}
