use std::time::Instant;

/// Frame timing snapshot.
///
/// No delta is carried here: consumers measure their own `dt` from `now`, so
/// a paused consumer does not see time advance behind its back.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots, one per window.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps a frame with the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Stamps a frame with an explicit timestamp.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let ft = FrameTime { now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_from_zero() {
        let mut clock = FrameClock::new();
        let t = Instant::now();
        assert_eq!(clock.tick_at(t).frame_index, 0);
        assert_eq!(clock.tick_at(t).frame_index, 1);
    }

    #[test]
    fn timestamp_is_passed_through() {
        let mut clock = FrameClock::new();
        let t = Instant::now();
        assert_eq!(clock.tick_at(t).now, t);
    }
}
