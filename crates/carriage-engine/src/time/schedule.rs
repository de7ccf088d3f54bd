use std::time::{Duration, Instant};

/// At most one pending redraw deadline.
///
/// A later request never pushes an earlier deadline back; the earliest wins.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TickSchedule {
    deadline: Option<Instant>,
}

impl TickSchedule {
    /// Requests a tick `delay` after `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration) {
        let at = now + delay;
        self.deadline = Some(match self.deadline {
            Some(existing) if existing <= at => existing,
            _ => at,
        });
    }

    /// Drops the pending deadline, if any.
    #[inline]
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consumes the deadline if it has passed at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if at <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
