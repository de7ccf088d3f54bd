//! Input adapters around the run/stop toggle.
//!
//! The click surface is debounced; the keyboard toggle is not (key repeat is
//! already filtered out by the input layer).

use std::time::{Duration, Instant};

/// Accepted clicks must be spaced strictly more than this apart.
pub const CLICK_DEBOUNCE: Duration = Duration::from_millis(150);

/// Accepts a press only if the previous accepted press is more than `window` old.
///
/// Rejected presses do not restart the window.
#[derive(Debug, Clone)]
pub struct DebouncedToggle {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl DebouncedToggle {
    pub fn new(window: Duration) -> Self {
        Self { window, last_accepted: None }
    }

    /// Returns `true` if the press at `now` should toggle.
    pub fn accept(&mut self, now: Instant) -> bool {
        let open = match self.last_accepted {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.window,
        };
        if open {
            self.last_accepted = Some(now);
        }
        open
    }
}

impl Default for DebouncedToggle {
    fn default() -> Self {
        Self::new(CLICK_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn first_click_is_accepted() {
        assert!(DebouncedToggle::default().accept(Instant::now()));
    }

    #[test]
    fn double_click_inside_window_toggles_once() {
        let t0 = Instant::now();
        let mut d = DebouncedToggle::default();
        assert!(d.accept(t0));
        assert!(!d.accept(t0 + 40 * MS));
        assert!(!d.accept(t0 + 149 * MS));
        assert!(d.accept(t0 + 151 * MS));
    }

    #[test]
    fn click_exactly_at_window_edge_is_rejected() {
        let t0 = Instant::now();
        let mut d = DebouncedToggle::default();
        assert!(d.accept(t0));
        assert!(!d.accept(t0 + CLICK_DEBOUNCE));
        assert!(d.accept(t0 + CLICK_DEBOUNCE + MS));
    }

    #[test]
    fn rejected_clicks_do_not_extend_window() {
        let t0 = Instant::now();
        let mut d = DebouncedToggle::default();
        assert!(d.accept(t0));
        for i in 1..5 {
            assert!(!d.accept(t0 + i * 30 * MS));
        }
        assert!(d.accept(t0 + 160 * MS));
    }

    #[test]
    fn clock_going_backwards_is_rejected() {
        let t0 = Instant::now();
        let mut d = DebouncedToggle::default();
        assert!(d.accept(t0 + 500 * MS));
        assert!(!d.accept(t0));
    }
}
