// Double-tap detection for the toggle gesture
//
// A press inside the window of the previous press counts as a repeat.
// After a repeat the cycle starts fresh, so a third rapid press is a new first press.

use std::time::{Duration, Instant};

/// Default time window for double-tap detection (300ms)
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Detects double-tap patterns within a configurable time window
#[derive(Debug, Clone)]
pub struct DoubleTapDetector {
    /// Time of the last tap (None if no tap recorded)
    last_tap_time: Option<Instant>,
    /// Time window for double-tap detection
    window: Duration,
}

impl Default for DoubleTapDetector {
    fn default() -> Self {
        Self::with_window(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

impl DoubleTapDetector {
    /// Create a new DoubleTapDetector with custom window duration
    pub fn with_window(window_ms: u64) -> Self {
        Self {
            last_tap_time: None,
            window: Duration::from_millis(window_ms),
        }
    }

    /// Handle a tap happening now
    ///
    /// Returns true if this tap completes a double-tap.
    pub fn on_tap(&mut self) -> bool {
        self.on_tap_at(Instant::now())
    }

    /// Handle a tap at an explicit instant
    pub fn on_tap_at(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_tap_time {
            if now.saturating_duration_since(last) <= self.window {
                self.last_tap_time = None;
                return true;
            }
        }

        self.last_tap_time = Some(now);
        false
    }

    /// Reset the detector state
    ///
    /// Call this when the context changes (e.g., profile switched)
    /// to prevent stale taps from affecting future detection.
    pub fn reset(&mut self) {
        self.last_tap_time = None;
    }

    pub fn window_ms(&self) -> u64 {
        self.window.as_millis() as u64
    }
}

#[cfg(test)]
#[path = "double_tap_test.rs"]
mod tests;
