use std::time::{Duration, Instant};

/// A repeating interval timer driven by an explicit clock.
///
/// The engine never reads a hidden clock: the current `Instant` is threaded
/// in through every update path, so schedules are deterministic under test.
/// Holders cancel a timer by dropping the handle (an `Option<Timer>` field
/// set to `None`) — there is nothing to unregister.
#[derive(Debug, Clone)]
pub struct Timer {
    duration: Duration,
    last: Instant,
}

impl Timer {
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            duration,
            last: now,
        }
    }

    /// Restart the interval from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }

    /// Whether the interval has elapsed since the last reset.
    pub fn ringing(&self, now: Instant) -> bool {
        now.duration_since(self.last) >= self.duration
    }
}
