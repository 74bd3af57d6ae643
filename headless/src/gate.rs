use std::time::{Duration, Instant};

/// Fixed-timestep gate: lets a tick through once strictly more than
/// `interval` has passed since the last accepted one.
#[derive(Debug, Clone, Copy)]
pub struct TickGate {
    interval: Duration,
    last: Instant,
}

impl TickGate {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) > self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Time left before the gate can open
    pub fn until_next(&self, now: Instant) -> Duration {
        (self.last + self.interval).saturating_duration_since(now)
    }
}
