//! Debounced persistence scheduling.

use std::time::{Duration, Instant};

/// Deadline state machine behind the store's debounced writes.
///
/// Two states: idle (no deadline) and pending (deadline armed).
/// Scheduling while pending replaces the deadline, so a burst of
/// mutations collapses into a single write after the last one goes
/// quiet for the configured delay.
#[derive(Debug)]
pub struct PersistScheduler {
    delay: Duration,
    deadline: Option<Instant>,
}

impl PersistScheduler {
    /// Create an idle scheduler with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the deadline at `now + delay`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any armed deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True while a deadline is armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// If the armed deadline has elapsed, clear it and report true.
    ///
    /// Firing clears the state, so a single quiet period produces
    /// exactly one fire no matter how often this is polled.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
