use std::time::{Duration, Instant};

/// Deadline after which the feedback message is replaced by the status symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackTimer {
    until: Option<Instant>,
}

impl FeedbackTimer {
    /// Start (or restart) the timer.
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
    }

    /// Pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.until
    }

    /// Returns true once when the deadline has passed, then clears it.
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.until {
            Some(until) if now >= until => {
                self.until = None;
                true
            }
            _ => false,
        }
    }
}
