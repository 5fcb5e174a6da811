//! Frame-polled deadlines standing in for cancellable timeouts.

use std::time::{Duration, Instant};

/// A single pending deadline. Scheduling again replaces the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Deadline(Option<Instant>);

impl Deadline {
    pub(crate) fn schedule(&mut self, now: Instant, delay: Duration) {
        self.0 = Some(now + delay);
    }

    pub(crate) fn clear(&mut self) {
        self.0 = None;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Clears the deadline and returns `true` once `now` has reached it.
    pub(crate) fn take_expired(&mut self, now: Instant) -> bool {
        match self.0 {
            Some(at) if now >= at => {
                self.0 = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let start = Instant::now();
        let mut deadline = Deadline::default();
        deadline.schedule(start, Duration::from_millis(50));

        assert!(!deadline.take_expired(start + Duration::from_millis(49)));
        assert!(deadline.is_pending());
        assert!(deadline.take_expired(start + Duration::from_millis(50)));
        assert!(!deadline.is_pending());
        assert!(!deadline.take_expired(start + Duration::from_secs(1)));
    }

    #[test]
    fn clear_cancels() {
        let start = Instant::now();
        let mut deadline = Deadline::default();
        deadline.schedule(start, Duration::ZERO);
        deadline.clear();
        assert!(!deadline.take_expired(start));
    }

    #[test]
    fn reschedule_replaces() {
        let start = Instant::now();
        let mut deadline = Deadline::default();
        deadline.schedule(start, Duration::from_millis(10));
        deadline.schedule(start, Duration::from_millis(100));
        assert!(!deadline.take_expired(start + Duration::from_millis(10)));
        assert!(deadline.take_expired(start + Duration::from_millis(100)));
    }
}
