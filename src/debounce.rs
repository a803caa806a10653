//! Single-slot debouncing of rapid filter changes.
//!
//! Every [`Debouncer::schedule`] call replaces the pending value and pushes the
//! deadline out. Only the latest value is ever released, once its delay has
//! elapsed without a newer call.

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Identifies one scheduled value; stale once a newer value is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingToken(u64);

#[derive(Debug)]
struct Pending<T> {
    token: PendingToken,
    deadline: Instant,
    value: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stores `value` as the only pending one, superseding anything scheduled before.
    pub fn schedule(&mut self, value: T, now: Instant) -> PendingToken {
        self.generation += 1;
        let token = PendingToken(self.generation);
        if self.pending.is_some() {
            log::debug!("Superseding pending value with generation {}", self.generation);
        }
        self.pending = Some(Pending {
            token,
            deadline: now + self.delay,
            value,
        });
        token
    }

    /// Whether `token` still refers to the pending value.
    pub fn is_current(&self, token: PendingToken) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.token == token)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending value is due, `None` when nothing is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }

    /// Releases the pending value when its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if due { self.flush() } else { None }
    }

    /// Releases the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_released_before_the_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule("a", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), Some("a"));
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn last_value_within_the_window_wins() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let first = debouncer.schedule("a", start);
        debouncer.schedule("b", start + Duration::from_millis(100));
        let last = debouncer.schedule("c", start + Duration::from_millis(200));

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(last));
        // Deadline moved with the last call.
        assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("c"));
        assert!(!debouncer.is_current(last));
    }

    #[test]
    fn flush_and_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();
        debouncer.schedule(1, start);
        assert_eq!(debouncer.time_until_due(start), Some(DEFAULT_DEBOUNCE));
        assert_eq!(debouncer.flush(), Some(1));
        assert!(!debouncer.has_pending());

        debouncer.schedule(2, start);
        debouncer.cancel();
        assert_eq!(debouncer.flush(), None);
        assert_eq!(debouncer.time_until_due(start), None);
    }
}
