//! Debounced value commit
//!
//! Every new input cancels the pending one and restarts the quiet window;
//! the value is committed only once the window passes without input.
//! Callers pass `Instant`s explicitly so the timer can be driven by an
//! event loop or by tests.

use std::time::{Duration, Instant};

/// Quiet window for the employee search box, in milliseconds
pub const SEARCH_DEBOUNCE_MS: u64 = 400;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    committed: T,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            committed: initial,
        }
    }

    /// Schedule `value` for commit at `now + delay`, replacing any pending value
    pub fn input(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Commit the pending value if its deadline has passed.
    ///
    /// Returns true when the committed value changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(_, deadline)| now >= *deadline);
        due && self.commit_pending()
    }

    /// Commit the pending value immediately (e.g. on Enter)
    pub fn flush(&mut self) -> bool {
        self.commit_pending()
    }

    fn commit_pending(&mut self) -> bool {
        match self.pending.take() {
            Some((value, _)) if value != self.committed => {
                self.committed = value;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending value without committing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    /// The most recent input, committed or not
    pub fn latest(&self) -> &T {
        self.pending
            .as_ref()
            .map(|(value, _)| value)
            .unwrap_or(&self.committed)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will commit, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }
}
