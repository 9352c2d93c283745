//! Time sources for stamping prompts.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// Timestamp type carried by prompts.
pub type Timestamp = DateTime<Utc>;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Deterministic clock that advances by a fixed step on every read.
///
/// The first call to [`Clock::now`] returns the start instant.
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<Timestamp>,
    step: Duration,
}

impl SteppingClock {
    /// Creates a clock starting at `start` and advancing by `step`.
    #[must_use]
    pub fn new(start: Timestamp, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// Creates a clock starting at the Unix epoch and advancing one second per read.
    #[must_use]
    pub fn from_epoch() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH, Duration::seconds(1))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        let mut guard = self
            .next
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let current = *guard;
        *guard = current + self.step;
        current
    }
}
