//! Clock adapters.

use crate::ports::outbound::Clock;
use chrono::Utc;
use parking_lot::Mutex;
use shared_types::Time;

/// Wall clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Time {
        Utc::now()
    }
}

/// Manually driven clock for tests and replays.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<Time>,
}

impl FixedClock {
    /// Clock frozen at `now`.
    pub fn new(now: Time) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock to `now`.
    pub fn set(&self, now: Time) {
        *self.now.lock() = now;
    }

    /// Advance the clock by `by`.
    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        if let Some(next) = now.checked_add_signed(by) {
            *now = next;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Time {
        *self.now.lock()
    }
}
