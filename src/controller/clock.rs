//! Time sources for the grace-period timer.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Monotonic and wall-clock time as seen by the controller.
pub trait Clock: Send + Sync {
    /// Monotonic time used for scheduling deferred clears.
    fn now(&self) -> Instant;

    /// Wall-clock time stamped on new sessions.
    fn utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The real clocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Lets tests step through the grace period without sleeping:
///
/// ```
/// use counsel_drilldown::controller::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(300));
/// assert_eq!(clock.now() - start, Duration::from_millis(300));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    state: Mutex<(Instant, DateTime<Utc>)>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Start with a pinned wall-clock time.
    #[must_use]
    pub fn starting_at(utc: DateTime<Utc>) -> Self {
        Self {
            state: Mutex::new((Instant::now(), utc)),
        }
    }

    /// Move both clocks forward.
    pub fn advance(&self, by: Duration) {
        let mut state = self.lock();
        state.0 += by;
        state.1 += chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, (Instant, DateTime<Utc>)> {
        // a poisoned lock still holds a valid timestamp
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.lock().0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.lock().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_moves_both_clocks() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::starting_at(start);
        let mono = clock.now();
        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.now() - mono, Duration::from_secs(2));
        assert_eq!(clock.utc() - start, chrono::Duration::seconds(2));
    }

    #[test]
    fn test_manual_clock_stands_still() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), clock.now());
    }
}
