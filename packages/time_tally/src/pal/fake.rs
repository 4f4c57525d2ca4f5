//! Fake clock implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::Clock;

/// Fake implementation of the clock for testing.
///
/// Tests control the readings instead of relying on the passage of real time. Multiple clones
/// of the same `FakeClock` share the same reading, so a test can keep one clone and advance time
/// while a timer holds another.
#[derive(Clone, Debug)]
pub(crate) struct FakeClock {
    now: Arc<Mutex<Duration>>,
}

impl FakeClock {
    /// Creates a new fake clock reading zero.
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Sets the current reading.
    ///
    /// This affects all clones of this clock.
    pub(crate) fn set_now(&self, now: Duration) {
        *self
            .now
            .lock()
            .expect("FakeClock state lock should not be poisoned") = now;
    }

    /// Moves the current reading forward.
    ///
    /// This affects all clones of this clock.
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self
            .now
            .lock()
            .expect("FakeClock state lock should not be poisoned");

        *now = now
            .checked_add(by)
            .expect("fake clock advanced past the end of time");
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        *self
            .now
            .lock()
            .expect("FakeClock state lock should not be poisoned")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let clock = FakeClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn sets_and_advances_time() {
        let clock = FakeClock::new();

        clock.set_now(Duration::from_millis(150));
        assert_eq!(clock.now(), Duration::from_millis(150));

        clock.advance(Duration::from_millis(50));
        assert_eq!(clock.now(), Duration::from_millis(200));
    }

    #[test]
    fn shared_state_between_clones() {
        let clock1 = FakeClock::new();
        let clock2 = clock1.clone();

        clock1.advance(Duration::from_millis(100));
        assert_eq!(clock2.now(), Duration::from_millis(100));

        clock2.set_now(Duration::from_secs(3));
        assert_eq!(clock1.now(), Duration::from_secs(3));
    }
}
