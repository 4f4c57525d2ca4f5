use std::time::{Duration, Instant};

use crate::pal::Clock;

/// The high-resolution monotonic clock of the operating system.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RealClock {
    origin: Instant,
}

impl RealClock {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for RealClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
