use std::fmt::{self, Debug};
#[cfg(test)]
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[cfg(test)]
use crate::pal::{FakeClock, MockClock};
use crate::pal::{Clock, RealClock};

/// Dispatches clock readings to the real clock or, in tests, to a fake or mock clock.
#[derive(Clone)]
pub(crate) enum ClockFacade {
    Real(RealClock),

    #[cfg(test)]
    Fake(FakeClock),

    #[cfg(test)]
    Mock(Arc<Mutex<MockClock>>),
}

impl ClockFacade {
    pub(crate) fn real() -> Self {
        Self::Real(RealClock::new())
    }

    #[cfg(test)]
    pub(crate) fn fake(clock: FakeClock) -> Self {
        Self::Fake(clock)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockClock) -> Self {
        Self::Mock(Arc::new(Mutex::new(mock)))
    }
}

impl Clock for ClockFacade {
    fn now(&self) -> Duration {
        match self {
            Self::Real(clock) => clock.now(),
            #[cfg(test)]
            Self::Fake(clock) => clock.now(),
            #[cfg(test)]
            Self::Mock(clock) => clock
                .lock()
                .expect("mock clock does not support operation after panic in mock")
                .now(),
        }
    }
}

impl Debug for ClockFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(clock) => clock.fmt(f),
            #[cfg(test)]
            Self::Fake(clock) => clock.fmt(f),
            #[cfg(test)]
            Self::Mock(clock) => clock.fmt(f),
        }
    }
}
