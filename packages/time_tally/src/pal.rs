//! Platform abstraction layer for the clock that timers read.
//!
//! Production code always uses the real monotonic clock. Tests switch to a fake clock whose
//! readings they control, or to a mock that verifies how often the clock is read.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::ClockFacade;
#[cfg(test)]
pub(crate) use fake::FakeClock;
pub(crate) use real::RealClock;
