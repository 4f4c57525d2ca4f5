//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides monotonic timestamps for timers.
///
/// A reading is the time elapsed since an arbitrary origin chosen when the clock was created.
/// Only the difference between two readings of the same clock is meaningful.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Clock: Debug + Send + 'static {
    /// Reads the current timestamp.
    fn now(&self) -> Duration;
}
