use thiserror::Error;

use crate::Timer;

/// Errors that can occur when operating timers.
///
/// Every variant describes a usage error by the caller, such as stopping a timer that was never
/// started. None of them are transient, so retrying the same operation will fail the same way.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The timer was started while it was already running.
    #[error("timer '{name}' is already running")]
    AlreadyRunning {
        /// Name of the timer.
        name: String,
    },

    /// The timer was stopped or restarted while it was not running.
    #[error("timer '{name}' is not running")]
    NotRunning {
        /// Name of the timer.
        name: String,
    },

    /// A timer with the same name already exists in the timer set.
    #[error("duplicate timer '{name}'")]
    DuplicateName {
        /// The name that was already taken.
        name: String,
    },

    /// No timer with the given name exists in the timer set.
    #[error("unknown timer '{name}'")]
    UnknownName {
        /// The name that was looked up.
        name: String,
    },

    /// A statistic was requested from a timer that has not completed any start/stop cycle.
    #[error("timer '{name}' has no completed cycles")]
    NoSamples {
        /// Name of the timer.
        name: String,
    },
}

/// An existing timer could not be added to a timer set because its name is already taken.
///
/// The rejected timer is handed back unchanged, so its statistics are not lost and a running
/// timer keeps running. Use [`into_timer()`](Self::into_timer) to recover it, or convert into
/// [`Error`] with `?` to discard it.
#[derive(Debug, Error)]
#[error("duplicate timer '{}'", .timer.name())]
pub struct DuplicateTimer {
    timer: Box<Timer>,
}

impl DuplicateTimer {
    pub(crate) fn new(timer: Timer) -> Self {
        Self {
            timer: Box::new(timer),
        }
    }

    /// Name that was already taken.
    #[must_use]
    pub fn name(&self) -> &str {
        self.timer.name()
    }

    /// Returns the timer that was rejected.
    #[must_use]
    pub fn into_timer(self) -> Timer {
        *self.timer
    }
}

impl From<DuplicateTimer> for Error {
    fn from(value: DuplicateTimer) -> Self {
        Self::DuplicateName {
            name: value.name().to_string(),
        }
    }
}

/// A specialized `Result` type for timer operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
