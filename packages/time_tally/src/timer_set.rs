//! Name-indexed collection of timers.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::{fmt, result};

use tracing::trace;

use crate::{DuplicateTimer, Error, Report, Result, Timer};

/// A collection of [`Timer`]s addressed by name.
///
/// The set owns its timers. Operations take the name of the timer and forward to the
/// corresponding [`Timer`] method, failing with [`Error::UnknownName`] if no timer with that
/// name exists. Timers are kept in name order, which is also the order of the report rows.
///
/// # Examples
///
/// ```
/// use std::thread;
///
/// use time_tally::{MILLISECOND, TimerSet};
///
/// let mut timers = TimerSet::new();
/// timers.add("load").unwrap();
/// timers.add("process").unwrap();
///
/// timers.start("load").unwrap();
/// thread::sleep(2 * MILLISECOND);
/// timers.stop("load").unwrap();
///
/// for _ in 0..10 {
///     timers.start("process").unwrap();
///     thread::sleep(MILLISECOND);
///     timers.stop("process").unwrap();
/// }
///
/// assert_eq!(timers.get("process").unwrap().count(), 10);
///
/// // Write the timing report to stdout.
/// timers.print_to_stdout();
/// ```
#[derive(Debug, Default)]
pub struct TimerSet {
    timers: BTreeMap<String, Timer>,
}

impl TimerSet {
    /// Creates an empty timer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether the set contains no timers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Whether a timer with the given name exists in the set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.timers.contains_key(name)
    }

    /// Whether any timer in the set is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timers.values().any(Timer::is_running)
    }

    /// Adds a new idle timer with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if a timer with the same name already exists.
    pub fn add(&mut self, name: impl Into<String>) -> Result<()> {
        self.add_timer(Timer::with_name(name)).map_err(Error::from)
    }

    /// Adds an existing timer, keyed by its name.
    ///
    /// The timer keeps its state, so a running timer stays running and its statistics
    /// are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateTimer`] if a timer with the same name already exists. The error
    /// hands the rejected timer back unchanged; it converts into [`Error::DuplicateName`]
    /// with `?`.
    pub fn add_timer(&mut self, timer: Timer) -> result::Result<(), DuplicateTimer> {
        match self.timers.entry(timer.name().to_string()) {
            Entry::Occupied(_) => Err(DuplicateTimer::new(timer)),
            Entry::Vacant(entry) => {
                trace!(name = %entry.key(), "timer added");
                entry.insert(timer);
                Ok(())
            }
        }
    }

    /// Removes the timer with the given name from the set and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if no timer with that name exists.
    pub fn delete(&mut self, name: &str) -> Result<Timer> {
        let timer = self.timers.remove(name).ok_or_else(|| unknown_name(name))?;
        trace!(name, "timer deleted");
        Ok(timer)
    }

    /// Starts the timer with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if no timer with that name exists, or
    /// [`Error::AlreadyRunning`] if the timer is already running.
    pub fn start(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.start()
    }

    /// Stops the timer with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if no timer with that name exists, or
    /// [`Error::NotRunning`] if the timer is not running.
    pub fn stop(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.stop()
    }

    /// Restarts the timer with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if no timer with that name exists, or
    /// [`Error::NotRunning`] if the timer is not running.
    pub fn restart(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.restart()
    }

    /// Resets the timer with the given name to its initial state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if no timer with that name exists.
    pub fn reset(&mut self, name: &str) -> Result<()> {
        self.get_mut(name)?.reset();
        Ok(())
    }

    /// Returns the timer with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if no timer with that name exists.
    pub fn get(&self, name: &str) -> Result<&Timer> {
        self.timers.get(name).ok_or_else(|| unknown_name(name))
    }

    /// Returns the timer with the given name for direct use.
    ///
    /// Operations performed through the returned reference act on the timer owned by the set,
    /// so their effects are visible in later queries and reports of the set.
    ///
    /// Renaming the timer through this reference does not change the name it is registered
    /// under; the set keeps addressing it by the original name while reports show the new one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if no timer with that name exists.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Timer> {
        self.timers.get_mut(name).ok_or_else(|| unknown_name(name))
    }

    /// Returns an iterator over the names and timers in the set, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Timer)> {
        self.timers.iter().map(|(name, timer)| (name.as_str(), timer))
    }

    /// Creates a report containing a snapshot of the statistics of all timers, in name order.
    #[must_use]
    pub fn to_report(&self) -> Report {
        Report::from_timers(self.timers.values())
    }

    /// Prints the statistics of all timers to stdout as a table.
    ///
    /// This is a convenience method equivalent to `self.to_report().print_to_stdout()`.
    /// Prints nothing if the set is empty, unlike the `Display` implementation, which renders
    /// the header and rules of an empty table.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        self.to_report().print_to_stdout();
    }
}

fn unknown_name(name: &str) -> Error {
    Error::UnknownName {
        name: name.to_string(),
    }
}

impl fmt::Display for TimerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_report())
    }
}
