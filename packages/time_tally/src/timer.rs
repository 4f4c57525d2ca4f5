//! Named stopwatch with running statistics.

use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::pal::{Clock, ClockFacade};
use crate::{Error, Report, ReportRow, Result};

/// A named stopwatch that accumulates statistics over repeated start/stop cycles.
///
/// Each completed cycle (a [`start()`](Self::start) followed by a [`stop()`](Self::stop))
/// increments the cycle count and adds the measured duration to the total. The timer also
/// maintains the mean and the population standard deviation of the cycle durations, updated
/// in a single pass without storing the individual samples.
///
/// Time is measured with the monotonic high-resolution clock of the operating system.
///
/// # Examples
///
/// ```
/// use std::thread;
///
/// use time_tally::{MILLISECOND, Timer};
///
/// let mut timer = Timer::with_name("sleep");
///
/// for _ in 0..3 {
///     timer.start().unwrap();
///     thread::sleep(MILLISECOND);
///     timer.stop().unwrap();
/// }
///
/// assert_eq!(timer.count(), 3);
/// assert!(timer.elapsed() >= 3 * MILLISECOND);
///
/// // Prints a table with the count, total, mean and standard deviation.
/// print!("{timer}");
/// ```
///
/// # Thread safety
///
/// A timer can be moved to another thread but has no internal synchronization. Mutating
/// operations take `&mut self`, so concurrent start/stop from multiple threads requires
/// external synchronization chosen by the caller (or one timer per thread).
///
/// Dropping a timer that is still running logs a warning and discards the in-progress cycle.
/// A clone of a running timer is itself running, so dropping both copies logs one warning
/// per copy.
#[derive(Clone, Debug)]
pub struct Timer {
    name: String,
    running: bool,
    count: u64,
    total: Duration,

    // Welford's online algorithm, in nanoseconds. The second moment is the sum of squared
    // deviations from the mean and is never negative.
    sample_mean: i64,
    second_moment: i128,

    start_time: Duration,
    last_cycle: Option<Duration>,

    clock: ClockFacade,
}

impl Timer {
    /// Creates an unnamed timer that is not running and has no completed cycles.
    #[must_use]
    pub fn new() -> Self {
        Self::with_name(String::new())
    }

    /// Creates a named timer that is not running and has no completed cycles.
    ///
    /// The name identifies the timer in reports and is used as the key when the timer is added
    /// to a [`TimerSet`](crate::TimerSet).
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self::with_clock(name, ClockFacade::real())
    }

    #[must_use]
    pub(crate) fn with_clock(name: impl Into<String>, clock: ClockFacade) -> Self {
        Self {
            name: name.into(),
            running: false,
            count: 0,
            total: Duration::ZERO,
            sample_mean: 0,
            second_moment: 0,
            start_time: Duration::ZERO,
            last_cycle: None,
            clock,
        }
    }

    /// Starts a new cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyRunning`] if the timer is already running.
    pub fn start(&mut self) -> Result<()> {
        if self.running {
            return Err(Error::AlreadyRunning {
                name: self.name.clone(),
            });
        }

        self.start_time = self.clock.now();
        self.running = true;
        Ok(())
    }

    /// Stops the current cycle and adds its duration to the statistics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRunning`] if the timer is not running.
    pub fn stop(&mut self) -> Result<()> {
        if !self.running {
            return Err(Error::NotRunning {
                name: self.name.clone(),
            });
        }

        let stop_time = self.clock.now();
        let cycle = stop_time.saturating_sub(self.start_time);

        self.record_cycle(cycle);
        self.running = false;
        Ok(())
    }

    /// Stops the current cycle and immediately starts a new one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRunning`] if the timer is not running.
    pub fn restart(&mut self) -> Result<()> {
        self.stop()?;
        self.start()
    }

    /// Returns the timer to its initial state, discarding all statistics.
    ///
    /// The timer is left idle even if it was running; the in-progress cycle is discarded
    /// without being recorded. The name is kept.
    pub fn reset(&mut self) {
        if self.running {
            debug!(name = %self.name, "resetting a running timer, in-progress cycle discarded");
        }

        self.running = false;
        self.count = 0;
        self.total = Duration::ZERO;
        self.sample_mean = 0;
        self.second_moment = 0;
        self.start_time = Duration::ZERO;
        self.last_cycle = None;
    }

    /// Total time across all completed cycles.
    ///
    /// A cycle that is still in progress is not included.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.total
    }

    /// Mean duration of the completed cycles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSamples`] if no cycle has completed.
    pub fn elapsed_mean(&self) -> Result<Duration> {
        let count = self.completed_cycles()?;

        Ok(Duration::from_nanos(
            self.total
                .as_nanos()
                .checked_div(u128::from(count))
                .expect("guarded by completed_cycles")
                .try_into()
                .expect("all realistic values fit in u64"),
        ))
    }

    /// Population standard deviation of the durations of the completed cycles,
    /// rounded to the nearest nanosecond.
    ///
    /// The running mean used to compute the deviation is kept in whole nanoseconds, so the
    /// result is approximate when cycles last only a few nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSamples`] if no cycle has completed.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "statistics tolerate sub-nanosecond imprecision and the result is non-negative"
    )]
    pub fn elapsed_std_dev(&self) -> Result<Duration> {
        let count = self.completed_cycles()?;

        let variance = self.second_moment as f64 / count as f64;
        Ok(Duration::from_nanos(variance.sqrt().round() as u64))
    }

    /// Duration of the most recently completed cycle, or `None` if no cycle has completed.
    #[must_use]
    pub fn last_cycle(&self) -> Option<Duration> {
        self.last_cycle
    }

    /// Whether a cycle is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of completed start/stop cycles.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Name of the timer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the timer.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Renders the statistics of the timer as a single fixed-width report row.
    ///
    /// The columns are the name, the cycle count, the total, the mean and the standard
    /// deviation, formatted with [`humanize()`](crate::humanize). The row has no header and
    /// no trailing newline; use the `Display` implementation for a complete table.
    #[must_use]
    pub fn report(&self) -> String {
        ReportRow::from_timer(self).to_string()
    }

    /// Creates a report containing a snapshot of the statistics of this timer.
    #[must_use]
    pub fn to_report(&self) -> Report {
        Report::from_timers([self])
    }

    /// Prints the statistics of the timer to stdout as a table.
    ///
    /// This is a convenience method equivalent to `self.to_report().print_to_stdout()`.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        self.to_report().print_to_stdout();
    }

    fn completed_cycles(&self) -> Result<u64> {
        if self.count == 0 {
            return Err(Error::NoSamples {
                name: self.name.clone(),
            });
        }

        Ok(self.count)
    }

    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division,
        reason = "operands are i64-range nanosecond values widened to i128 and the mean is kept in whole nanoseconds"
    )]
    fn record_cycle(&mut self, cycle: Duration) {
        self.count = self
            .count
            .checked_add(1)
            .expect("cycle count overflows u64 - this indicates an unrealistic scenario");

        self.total = self
            .total
            .checked_add(cycle)
            .expect("total time overflows Duration - this indicates an unrealistic scenario");

        let sample = i128::try_from(cycle.as_nanos())
            .expect("a single cycle cannot realistically span more than i128 nanoseconds");
        let mean = i128::from(self.sample_mean);

        let delta = sample - mean;
        let new_mean = mean + delta / i128::from(self.count);

        // The updated mean lies between the old mean and the sample, so this term has the same
        // sign as delta and the second moment never decreases.
        self.second_moment = self
            .second_moment
            .saturating_add((sample - new_mean).saturating_mul(delta));

        self.sample_mean = i64::try_from(new_mean)
            .expect("the mean of cycles shorter than 292 years fits in i64 nanoseconds");

        self.last_cycle = Some(cycle);
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if self.running {
            warn!(name = %self.name, "dropping a running timer, in-progress cycle discarded");
        }
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_report())
    }
}
