#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Named stopwatches with running statistics and compact human-readable reports.
//!
//! This package provides utilities to measure the wall-clock time spent in sections of
//! application code and to report it in a compact tabular form.
//!
//! The core functionality includes:
//! - [`Timer`] - A named stopwatch that tracks count, total, mean and standard deviation
//!   over repeated start/stop cycles
//! - [`TimerSet`] - A collection of timers addressed by name
//! - [`Report`] - A snapshot of timer statistics, rendered as a fixed-width table
//! - [`humanize()`] - Formats a duration as a compact string such as `1h30m` or `2.5ms`
//!
//! This package is not a profiler: it has no sampling and no call-graph attribution.
//! It only measures the sections you explicitly start and stop.
//!
//! # Simple Usage
//!
//! ```
//! use std::thread;
//!
//! use time_tally::{MILLISECOND, Timer};
//!
//! # fn main() -> Result<(), time_tally::Error> {
//! let mut timer = Timer::with_name("sleep");
//!
//! timer.start()?;
//! thread::sleep(10 * MILLISECOND);
//! timer.stop()?;
//!
//! println!("Total elapsed: {:?}", timer.elapsed());
//!
//! // Prints the timer as a table with a header row.
//! print!("{timer}");
//! # Ok(())
//! # }
//! ```
//!
//! # Tracking multiple sections
//!
//! ```
//! use std::thread;
//!
//! use time_tally::{MILLISECOND, TimerSet};
//!
//! # fn main() -> Result<(), time_tally::Error> {
//! let mut timers = TimerSet::new();
//! timers.add("task_1")?;
//! timers.add("task_2")?;
//!
//! timers.start("task_1")?;
//! thread::sleep(2 * MILLISECOND);
//! timers.stop("task_1")?;
//!
//! for _ in 0..10 {
//!     timers.start("task_2")?;
//!     thread::sleep(MILLISECOND);
//!     timers.stop("task_2")?;
//! }
//!
//! // Timer          Count          Total               Mean           Std. Dev.
//! // --------------------------------------------------------------------------------
//! // task_1         1              2.07ms              2.07ms         0s
//! // task_2         10             10.6ms              1.06ms         31.5us
//! // --------------------------------------------------------------------------------
//! timers.print_to_stdout();
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Misuse such as starting a running timer or addressing a timer name that does not exist
//! is reported through [`Error`]. These are programming errors, not transient conditions.
//!
//! # Logging
//!
//! The package emits diagnostics through [`tracing`], for example when a running timer is
//! dropped. It does not install a subscriber; that is left to the application.
//!
//! # Threading
//!
//! Timers and timer sets have no internal synchronization. They can be moved between threads
//! but concurrent use requires external synchronization, or one timer per thread.

mod error;
mod humanize;
#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod log_capture;
mod pal;
mod report;
mod timer;
mod timer_set;
mod units;

pub use error::{DuplicateTimer, Error, Result};
pub use humanize::humanize;
pub use report::{Report, ReportRow};
pub use timer::Timer;
pub use timer_set::TimerSet;
pub use units::{HOUR, MICROSECOND, MILLISECOND, MINUTE, NANOSECOND, SECOND};
