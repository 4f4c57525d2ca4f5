//! Timing reports.

use std::fmt;
use std::time::Duration;

use crate::{Timer, humanize};

/// Column titles of the report table.
const COLUMN_TITLES: [&str; 5] = ["Timer", "Count", "Total", "Mean", "Std. Dev."];

/// Minimum widths of the report columns. Cells are left-aligned and padded with spaces,
/// longer values are never truncated.
const COLUMN_WIDTHS: [usize; 5] = [15, 15, 20, 15, 15];

/// Width of the horizontal rules surrounding the report rows.
const RULE_WIDTH: usize = 80;

/// Shown in place of a statistic that is undefined because no cycle has completed.
const MISSING_VALUE: &str = "-";

/// A snapshot of the statistics of one or more timers.
///
/// The human-readable form is produced by the `Display` implementation: a header line,
/// a rule of 80 `-` characters, one line per timer and a closing rule, every line terminated
/// by a newline. The same data is also available programmatically via [`rows()`](Self::rows).
///
/// # Examples
///
/// ```
/// use time_tally::TimerSet;
///
/// let mut timers = TimerSet::new();
/// timers.add("load").unwrap();
/// timers.start("load").unwrap();
/// timers.stop("load").unwrap();
///
/// let report = timers.to_report();
/// for row in report.rows() {
///     println!("{} completed {} cycles", row.name(), row.count());
/// }
///
/// print!("{report}");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Report {
    rows: Vec<ReportRow>,
}

/// The statistics of a single timer in a [`Report`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    name: String,
    count: u64,
    total: Duration,
    mean: Option<Duration>,
    std_dev: Option<Duration>,
}

impl Report {
    /// Creates a report with one row per timer, in the order the timers are supplied.
    #[must_use]
    pub(crate) fn from_timers<'a>(timers: impl IntoIterator<Item = &'a Timer>) -> Self {
        Self {
            rows: timers.into_iter().map(ReportRow::from_timer).collect(),
        }
    }

    /// Prints the report to stdout.
    ///
    /// Prints nothing if the report has no rows, so an empty timer set does not produce a table
    /// without content.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        if self.is_empty() {
            return;
        }
        print!("{self}");
    }

    /// Whether the report contains no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows of the report, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter()
    }
}

impl ReportRow {
    #[must_use]
    pub(crate) fn from_timer(timer: &Timer) -> Self {
        Self {
            name: timer.name().to_string(),
            count: timer.count(),
            total: timer.elapsed(),
            mean: timer.elapsed_mean().ok(),
            std_dev: timer.elapsed_std_dev().ok(),
        }
    }

    /// Name of the timer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of completed start/stop cycles.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Total time across all completed cycles.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Mean cycle duration, or `None` if no cycle has completed.
    #[must_use]
    pub fn mean(&self) -> Option<Duration> {
        self.mean
    }

    /// Population standard deviation of the cycle durations, or `None` if no cycle
    /// has completed.
    #[must_use]
    pub fn std_dev(&self) -> Option<Duration> {
        self.std_dev
    }
}

fn write_columns(f: &mut fmt::Formatter<'_>, cells: [&str; 5]) -> fmt::Result {
    for (cell, width) in cells.into_iter().zip(COLUMN_WIDTHS) {
        write!(f, "{cell:<width$}")?;
    }
    Ok(())
}

fn write_rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

fn humanize_or_missing(value: Option<Duration>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), humanize)
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_columns(
            f,
            [
                &self.name,
                &self.count.to_string(),
                &humanize(self.total),
                &humanize_or_missing(self.mean),
                &humanize_or_missing(self.std_dev),
            ],
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_columns(f, COLUMN_TITLES)?;
        writeln!(f)?;
        write_rule(f)?;

        for row in &self.rows {
            writeln!(f, "{row}")?;
        }

        write_rule(f)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::MILLISECOND;
    use crate::pal::{ClockFacade, FakeClock};

    const HEADER: &str =
        "Timer          Count          Total               Mean           Std. Dev.      ";

    fn rule() -> String {
        "-".repeat(80)
    }

    fn timer_with_cycles(name: &str, clock: &FakeClock, cycles_ms: &[u64]) -> Timer {
        let mut timer = Timer::with_clock(name, ClockFacade::fake(clock.clone()));
        for &cycle in cycles_ms {
            timer.start().unwrap();
            clock.advance(Duration::from_millis(cycle));
            timer.stop().unwrap();
        }
        timer
    }

    #[test]
    fn header_and_rules_span_eighty_columns() {
        assert_eq!(HEADER.len(), 80);
        assert_eq!(COLUMN_WIDTHS.iter().sum::<usize>(), RULE_WIDTH);
    }

    #[test]
    fn empty_report_has_header_and_rules_only() {
        let report = Report::default();
        assert!(report.is_empty());

        let expected = format!("{HEADER}\n{}\n{}\n", rule(), rule());
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn row_contains_humanized_statistics() {
        let clock = FakeClock::new();
        let timer = timer_with_cycles("parse", &clock, &[100, 200, 300]);

        let row = ReportRow::from_timer(&timer);
        assert_eq!(row.name(), "parse");
        assert_eq!(row.count(), 3);
        assert_eq!(row.total(), 600 * MILLISECOND);
        assert_eq!(row.mean(), Some(200 * MILLISECOND));

        let expected = format!(
            "{:<15}{:<15}{:<20}{:<15}{:<15}",
            "parse", "3", "600ms", "200ms", "81.6497ms"
        );
        assert_eq!(row.to_string(), expected);
    }

    #[test]
    fn row_without_cycles_shows_missing_statistics() {
        let clock = FakeClock::new();
        let timer = timer_with_cycles("idle", &clock, &[]);

        let row = ReportRow::from_timer(&timer);
        assert_eq!(row.mean(), None);
        assert_eq!(row.std_dev(), None);

        let expected = format!("{:<15}{:<15}{:<20}{:<15}{:<15}", "idle", "0", "0s", "-", "-");
        assert_eq!(row.to_string(), expected);
    }

    #[test]
    fn long_names_are_not_truncated() {
        let clock = FakeClock::new();
        let timer = timer_with_cycles("a_rather_long_timer_name", &clock, &[1]);

        let row = ReportRow::from_timer(&timer).to_string();
        assert!(row.starts_with("a_rather_long_timer_name1"));
    }

    #[test]
    fn rows_keep_supplied_order() {
        let clock = FakeClock::new();
        let first = timer_with_cycles("b", &clock, &[1]);
        let second = timer_with_cycles("a", &clock, &[2, 2]);

        let report = Report::from_timers([&first, &second]);
        assert!(!report.is_empty());

        let names: Vec<_> = report.rows().map(ReportRow::name).collect();
        assert_eq!(names, ["b", "a"]);

        let expected = format!(
            "{HEADER}\n{}\n{}\n{}\n{}\n",
            rule(),
            ReportRow::from_timer(&first),
            ReportRow::from_timer(&second),
            rule()
        );
        assert_eq!(report.to_string(), expected);
    }

    static_assertions::assert_impl_all!(Report: Send, Sync, Clone);
}
