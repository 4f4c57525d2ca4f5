//! Compact human-readable rendering of durations.

use std::fmt::Write;
use std::time::Duration;

use crate::{MICROSECOND, MILLISECOND, SECOND};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Significant digits used for sub-second values.
const SIGNIFICANT_DIGITS: usize = 6;

/// Fractional digits used for the seconds component of durations of one second or longer.
const FIXED_FRACTION_DIGITS: usize = 9;

/// Formats a duration as a compact human-readable string.
///
/// * A zero duration is rendered as `0s`.
/// * Durations shorter than one second use the largest of `ms`, `us` or `ns` that keeps the
///   value at or above 1, printed with up to six significant digits (`250ms`, `1.5us`).
/// * Longer durations are rendered as the non-zero components of hours, minutes and seconds
///   in descending order (`1h30m`, `2.5s`, `45m12.000000001s`). Hours and minutes are whole
///   numbers, seconds carry up to nine fractional digits.
///
/// Sub-second values are limited to six significant digits while the seconds component keeps
/// full nanosecond precision. This asymmetry is intentional and stable: `1.234567ms` is
/// rendered as `1.23457ms` but `1.234567s` is rendered as `1.234567s`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use time_tally::{HOUR, MILLISECOND, MINUTE, humanize};
///
/// assert_eq!(humanize(Duration::ZERO), "0s");
/// assert_eq!(humanize(250 * MILLISECOND), "250ms");
/// assert_eq!(humanize(2500 * MILLISECOND), "2.5s");
/// assert_eq!(humanize(HOUR + 30 * MINUTE), "1h30m");
/// ```
#[must_use]
pub fn humanize(duration: Duration) -> String {
    if duration.is_zero() {
        return "0s".to_string();
    }

    if duration < SECOND {
        // Everything below one second fits in the sub-second nanosecond field.
        let nanos = f64::from(duration.subsec_nanos());

        return if duration >= MILLISECOND {
            format!("{}ms", general_to_string(nanos / 1_000_000.0))
        } else if duration >= MICROSECOND {
            format!("{}us", general_to_string(nanos / 1_000.0))
        } else {
            format!("{}ns", general_to_string(nanos))
        };
    }

    let mut output = String::new();

    let total_seconds = duration.as_secs();
    let hours = total_seconds.div_euclid(SECONDS_PER_HOUR);
    let minutes = total_seconds
        .rem_euclid(SECONDS_PER_HOUR)
        .div_euclid(SECONDS_PER_MINUTE);
    let remainder = Duration::new(
        total_seconds.rem_euclid(SECONDS_PER_MINUTE),
        duration.subsec_nanos(),
    );

    if hours != 0 {
        write!(&mut output, "{hours}h")
            .expect("we expect writing integer to String to be infallible");
    }

    if minutes != 0 {
        write!(&mut output, "{minutes}m")
            .expect("we expect writing integer to String to be infallible");
    }

    if !remainder.is_zero() {
        output.push_str(&fixed_to_string(remainder.as_secs_f64()));
        output.push('s');
    }

    output
}

/// Formats a value with nine fractional digits, then removes trailing zeros and, if no
/// fraction remains, the decimal point.
#[must_use]
fn fixed_to_string(value: f64) -> String {
    let formatted = format!("{value:.precision$}", precision = FIXED_FRACTION_DIGITS);
    strip_fraction_zeros(&formatted).to_string()
}

/// Formats a value of at least 1 with up to six significant digits, without exponent notation.
///
/// Only used for the sub-second units, where the value is always below 1000 before rounding.
fn general_to_string(value: f64) -> String {
    let integer_digits = format!("{}", value.trunc()).len();
    let precision = SIGNIFICANT_DIGITS.saturating_sub(integer_digits);

    let formatted = format!("{value:.precision$}");
    strip_fraction_zeros(&formatted).to_string()
}

fn strip_fraction_zeros(formatted: &str) -> &str {
    if !formatted.contains('.') {
        return formatted;
    }

    let trimmed = formatted.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}
