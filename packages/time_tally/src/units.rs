//! Named time units for building durations in measurement code.
//!
//! ```
//! use time_tally::{MILLISECOND, MINUTE, SECOND};
//!
//! let timeout = 2 * MINUTE + 30 * SECOND + 250 * MILLISECOND;
//! assert_eq!(timeout.as_millis(), 150_250);
//! ```

use std::time::Duration;

/// One nanosecond.
pub const NANOSECOND: Duration = Duration::from_nanos(1);

/// One microsecond.
pub const MICROSECOND: Duration = Duration::from_micros(1);

/// One millisecond.
pub const MILLISECOND: Duration = Duration::from_millis(1);

/// One second.
pub const SECOND: Duration = Duration::from_secs(1);

/// One minute.
pub const MINUTE: Duration = Duration::from_secs(60);

/// One hour.
pub const HOUR: Duration = Duration::from_secs(60 * 60);
