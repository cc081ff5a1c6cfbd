//! Seconds to days/hours/minutes/seconds decomposition.

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use std::fmt;

/// A duration split into whole days, hours, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Total whole seconds represented by these parts
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl From<(u64, u64, u64, u64)> for DurationParts {
    fn from((days, hours, minutes, seconds): (u64, u64, u64, u64)) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes and {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Decompose `total_seconds` into days, hours, minutes and seconds.
///
/// Fractional seconds are truncated. Negative and NaN inputs saturate to zero.
pub fn convert(total_seconds: f64) -> DurationParts {
    // `as` saturates: NaN and negatives become 0
    let whole = total_seconds.floor() as u64;

    let days = whole / SECONDS_PER_DAY;
    let remainder = whole % SECONDS_PER_DAY;
    let hours = remainder / SECONDS_PER_HOUR;
    let remainder = remainder % SECONDS_PER_HOUR;

    DurationParts {
        days,
        hours,
        minutes: remainder / SECONDS_PER_MINUTE,
        seconds: remainder % SECONDS_PER_MINUTE,
    }
}
