//! Most frequent times of travel.

use super::mode::mode;
use crate::error::{BikeshareError, Result};
use crate::models::{Dataset, month_name, weekday_from_iso, weekday_name};
use chrono::{Timelike, Weekday};

/// Most common month, weekday and start hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeReport {
    /// Calendar month number (1-12)
    pub month: u32,
    pub day_of_week: Weekday,
    /// Hour of day (0-23)
    pub start_hour: u32,
}

impl TimeReport {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or("Unknown")
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }

    /// Start hour as four-digit military time, e.g. 7 -> "0700"
    pub fn start_hour_label(&self) -> String {
        format!("{:02}00", self.start_hour)
    }
}

/// Compute the time-of-travel report
pub fn time_stats(dataset: &Dataset) -> Result<TimeReport> {
    let records = dataset.records();

    let (month, _) = mode(records.iter().filter_map(|r| r.month))
        .ok_or_else(|| BikeshareError::empty_dataset("most common month"))?;

    // Weekday has no ordering, so count by ISO number to keep ties deterministic
    let (day_number, _) = mode(
        records
            .iter()
            .filter_map(|r| r.day_of_week)
            .map(|day| day.number_from_monday()),
    )
        .ok_or_else(|| BikeshareError::empty_dataset("most common day of week"))?;
    let day_of_week = weekday_from_iso(day_number)
        .ok_or_else(|| BikeshareError::empty_dataset("most common day of week"))?;

    let (start_hour, _) = mode(records.iter().filter_map(|r| r.start_time).map(|t| t.hour()))
        .ok_or_else(|| BikeshareError::empty_dataset("most common start hour"))?;

    Ok(TimeReport {
        month,
        day_of_week,
        start_hour,
    })
}
