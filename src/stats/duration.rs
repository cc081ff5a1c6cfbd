//! Total and average trip duration.

use crate::error::{BikeshareError, Result};
use crate::models::Dataset;
use crate::time_conversion::{DurationParts, convert};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationReport {
    /// Trips with a recorded duration
    pub trip_count: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl DurationReport {
    pub fn total(&self) -> DurationParts {
        convert(self.total_seconds)
    }

    /// Mean duration, truncated only when decomposed
    pub fn mean(&self) -> DurationParts {
        convert(self.mean_seconds)
    }
}

/// Compute the trip-duration report
pub fn trip_duration_stats(dataset: &Dataset) -> Result<DurationReport> {
    let durations: Vec<f64> = dataset
        .records()
        .iter()
        .filter_map(|r| r.trip_duration)
        .collect();

    if durations.is_empty() {
        return Err(BikeshareError::empty_dataset("average trip duration"));
    }

    let trip_count = durations.len();
    let total_seconds: f64 = durations.iter().sum();

    Ok(DurationReport {
        trip_count,
        total_seconds,
        mean_seconds: total_seconds / trip_count as f64,
    })
}
