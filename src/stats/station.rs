//! Most popular stations and trip.

use super::mode::mode;
use crate::error::{BikeshareError, Result};
use crate::models::Dataset;

/// A station and how many trips used it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCount {
    pub station: String,
    pub count: usize,
}

/// A start/end station pair and how many trips made it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripCount {
    pub start_station: String,
    pub end_station: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationReport {
    pub start: StationCount,
    pub end: StationCount,
    pub trip: TripCount,
}

/// Compute the station-popularity report
pub fn station_stats(dataset: &Dataset) -> Result<StationReport> {
    let records = dataset.records();

    let (start, start_count) = mode(records.iter().filter_map(|r| r.start_station.as_deref()))
        .ok_or_else(|| BikeshareError::empty_dataset("most common start station"))?;

    let (end, end_count) = mode(records.iter().filter_map(|r| r.end_station.as_deref()))
        .ok_or_else(|| BikeshareError::empty_dataset("most common end station"))?;

    // A pair needs both ends
    let ((trip_start, trip_end), trip_count) = mode(
        records
            .iter()
            .filter_map(|r| Some((r.start_station.as_deref()?, r.end_station.as_deref()?))),
    )
    .ok_or_else(|| BikeshareError::empty_dataset("most frequent trip"))?;

    Ok(StationReport {
        start: StationCount {
            station: start.to_string(),
            count: start_count,
        },
        end: StationCount {
            station: end.to_string(),
            count: end_count,
        },
        trip: TripCount {
            start_station: trip_start.to_string(),
            end_station: trip_end.to_string(),
            count: trip_count,
        },
    })
}
