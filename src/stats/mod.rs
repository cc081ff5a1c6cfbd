//! Statistics engine.
//!
//! Computes the four independent reports over a filtered [`Dataset`]. The
//! reports are pure computations; turning them into text is the job of
//! [`crate::report`].

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod users;

#[cfg(test)]
pub(crate) mod fixtures;

pub use duration::{DurationReport, trip_duration_stats};
pub use station::{StationCount, StationReport, TripCount, station_stats};
pub use time::{TimeReport, time_stats};
pub use users::{Availability, BirthYearStats, Unavailable, UserReport, user_stats};

use crate::error::Result;
use crate::models::Dataset;
use std::time::{Duration, Instant};
use tracing::debug;

/// A computed value with the time it took
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

fn timed<T>(label: &str, compute: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = compute();
    let elapsed = start.elapsed();
    debug!("Computed {} in {:.2?}", label, elapsed);
    Timed { value, elapsed }
}

/// All four reports for one dataset.
///
/// A failure in one report (e.g. an empty dataset) leaves the others intact.
#[derive(Debug)]
pub struct Reports {
    pub time: Result<Timed<TimeReport>>,
    pub stations: Result<Timed<StationReport>>,
    pub duration: Result<Timed<DurationReport>>,
    pub users: Timed<UserReport>,
}

/// Compute every report for `dataset`
pub fn compute_reports(dataset: &Dataset) -> Reports {
    debug!("Computing reports over {} trips", dataset.len());

    Reports {
        time: lift(timed("time-of-travel report", || time_stats(dataset))),
        stations: lift(timed("station report", || station_stats(dataset))),
        duration: lift(timed("trip duration report", || trip_duration_stats(dataset))),
        users: timed("user report", || user_stats(dataset)),
    }
}

fn lift<T>(timed: Timed<Result<T>>) -> Result<Timed<T>> {
    let elapsed = timed.elapsed;
    timed.value.map(|value| Timed { value, elapsed })
}
