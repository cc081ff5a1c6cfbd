//! Record builders for statistics tests

use crate::models::{City, ColumnPresence, Dataset, FilterCriteria, TripRecord};
use chrono::{Datelike, NaiveDateTime};

/// A trip starting at `start` ("YYYY-MM-DD HH:MM:SS") with no rider data
pub fn trip(start: &str, duration: f64, from: &str, to: &str) -> TripRecord {
    let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
    TripRecord {
        start_time: Some(start_time),
        trip_duration: Some(duration),
        start_station: Some(from.to_string()),
        end_station: Some(to.to_string()),
        user_type: None,
        gender: None,
        birth_year: None,
        month: Some(start_time.month()),
        day_of_week: Some(start_time.weekday()),
    }
}

/// Attach rider attributes to a trip
pub fn rider(
    mut record: TripRecord,
    user_type: Option<&str>,
    gender: Option<&str>,
    birth_year: Option<i32>,
) -> TripRecord {
    record.user_type = user_type.map(str::to_string);
    record.gender = gender.map(str::to_string);
    record.birth_year = birth_year;
    record
}

pub fn dataset(columns: ColumnPresence, records: Vec<TripRecord>) -> Dataset {
    Dataset::new(FilterCriteria::unfiltered(City::Chicago), columns, records)
}
