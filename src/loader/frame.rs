//! Polars frame handling for city trip files.
//!
//! Reads a city CSV, derives the calendar columns with lazy expressions,
//! applies the month/day filters and materializes the surviving rows into
//! typed [`TripRecord`]s.

use crate::constants::{SCHEMA_INFERENCE_ROWS, columns, derived};
use crate::error::{BikeshareError, Result};
use crate::models::{
    ColumnPresence, DayFilter, FilterCriteria, MonthFilter, OptionalColumn, TripRecord,
    weekday_from_iso,
};
use chrono::{DateTime, NaiveDateTime};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Read a city CSV with date parsing enabled
pub fn read_trip_frame(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(SCHEMA_INFERENCE_ROWS))
        .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(
        "Read {} rows and {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Check the required columns and report which optional ones are present
pub fn inspect_columns(df: &DataFrame, path: &Path) -> Result<ColumnPresence> {
    for column in columns::REQUIRED {
        if df.column(column).is_err() {
            return Err(BikeshareError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let start_dtype = df.column(columns::START_TIME)?.dtype();
    if !matches!(start_dtype, DataType::Datetime(_, _) | DataType::Date) {
        return Err(BikeshareError::InvalidColumnType {
            path: path.to_path_buf(),
            column: columns::START_TIME.to_string(),
            reason: format!("expected a timestamp, found {}", start_dtype),
        });
    }

    let has = |column: OptionalColumn| df.column(column.column_name()).is_ok();
    let presence = ColumnPresence {
        user_type: has(OptionalColumn::UserType),
        gender: has(OptionalColumn::Gender),
        birth_year: has(OptionalColumn::BirthYear),
    };

    debug!("Optional columns in {}: {:?}", path.display(), presence);
    Ok(presence)
}

/// Add derived calendar columns and apply the month/day filters
pub fn derive_and_filter(frame: LazyFrame, criteria: &FilterCriteria) -> LazyFrame {
    let start = || col(columns::START_TIME);

    let mut frame = frame.with_columns([
        start().dt().month().cast(DataType::UInt32).alias(derived::MONTH),
        start()
            .dt()
            .weekday()
            .cast(DataType::UInt32)
            .alias(derived::DAY_OF_WEEK),
        start()
            .dt()
            .timestamp(TimeUnit::Milliseconds)
            .alias(derived::START_EPOCH_MS),
    ]);

    if let MonthFilter::Only(month) = criteria.month {
        frame = frame.filter(col(derived::MONTH).eq(lit(month.number_from_month())));
    }

    if let DayFilter::Only(day) = criteria.day {
        frame = frame.filter(col(derived::DAY_OF_WEEK).eq(lit(day.number_from_monday())));
    }

    frame
}

/// Project the columns the statistics need, with uniform types
pub fn select_trip_columns(frame: LazyFrame, presence: ColumnPresence) -> LazyFrame {
    let mut selection = vec![
        col(derived::START_EPOCH_MS),
        col(derived::MONTH),
        col(derived::DAY_OF_WEEK),
        col(columns::TRIP_DURATION).cast(DataType::Float64),
        col(columns::START_STATION).cast(DataType::String),
        col(columns::END_STATION).cast(DataType::String),
    ];

    if presence.user_type {
        selection.push(col(columns::USER_TYPE).cast(DataType::String));
    }
    if presence.gender {
        selection.push(col(columns::GENDER).cast(DataType::String));
    }
    if presence.birth_year {
        selection.push(col(columns::BIRTH_YEAR).cast(DataType::Float64));
    }

    frame.select(selection)
}

/// Convert a projected frame into trip records, keeping row order.
///
/// Every row becomes a record; empty cells stay `None` so each statistic
/// can skip them in its own column only.
pub fn materialize_records(df: &DataFrame, presence: ColumnPresence) -> Result<Vec<TripRecord>> {
    let epochs = df.column(derived::START_EPOCH_MS)?.i64()?;
    let months = df.column(derived::MONTH)?.u32()?;
    let days = df.column(derived::DAY_OF_WEEK)?.u32()?;
    let durations = df.column(columns::TRIP_DURATION)?.f64()?;
    let start_stations = df.column(columns::START_STATION)?.str()?;
    let end_stations = df.column(columns::END_STATION)?.str()?;

    let user_types = if presence.user_type {
        Some(df.column(columns::USER_TYPE)?.str()?)
    } else {
        None
    };
    let genders = if presence.gender {
        Some(df.column(columns::GENDER)?.str()?)
    } else {
        None
    };
    let birth_years = if presence.birth_year {
        Some(df.column(columns::BIRTH_YEAR)?.f64()?)
    } else {
        None
    };

    let mut records = Vec::with_capacity(df.height());
    let mut incomplete = 0usize;

    for row in 0..df.height() {
        let record = TripRecord {
            start_time: epochs.get(row).and_then(epoch_ms_to_naive),
            trip_duration: durations.get(row).filter(|seconds| seconds.is_finite()),
            start_station: start_stations.get(row).map(str::to_string),
            end_station: end_stations.get(row).map(str::to_string),
            user_type: user_types.and_then(|c| c.get(row)).map(str::to_string),
            gender: genders.and_then(|c| c.get(row)).map(str::to_string),
            birth_year: birth_years
                .and_then(|c| c.get(row))
                .filter(|year| year.is_finite())
                .map(|year| year as i32),
            month: months.get(row),
            day_of_week: days.get(row).and_then(weekday_from_iso),
        };

        if record.start_time.is_none()
            || record.trip_duration.is_none()
            || record.start_station.is_none()
            || record.end_station.is_none()
        {
            incomplete += 1;
        }
        records.push(record);
    }

    if incomplete > 0 {
        debug!("{} rows have empty trip fields", incomplete);
    }

    Ok(records)
}

fn epoch_ms_to_naive(ms: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}
