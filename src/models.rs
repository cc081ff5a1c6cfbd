//! Core data structures for bikeshare exploration.
//!
//! Defines the supported cities, the month/day filter criteria, individual
//! trip records and the filtered dataset handed to the statistics engine.

use crate::constants::{MONTH_NAMES, columns};
use chrono::{Month, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cities with a bikeshare data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase lookup key, as typed by users
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Look up a city by key, ignoring case and surrounding whitespace
    pub fn from_key(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        City::ALL.into_iter().find(|city| city.key() == key)
    }

    /// Source file name, relative to the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Every lookup key, comma separated, for prompts and error messages
    pub fn key_list() -> String {
        City::ALL
            .iter()
            .map(City::key)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Title-cased name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Month filter: either every month or a single calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn matches(&self, month_number: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(month) => month.number_from_month() == month_number,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all months"),
            MonthFilter::Only(month) => f.write_str(month.name()),
        }
    }
}

/// Day-of-week filter: either every day or a single weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(day) => *day == weekday,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all days"),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

/// A validated (city, month, day) query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    /// Criteria for a whole city with no time filters
    pub fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }

    pub fn with_month(mut self, month: MonthFilter) -> Self {
        self.month = month;
        self
    }

    pub fn with_day(mut self, day: DayFilter) -> Self {
        self.day = day;
        self
    }
}

/// Full English name for a calendar month number (1-12)
pub fn month_name(month_number: u32) -> Option<&'static str> {
    let index = month_number.checked_sub(1)? as usize;
    MONTH_NAMES.get(index).copied()
}

/// Full English weekday name
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday from an ISO number (Monday = 1 .. Sunday = 7)
pub fn weekday_from_iso(number: u32) -> Option<Weekday> {
    let index = u8::try_from(number.checked_sub(1)?).ok()?;
    Weekday::try_from(index).ok()
}

/// Optional rider columns present only in some cities' files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalColumn {
    UserType,
    Gender,
    BirthYear,
}

impl OptionalColumn {
    /// Column name in the source file
    pub fn column_name(&self) -> &'static str {
        match self {
            OptionalColumn::UserType => columns::USER_TYPE,
            OptionalColumn::Gender => columns::GENDER,
            OptionalColumn::BirthYear => columns::BIRTH_YEAR,
        }
    }
}

/// Which optional columns the source file provided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnPresence {
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl ColumnPresence {
    /// Presence for a file carrying every optional column
    pub fn all() -> Self {
        Self {
            user_type: true,
            gender: true,
            birth_year: true,
        }
    }

    pub fn has(&self, column: OptionalColumn) -> bool {
        match column {
            OptionalColumn::UserType => self.user_type,
            OptionalColumn::Gender => self.gender,
            OptionalColumn::BirthYear => self.birth_year,
        }
    }
}

/// One bikeshare ride with its derived calendar fields.
///
/// Every source cell may be empty; an empty cell only drops out of the
/// statistics over its own column.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: Option<NaiveDateTime>,
    /// Duration in seconds; some sources store fractional seconds
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Derived calendar month (1-12) of `start_time`
    pub month: Option<u32>,
    /// Derived weekday of `start_time`
    pub day_of_week: Option<Weekday>,
}

impl TripRecord {
    /// Whether this trip passes both filters. A trip without a start time
    /// only passes when neither filter narrows the selection.
    pub fn matches(&self, month: MonthFilter, day: DayFilter) -> bool {
        let month_ok = match self.month {
            Some(number) => month.matches(number),
            None => month == MonthFilter::All,
        };
        let day_ok = match self.day_of_week {
            Some(weekday) => day.matches(weekday),
            None => day == DayFilter::All,
        };
        month_ok && day_ok
    }
}

/// Filtered trips for one city query
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    criteria: FilterCriteria,
    columns: ColumnPresence,
    records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(criteria: FilterCriteria, columns: ColumnPresence, records: Vec<TripRecord>) -> Self {
        Self {
            criteria,
            columns,
            records,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn columns(&self) -> ColumnPresence {
        self.columns
    }

    pub fn has_column(&self, column: OptionalColumn) -> bool {
        self.columns.has(column)
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Narrow this dataset further without reloading the source.
    ///
    /// The result keeps the original relative order and records the
    /// combined criteria.
    pub fn filtered(&self, month: MonthFilter, day: DayFilter) -> Dataset {
        let records = self
            .records
            .iter()
            .filter(|record| record.matches(month, day))
            .cloned()
            .collect();

        let criteria = FilterCriteria {
            city: self.criteria.city,
            month: if month == MonthFilter::All {
                self.criteria.month
            } else {
                month
            },
            day: if day == DayFilter::All {
                self.criteria.day
            } else {
                day
            },
        };

        Dataset::new(criteria, self.columns, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(month: u32, day: u32) -> TripRecord {
        let start_time = NaiveDate::from_ymd_opt(2017, month, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        TripRecord {
            start_time: Some(start_time),
            trip_duration: Some(60.0),
            start_station: Some("A".to_string()),
            end_station: Some("B".to_string()),
            user_type: None,
            gender: None,
            birth_year: None,
            month: Some(month),
            day_of_week: Some(chrono::Datelike::weekday(&start_time)),
        }
    }

    fn undated() -> TripRecord {
        TripRecord {
            start_time: None,
            month: None,
            day_of_week: None,
            ..record(1, 2)
        }
    }

    #[test]
    fn test_city_lookup_is_case_insensitive() {
        assert_eq!(City::from_key("Chicago"), Some(City::Chicago));
        assert_eq!(City::from_key("  NEW YORK CITY "), Some(City::NewYorkCity));
        assert_eq!(City::from_key("boston"), None);
    }

    #[test]
    fn test_city_file_names() {
        assert_eq!(City::Chicago.file_name(), "chicago.csv");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
    }

    #[test]
    fn test_every_city_round_trips_through_its_key() {
        for city in City::ALL {
            assert_eq!(City::from_key(city.key()), Some(city));
            assert!(city.file_name().ends_with(".csv"));
        }
        assert_eq!(City::key_list(), "chicago, new york city, washington");
    }

    #[test]
    fn test_month_name_table_covers_twelve_months() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_weekday_from_iso() {
        assert_eq!(weekday_from_iso(1), Some(Weekday::Mon));
        assert_eq!(weekday_from_iso(7), Some(Weekday::Sun));
        assert_eq!(weekday_from_iso(0), None);
        assert_eq!(weekday_from_iso(8), None);
    }

    #[test]
    fn test_filtered_is_idempotent() {
        // 2017-01-02 and 2017-02-06 are Mondays, 2017-01-03 is a Tuesday
        let dataset = Dataset::new(
            FilterCriteria::unfiltered(City::Chicago),
            ColumnPresence::default(),
            vec![record(1, 2), record(1, 3), record(2, 6)],
        );

        let once = dataset.filtered(MonthFilter::Only(Month::January), DayFilter::Only(Weekday::Mon));
        let twice = once.filtered(MonthFilter::Only(Month::January), DayFilter::Only(Weekday::Mon));

        assert_eq!(once.len(), 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filtered_preserves_order() {
        let dataset = Dataset::new(
            FilterCriteria::unfiltered(City::Chicago),
            ColumnPresence::default(),
            vec![record(1, 2), record(1, 3), record(2, 6)],
        );

        let mondays = dataset.filtered(MonthFilter::All, DayFilter::Only(Weekday::Mon));
        let months: Vec<u32> = mondays.records().iter().filter_map(|r| r.month).collect();
        assert_eq!(months, vec![1, 2]);
        assert_eq!(mondays.criteria().day, DayFilter::Only(Weekday::Mon));
    }

    #[test]
    fn test_undated_trip_only_survives_unfiltered_selection() {
        let dataset = Dataset::new(
            FilterCriteria::unfiltered(City::Chicago),
            ColumnPresence::default(),
            vec![record(1, 2), undated()],
        );

        assert_eq!(dataset.filtered(MonthFilter::All, DayFilter::All).len(), 2);
        assert_eq!(
            dataset
                .filtered(MonthFilter::Only(Month::January), DayFilter::All)
                .len(),
            1
        );
        assert_eq!(
            dataset
                .filtered(MonthFilter::All, DayFilter::Only(Weekday::Mon))
                .len(),
            1
        );
    }
}
