//! Rider demographics.
//!
//! Each sub-report is independent: a column the city file does not carry,
//! or one with no values in the filtered trips, yields a typed
//! [`Unavailable`] reason while the other sub-reports still compute.

use super::mode::{mode, tally};
use crate::models::{Dataset, OptionalColumn};
use std::collections::BTreeMap;
use std::fmt;

/// Why a demographic sub-report could not be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailable {
    /// The city's source file has no such column
    ColumnMissing(OptionalColumn),
    /// The column exists but no selected trip has a value
    NoValues(OptionalColumn),
}

/// What a demographic column holds, as worded in the report
fn subject(column: OptionalColumn) -> &'static str {
    match column {
        OptionalColumn::UserType => "user types",
        OptionalColumn::Gender => "gender data",
        OptionalColumn::BirthYear => "birth year data",
    }
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::ColumnMissing(column) => write!(
                f,
                "This location does not have any {} to share.",
                subject(*column)
            ),
            Unavailable::NoValues(column) => write!(
                f,
                "There is no {} to share for the selected trips.",
                subject(*column)
            ),
        }
    }
}

/// A sub-report value or the reason it is missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability<T> {
    Available(T),
    NotAvailable(Unavailable),
}

impl<T> Availability<T> {
    pub fn as_available(&self) -> Option<&T> {
        match self {
            Availability::Available(value) => Some(value),
            Availability::NotAvailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReport {
    /// Trips per user type, in ascending key order
    pub user_types: Availability<BTreeMap<String, usize>>,
    /// Trips per gender, in ascending key order
    pub genders: Availability<BTreeMap<String, usize>>,
    pub birth_years: Availability<BirthYearStats>,
}

/// Compute the user-demographics report
pub fn user_stats(dataset: &Dataset) -> UserReport {
    UserReport {
        user_types: count_by(dataset, OptionalColumn::UserType, |r| r.user_type.as_deref()),
        genders: count_by(dataset, OptionalColumn::Gender, |r| r.gender.as_deref()),
        birth_years: birth_year_stats(dataset),
    }
}

fn count_by<F>(
    dataset: &Dataset,
    column: OptionalColumn,
    field: F,
) -> Availability<BTreeMap<String, usize>>
where
    F: Fn(&crate::models::TripRecord) -> Option<&str>,
{
    if !dataset.has_column(column) {
        return Availability::NotAvailable(Unavailable::ColumnMissing(column));
    }

    let counts: BTreeMap<String, usize> = tally(dataset.records().iter().filter_map(&field))
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect();

    if counts.is_empty() {
        Availability::NotAvailable(Unavailable::NoValues(column))
    } else {
        Availability::Available(counts)
    }
}

fn birth_year_stats(dataset: &Dataset) -> Availability<BirthYearStats> {
    let column = OptionalColumn::BirthYear;
    if !dataset.has_column(column) {
        return Availability::NotAvailable(Unavailable::ColumnMissing(column));
    }

    let years: Vec<i32> = dataset
        .records()
        .iter()
        .filter_map(|r| r.birth_year)
        .collect();

    let (Some(earliest), Some(most_recent), Some((most_common, _))) = (
        years.iter().min().copied(),
        years.iter().max().copied(),
        mode(years.iter().copied()),
    ) else {
        return Availability::NotAvailable(Unavailable::NoValues(column));
    };

    Availability::Available(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}
