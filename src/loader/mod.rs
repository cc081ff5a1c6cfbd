//! Data loader for city trip files.
//!
//! Resolves a city to its CSV source, derives the month and day-of-week of
//! every trip and keeps only the trips matching the requested filters.

pub mod frame;
pub mod source;

#[cfg(test)]
mod tests;

use self::frame::{derive_and_filter, inspect_columns, materialize_records, read_trip_frame};
use self::source::CitySources;

use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::filters::{parse_city, parse_day, parse_month};
use crate::models::{Dataset, FilterCriteria};

use polars::prelude::IntoLazy;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Loads filtered datasets for cities
#[derive(Debug, Clone)]
pub struct DataLoader {
    sources: CitySources,
}

impl DataLoader {
    /// Create a loader reading from the configured data directory
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            sources: CitySources::new(config.data_dir.clone()),
        }
    }

    /// Validate raw filter strings and load the matching dataset.
    ///
    /// Any of the twelve month names is accepted here; restricting to the
    /// months that have data is left to the interactive prompt.
    pub fn load(&self, city: &str, month: &str, day: &str) -> Result<Dataset> {
        let criteria = FilterCriteria {
            city: parse_city(city)?,
            month: parse_month(month)?,
            day: parse_day(day)?,
        };
        self.load_filtered(criteria)
    }

    /// Load the dataset for already validated criteria
    pub fn load_filtered(&self, criteria: FilterCriteria) -> Result<Dataset> {
        let path = self.sources.resolve(criteria.city)?;
        Self::load_path(&path, criteria)
    }

    /// Load and filter an explicit CSV file.
    ///
    /// `criteria.city` only labels the result; the file is read regardless.
    pub fn load_path(path: &Path, criteria: FilterCriteria) -> Result<Dataset> {
        let start_time = Instant::now();
        info!(
            "Loading {} data ({}, {}) from {}",
            criteria.city,
            criteria.month,
            criteria.day,
            path.display()
        );

        let df = read_trip_frame(path)?;
        let total_rows = df.height();
        let presence = inspect_columns(&df, path)?;

        let filtered = frame::select_trip_columns(derive_and_filter(df.lazy(), &criteria), presence)
            .collect()?;
        let records = materialize_records(&filtered, presence)?;

        debug!(
            "Kept {} of {} rows after filtering in {:.2?}",
            records.len(),
            total_rows,
            start_time.elapsed()
        );

        Ok(Dataset::new(criteria, presence, records))
    }
}
