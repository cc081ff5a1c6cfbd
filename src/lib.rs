//! Bikeshare Explorer Library
//!
//! A Rust library for exploring US bikeshare trip records for Chicago,
//! New York City and Washington.
//!
//! This library provides tools for:
//! - Loading a city's trip CSV with Polars and deriving month and weekday
//! - Filtering trips by month and/or day of week
//! - Computing the most frequent travel times and most popular stations
//! - Summarising total and average trip duration
//! - Breaking riders down by user type, gender and birth year
//! - Validating user filter input with typed rejections

pub mod config;
pub mod constants;
pub mod error;
pub mod filters;
pub mod loader;
pub mod models;
pub mod report;
pub mod stats;
pub mod time_conversion;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
    pub mod session;
}

// Re-export commonly used types
pub use config::ExplorerConfig;
pub use error::{BikeshareError, Result};
pub use loader::DataLoader;
pub use models::{City, Dataset, DayFilter, FilterCriteria, MonthFilter, TripRecord};
pub use stats::{Reports, compute_reports};
pub use time_conversion::{DurationParts, convert};
