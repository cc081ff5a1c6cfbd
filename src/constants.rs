//! Application constants for the bikeshare explorer
//!
//! This module contains the fixed lookup tables, column names and default
//! values used throughout the explorer.

// =============================================================================
// Data Sources
// =============================================================================

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV_VAR: &str = "BIKESHARE_DATA_DIR";

/// Default data directory when neither the CLI nor the environment set one
pub const DEFAULT_DATA_DIR: &str = ".";

// =============================================================================
// Calendar Tables
// =============================================================================

/// Month names in calendar order; index + 1 is the month number
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Months offered to interactive users by default.
///
/// The source files only span January through June, so the prompt offers
/// those six even though all twelve names are structurally valid filters.
pub const DEFAULT_OFFERED_MONTHS: &[u32] = &[1, 2, 3, 4, 5, 6];

/// Sentinel accepted for both month and day meaning "no filter"
pub const ALL_SENTINEL: &str = "all";

// =============================================================================
// Source Columns
// =============================================================================

/// Column names as they appear in the source CSV files
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    /// Columns every city file must provide
    pub const REQUIRED: &[&str] = &[START_TIME, TRIP_DURATION, START_STATION, END_STATION];
}

/// Internal names for columns derived during loading
pub mod derived {
    pub const MONTH: &str = "month";
    pub const DAY_OF_WEEK: &str = "day_of_week";
    pub const START_EPOCH_MS: &str = "start_epoch_ms";
}

// =============================================================================
// Time Conversion
// =============================================================================

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

// =============================================================================
// Rendering
// =============================================================================

/// Width of the dashed separator printed after each report
pub const SEPARATOR_WIDTH: usize = 40;

/// CSV rows sampled by polars when inferring column types
pub const SCHEMA_INFERENCE_ROWS: usize = 10_000;
