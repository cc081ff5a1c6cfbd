//! Command-line argument definitions for the bikeshare explorer
//!
//! Without `--city` the explorer runs the interactive prompt session. With
//! `--city` it loads the requested data once, prints the reports and exits.

use crate::config::ExplorerConfig;
use clap::Parser;
use std::path::PathBuf;

/// Explore US bikeshare trip data
///
/// Loads a city's trip records, optionally narrows them to one month and/or
/// one day of the week, and prints the most common travel times, the most
/// popular stations, trip duration totals and rider demographics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bikeshare",
    version,
    about = "Explore US bikeshare trip data from the command line"
)]
pub struct Args {
    /// City to explore (chicago, new york city, washington)
    ///
    /// When omitted the explorer asks for the city, month and day interactively.
    #[arg(short = 'c', long = "city", value_name = "CITY")]
    pub city: Option<String>,

    /// Month to filter by (full month name) or "all"
    #[arg(short = 'm', long = "month", value_name = "MONTH", default_value = "all")]
    pub month: String,

    /// Day of week to filter by (full weekday name) or "all"
    #[arg(short = 'd', long = "day", value_name = "DAY", default_value = "all")]
    pub day: String,

    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    ///
    /// Defaults to $BIKESHARE_DATA_DIR, then the current directory.
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Read trips from this CSV instead of the city's default file
    #[arg(long = "file", value_name = "FILE", requires = "city")]
    pub file: Option<PathBuf>,

    /// Hide how long each report took to compute
    #[arg(long = "no-timing")]
    pub no_timing: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors in the log output
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the tracing level implied by --verbose/--quiet
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Whether to run the prompt session instead of a single query
    pub fn is_interactive(&self) -> bool {
        self.city.is_none()
    }

    /// Apply command-line overrides on top of a layered configuration
    pub fn apply_overrides(&self, mut config: ExplorerConfig) -> ExplorerConfig {
        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir.clone());
        }
        if self.no_timing {
            config = config.without_timing();
        }
        config
    }
}
