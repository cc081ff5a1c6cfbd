//! Configuration management and validation.
//!
//! Holds the data directory the city files are read from, the months offered
//! to interactive users and presentation switches. Values are layered:
//! defaults, then environment, then command-line overrides applied by the CLI.

use crate::constants::{DATA_DIR_ENV_VAR, DEFAULT_DATA_DIR, DEFAULT_OFFERED_MONTHS};
use crate::error::{BikeshareError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Runtime configuration for the explorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Directory containing the per-city CSV files
    pub data_dir: PathBuf,

    /// Month numbers (1-12) offered by the interactive month prompt
    pub offered_months: Vec<u32>,

    /// Show how long each report took to compute
    pub show_timing: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            offered_months: DEFAULT_OFFERED_MONTHS.to_vec(),
            show_timing: true,
        }
    }
}

impl ExplorerConfig {
    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using the given lookup
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(DATA_DIR_ENV_VAR).filter(|value| !value.trim().is_empty()) {
            debug!("Data directory taken from {}: {}", DATA_DIR_ENV_VAR, dir);
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the months offered to interactive users
    pub fn with_offered_months(mut self, months: Vec<u32>) -> Self {
        self.offered_months = months;
        self
    }

    /// Hide per-report timing
    pub fn without_timing(mut self) -> Self {
        self.show_timing = false;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.offered_months.is_empty() {
            return Err(BikeshareError::configuration(
                "at least one month must be offered",
            ));
        }

        if let Some(bad) = self.offered_months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(BikeshareError::configuration(format!(
                "offered month {} is outside 1-12",
                bad
            )));
        }

        Ok(())
    }
}
