//! City to data source resolution.
//!
//! Each [`City`] names a fixed file; only the directory it is resolved
//! against comes from configuration.

use crate::error::{BikeshareError, Result};
use crate::models::City;
use std::path::PathBuf;
use tracing::debug;

/// Resolves cities to CSV files under a data directory
#[derive(Debug, Clone)]
pub struct CitySources {
    data_dir: PathBuf,
}

impl CitySources {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path the city's file is expected at, whether or not it exists
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Path of the city's file, failing if it does not exist
    pub fn resolve(&self, city: City) -> Result<PathBuf> {
        let path = self.path_for(city);
        if !path.is_file() {
            return Err(BikeshareError::DataSourceNotFound { path });
        }

        debug!("Resolved {} to {}", city, path.display());
        Ok(path)
    }
}
