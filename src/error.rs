//! Error handling for bikeshare exploration.
//!
//! Covers filter validation, data source resolution, schema problems in the
//! source files and statistics requested over an empty dataset.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Unknown city '{input}'. Choose one of: {}", crate::models::City::key_list())]
    InvalidCity { input: String },

    #[error("Unknown month '{input}'. Enter a full month name or 'all'")]
    InvalidMonth { input: String },

    #[error("Month '{month}' is valid but has no data available. Available months: {offered}")]
    MonthNotOffered { month: String, offered: String },

    #[error("Unknown day '{input}'. Enter a full weekday name or 'all'")]
    InvalidDay { input: String },

    #[error("Unknown filter '{input}'. Choose month, day, both or none")]
    InvalidFilterMode { input: String },

    #[error("Unrecognised answer '{input}'. Please enter yes or no")]
    InvalidAnswer { input: String },

    #[error("Data source not found at path: {path}")]
    DataSourceNotFound { path: PathBuf },

    #[error("Required column '{column}' missing from: {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Column '{column}' in {path} has an unusable type: {reason}")]
    InvalidColumnType {
        path: PathBuf,
        column: String,
        reason: String,
    },

    #[error("Cannot compute {statistic}: the dataset has no trips")]
    EmptyDataset { statistic: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl BikeshareError {
    /// Create an empty dataset error for the named statistic
    pub fn empty_dataset(statistic: impl Into<String>) -> Self {
        Self::EmptyDataset {
            statistic: statistic.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
