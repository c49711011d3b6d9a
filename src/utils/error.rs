//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the medal dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be located or opened
    #[error("Data source not found: {path}: {source}")]
    DataNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that can occur while parsing a race time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Malformed time: {0:?}")]
    MalformedTime(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading the dashboard configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
