//! Output writers for dashboard reports.
//!
//! This module handles:
//! - The versioned report schema
//! - JSON reports (write and read back)
//! - Coloured terminal summaries

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use schema::{DashboardReport, RecordRow};
pub use text::render_terminal_report;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
