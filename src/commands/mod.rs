//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::{ReportArgs, ReportView};
pub use report::{build_report, execute_report, resolve_settings, validate_args, ResolvedSettings};
pub use utils::{display_schema, display_version, validate_data_file};
