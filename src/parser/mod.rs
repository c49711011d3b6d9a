//! Medal table parsing and record definitions.
//!
//! This module handles:
//! - Loading the CSV and resolving its columns
//! - Validating rows against the known Games years
//! - Parsing race times
//! - Tagging relay events

pub mod loader;
pub mod record;
pub mod time;

// Re-export main types
pub use loader::{load_dataset, load_dataset_from_reader, LoadOptions};
pub use record::{EventType, Medal, MedalDataset, MedalRank, MedalRecord, SkippedRow};
pub use time::{parse_time, RaceTime};
