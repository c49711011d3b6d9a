//! Output JSON schema definitions for dashboard reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{
    CumulativeMedalCount, EventTimeSeries, MedalTotals, ProgressionPoint, YearMedalCount,
};
use crate::parser::{EventType, Medal, MedalRecord};
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Path of the medal table the report was derived from
    pub source: String,

    /// Timestamp when report was generated
    pub generated_at: String,

    /// Career totals
    pub totals: MedalTotals,

    /// Rows dropped during loading
    pub skipped_rows: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_year: Option<Vec<YearMedalCount>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative: Option<Vec<CumulativeMedalCount>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_series: Option<Vec<EventTimeSeries>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression: Option<Vec<ProgressionPoint>>,

    /// Full record table for the data preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<RecordRow>>,
}

/// One row of the data preview table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRow {
    pub year: u16,
    pub event: String,
    pub medal: Option<Medal>,
    pub time: Option<String>,
    pub note: Option<String>,
    pub event_type: EventType,
}

impl From<&MedalRecord> for RecordRow {
    fn from(record: &MedalRecord) -> Self {
        Self {
            year: record.year,
            event: record.event.clone(),
            medal: record.medal,
            time: record.time.as_ref().map(|t| t.display.clone()),
            note: record.note.clone(),
            event_type: record.event_type,
        }
    }
}
