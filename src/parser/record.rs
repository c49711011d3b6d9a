//! Medal record model.
//!
//! One `MedalRecord` per performance. A `MedalDataset` is the immutable
//! value every derivation function takes as input.

use super::time::RaceTime;
use crate::utils::config::RELAY_MARKER;
use crate::utils::error::TimeError;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// A real medal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
}

impl Medal {
    /// Parse a medal cell. Anything that is not exactly one of the three
    /// ranks is a non-medal performance.
    pub fn from_cell(cell: &str) -> Option<Self> {
        match cell.trim() {
            "Gold" => Some(Self::Gold),
            "Silver" => Some(Self::Silver),
            "Bronze" => Some(Self::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        }
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stacking rank for per-year chart rows
///
/// Declaration order is the stacking order: `None` at the bottom, `Gold` on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MedalRank {
    /// Placeholder for a Games year without medals
    None,
    Bronze,
    Silver,
    Gold,
}

impl From<Medal> for MedalRank {
    fn from(medal: Medal) -> Self {
        match medal {
            Medal::Bronze => Self::Bronze,
            Medal::Silver => Self::Silver,
            Medal::Gold => Self::Gold,
        }
    }
}

impl MedalRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
        }
    }
}

/// Individual or team event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "Individual")]
    Individual,
    #[serde(rename = "Team (Relay)")]
    TeamRelay,
}

impl EventType {
    /// Classify an event by name
    pub fn classify(event: &str) -> Self {
        if event.contains(RELAY_MARKER) {
            Self::TeamRelay
        } else {
            Self::Individual
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::TeamRelay => "Team (Relay)",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One performance at one Games
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedalRecord {
    /// Games year
    pub year: u16,

    /// Competition date, when the source has a Date column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Event name (e.g. "Men 200 Butterfly")
    pub event: String,

    /// Medal won, `None` for a non-medal swim
    pub medal: Option<Medal>,

    /// Race time
    pub time: Option<RaceTime>,

    /// Free-text annotation
    pub note: Option<String>,

    /// Derived from the event name
    pub event_type: EventType,
}

impl MedalRecord {
    /// Build a record, parsing the time string
    ///
    /// **Public** - used by the loader and handy for building fixtures
    pub fn new(
        year: u16,
        event: impl Into<String>,
        medal: Option<Medal>,
        time: Option<&str>,
    ) -> Result<Self, TimeError> {
        let event = event.into();
        let time = time.map(RaceTime::parse).transpose()?;
        Ok(Self {
            year,
            date: None,
            event_type: EventType::classify(&event),
            event,
            medal,
            time,
            note: None,
        })
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn is_medal(&self) -> bool {
        self.medal.is_some()
    }
}

/// A row the loader dropped under `RowPolicy::Skip`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line in the source file
    pub line: u64,
    pub reason: String,
}

/// The loaded table plus the Games years it is interpreted against
#[derive(Debug, Clone, PartialEq)]
pub struct MedalDataset {
    records: Vec<MedalRecord>,
    years: Vec<u16>,
    skipped: Vec<SkippedRow>,
}

impl MedalDataset {
    /// Create a dataset; `years` is sorted and deduplicated
    ///
    /// Years that records carry but `years` lacks are added, so every
    /// medal lands in some Games year of the cumulative view.
    pub fn new(records: Vec<MedalRecord>, years: &[u16]) -> Self {
        let mut years = years.to_vec();
        for record in &records {
            if !years.contains(&record.year) {
                debug!("Adding {} to the Games years", record.year);
                years.push(record.year);
            }
        }
        years.sort_unstable();
        years.dedup();
        Self {
            records,
            years,
            skipped: Vec::new(),
        }
    }

    pub(crate) fn with_skipped(mut self, skipped: Vec<SkippedRow>) -> Self {
        self.skipped = skipped;
        self
    }

    /// All records in source order
    pub fn records(&self) -> &[MedalRecord] {
        &self.records
    }

    /// Records that won a medal, in source order
    pub fn medal_records(&self) -> impl Iterator<Item = &MedalRecord> {
        self.records.iter().filter(|r| r.is_medal())
    }

    /// Known Games years, chronological
    pub fn years(&self) -> &[u16] {
        &self.years
    }

    /// Rows dropped during loading
    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
