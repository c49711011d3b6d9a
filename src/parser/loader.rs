//! CSV loading and row validation.
//!
//! Required columns: Year (or Date), Event, Medal, Time, Note.
//! The file handle lives only for the duration of a single load call.

use super::record::{Medal, MedalDataset, MedalRecord, SkippedRow};
use super::time::RaceTime;
use crate::utils::config::{
    RowPolicy, DATE_COLUMN, DEFAULT_GAMES_YEARS, EVENT_COLUMN, MEDAL_COLUMN, NOTE_COLUMN,
    TIME_COLUMN, YEAR_COLUMN,
};
use crate::utils::error::LoadError;
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Options controlling a load
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Known Games years; rows outside this set are malformed
    pub years: Vec<u16>,

    /// Malformed row handling
    pub row_policy: RowPolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            years: DEFAULT_GAMES_YEARS.to_vec(),
            row_policy: RowPolicy::default(),
        }
    }
}

impl LoadOptions {
    pub fn with_row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }

    pub fn with_years(mut self, years: Vec<u16>) -> Self {
        self.years = years;
        self
    }
}

/// Where the year of a row comes from
#[derive(Debug, Clone, Copy)]
enum YearSource {
    Year(usize),
    Date,
}

#[derive(Debug, Clone)]
struct ColumnIndices {
    year: YearSource,
    date: Option<usize>,
    event: usize,
    medal: usize,
    time: usize,
    note: usize,
}

impl ColumnIndices {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let lookup =
            |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));

        let date = find(DATE_COLUMN);
        let year = match (find(YEAR_COLUMN), date) {
            (Some(idx), _) => YearSource::Year(idx),
            (None, Some(_)) => YearSource::Date,
            (None, None) => {
                return Err(LoadError::MissingColumn(format!(
                    "{} or {}",
                    YEAR_COLUMN, DATE_COLUMN
                )))
            }
        };

        Ok(Self {
            year,
            date,
            event: lookup(EVENT_COLUMN)?,
            medal: lookup(MEDAL_COLUMN)?,
            time: lookup(TIME_COLUMN)?,
            note: lookup(NOTE_COLUMN)?,
        })
    }
}

/// Load the medal table from a CSV file
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::DataNotFound` - the file cannot be opened
/// * `LoadError::MissingColumn` - a required column is absent
/// * `LoadError::MalformedRow` - a row failed validation under `RowPolicy::Fail`
/// * `LoadError::Csv` - the CSV itself cannot be read
pub fn load_dataset(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<MedalDataset, LoadError> {
    let path = path.as_ref();
    info!("Loading medal data from: {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::DataNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    load_dataset_from_reader(file, options)
}

/// Load the medal table from any reader
///
/// **Public** - used by `load_dataset` and by in-memory callers
pub fn load_dataset_from_reader<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<MedalDataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let cols = ColumnIndices::from_headers(&headers)?;
    debug!("Resolved columns: {:?}", cols);

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for row in reader.records() {
        let (line, parsed) = match row {
            Ok(row) => {
                let line = row.position().map(|p| p.line()).unwrap_or(0);
                (line, parse_row(&row, &cols, &options.years))
            }
            // a bad encoding spoils one row, not the reader
            Err(err) if matches!(err.kind(), csv::ErrorKind::Utf8 { .. }) => {
                let line = err.position().map(|p| p.line()).unwrap_or(0);
                (line, Err(format!("invalid UTF-8: {}", err)))
            }
            Err(err) => return Err(LoadError::Csv(err)),
        };

        match parsed {
            Ok(record) => records.push(record),
            Err(reason) => match options.row_policy {
                RowPolicy::Fail => return Err(LoadError::MalformedRow { line, reason }),
                RowPolicy::Skip => {
                    warn!("Skipping malformed row at line {}: {}", line, reason);
                    skipped.push(SkippedRow { line, reason });
                }
            },
        }
    }

    info!(
        "Loaded {} records ({} medals, {} skipped)",
        records.len(),
        records.iter().filter(|r| r.is_medal()).count(),
        skipped.len()
    );

    Ok(MedalDataset::new(records, &options.years).with_skipped(skipped))
}

/// Validate one row and turn it into a record
///
/// **Private** - returns the rejection reason as a plain string
fn parse_row(row: &StringRecord, cols: &ColumnIndices, years: &[u16]) -> Result<MedalRecord, String> {
    let field = |idx: usize, name: &str| {
        row.get(idx)
            .ok_or_else(|| format!("missing {} field", name))
    };

    let date = match cols.date {
        Some(idx) => parse_date(field(idx, DATE_COLUMN)?)?,
        None => None,
    };

    let year = match cols.year {
        YearSource::Year(idx) => {
            let cell = field(idx, YEAR_COLUMN)?;
            cell.parse::<u16>()
                .map_err(|_| format!("invalid year {:?}", cell))?
        }
        YearSource::Date => date
            .map(|d| d.year())
            .and_then(|y| u16::try_from(y).ok())
            .ok_or_else(|| "missing date".to_string())?,
    };

    if !years.contains(&year) {
        return Err(format!("{} is not a known Games year", year));
    }

    let event = field(cols.event, EVENT_COLUMN)?;
    if event.is_empty() {
        return Err("empty event name".to_string());
    }

    let medal_cell = field(cols.medal, MEDAL_COLUMN)?;
    let medal = Medal::from_cell(medal_cell);
    if medal.is_none() && !is_blank_medal(medal_cell) {
        debug!("Treating medal {:?} for {} {} as no medal", medal_cell, year, event);
    }

    let time_cell = field(cols.time, TIME_COLUMN)?;
    let time = if time_cell.is_empty() {
        None
    } else {
        Some(RaceTime::parse(time_cell).map_err(|e| e.to_string())?)
    };

    let note = field(cols.note, NOTE_COLUMN)?;

    let mut record = MedalRecord::new(year, event, medal, None).map_err(|e| e.to_string())?;
    record.time = time;
    record.date = date;
    if !note.is_empty() {
        record.note = Some(note.to_string());
    }

    Ok(record)
}

fn parse_date(cell: &str) -> Result<Option<NaiveDate>, String> {
    if cell.is_empty() {
        return Ok(None);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
        .map(Some)
        .ok_or_else(|| format!("invalid date {:?}", cell))
}

fn is_blank_medal(cell: &str) -> bool {
    matches!(cell, "" | "None" | "none" | "nan" | "NaN")
}
