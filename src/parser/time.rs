//! Race time parsing.
//!
//! Accepted formats:
//! - `SS.ss` or `SS` (plain seconds)
//! - `MM:SS.ss` or `MM:SS` (minutes, colon, seconds)
//!
//! Anything else (hours, signs, exponents, stray characters) is a
//! `TimeError::MalformedTime`.

use crate::utils::error::TimeError;
use serde::{Deserialize, Serialize};

/// A parsed race time, keeping the string as it was written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceTime {
    /// Original time string (e.g. "1:52.03")
    pub display: String,

    /// Total seconds (e.g. 112.03)
    pub seconds: f64,
}

impl RaceTime {
    /// Parse a time string into a `RaceTime`
    pub fn parse(input: &str) -> Result<Self, TimeError> {
        let seconds = parse_time(input)?;
        Ok(Self {
            display: input.trim().to_string(),
            seconds,
        })
    }
}

impl std::str::FromStr for RaceTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RaceTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

/// Convert a time string to seconds
///
/// **Public** - used by the loader and by time-series callers
///
/// # Examples
/// ```ignore
/// assert_eq!(parse_time("50.58")?, 50.58);
/// assert!((parse_time("1:52.03")? - 112.03).abs() < 1e-9);
/// ```
///
/// # Errors
/// * `TimeError::MalformedTime` - non-numeric component, more than one
///   colon, or an empty side of the colon
pub fn parse_time(input: &str) -> Result<f64, TimeError> {
    let trimmed = input.trim();
    let malformed = || TimeError::MalformedTime(input.to_string());

    match trimmed.split_once(':') {
        Some((minutes, seconds)) => {
            if seconds.contains(':') {
                return Err(malformed());
            }
            if minutes.is_empty() || !minutes.chars().all(|c| c.is_ascii_digit()) {
                return Err(malformed());
            }
            let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
            let seconds = parse_seconds(seconds).ok_or_else(malformed)?;
            Ok(f64::from(minutes) * 60.0 + seconds)
        }
        None => parse_seconds(trimmed).ok_or_else(malformed),
    }
}

/// Parse an unsigned decimal with at most one point
///
/// `f64::from_str` alone would also accept "inf", "1e3" and "-5".
fn parse_seconds(s: &str) -> Option<f64> {
    let mut digits = 0usize;
    let mut points = 0usize;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }
    s.parse::<f64>().ok()
}
