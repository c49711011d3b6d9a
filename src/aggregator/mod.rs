//! Derivation of chart-ready views from the medal table.
//!
//! Each view is an independent pure function of a `MedalDataset`:
//! - Per-year medal counts (stacked bars)
//! - Cumulative medal totals
//! - Event time series (line chart)
//! - Medal progression and career totals

pub mod cumulative;
pub mod per_year;
pub mod progression;
pub mod time_series;

// Re-export main types and functions
pub use cumulative::{cumulative_medal_counts, CumulativeMedalCount, MedalTotals};
pub use per_year::{per_year_medal_counts, YearMedalCount};
pub use progression::{medal_progression, medal_totals, ProgressionPoint};
pub use time_series::{event_time_series, EventTimeSeries, TimePoint};
