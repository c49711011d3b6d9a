//! Medal Journey
//!
//! Data preparation for an Olympic medal record dashboard. Loads a small
//! medal table and derives chart-ready views: medals per Games, running
//! totals, event time series and the medal progression.
//!
//! ```ignore
//! use medal_journey::aggregator::{cumulative_medal_counts, per_year_medal_counts};
//! use medal_journey::parser::{load_dataset, LoadOptions};
//!
//! let dataset = load_dataset("data/mp_olympics_medals_data.csv", &LoadOptions::default())?;
//! let per_year = per_year_medal_counts(&dataset);
//! let cumulative = cumulative_medal_counts(&per_year, dataset.years());
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
