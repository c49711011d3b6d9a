//! Per-year medal counts for the stacked bar chart.
//!
//! Every known Games year appears in the output. A year without medals
//! gets a single `MedalRank::None` row with a zero count.

use crate::parser::{MedalDataset, MedalRank};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One bar segment: how many medals of one rank were won in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMedalCount {
    pub year: u16,
    pub rank: MedalRank,
    pub count: u32,

    /// Notes of the year's non-medal swims, only set on placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl YearMedalCount {
    pub fn is_placeholder(&self) -> bool {
        self.rank == MedalRank::None
    }
}

/// Count medals per (year, rank), filling medal-less Games years
///
/// **Public** - main entry point for the per-year view
///
/// # Returns
/// Rows ordered by year, then by stacking rank (None, Bronze, Silver, Gold)
pub fn per_year_medal_counts(dataset: &MedalDataset) -> Vec<YearMedalCount> {
    let mut counts: BTreeMap<(u16, MedalRank), u32> = BTreeMap::new();

    for record in dataset.medal_records() {
        if let Some(medal) = record.medal {
            *counts.entry((record.year, medal.into())).or_insert(0) += 1;
        }
    }

    for &year in dataset.years() {
        if !counts.keys().any(|(y, _)| *y == year) {
            debug!("No medals in {}, inserting placeholder", year);
            counts.insert((year, MedalRank::None), 0);
        }
    }

    counts
        .into_iter()
        .map(|((year, rank), count)| YearMedalCount {
            year,
            rank,
            count,
            annotation: if rank == MedalRank::None {
                placeholder_annotation(dataset, year)
            } else {
                None
            },
        })
        .collect()
}

/// Join the notes of a year's non-medal swims
fn placeholder_annotation(dataset: &MedalDataset, year: u16) -> Option<String> {
    let notes: Vec<&str> = dataset
        .records()
        .iter()
        .filter(|r| r.year == year && !r.is_medal())
        .filter_map(|r| r.note.as_deref())
        .collect();

    if notes.is_empty() {
        None
    } else {
        Some(notes.join("; "))
    }
}
