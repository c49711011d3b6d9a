//! Career totals and the medal-by-medal progression.

use super::cumulative::MedalTotals;
use crate::parser::{Medal, MedalDataset};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A medal and how many the athlete had after winning it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    pub year: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    pub event: String,
    pub medal: Medal,

    /// Running medal count, starting at 1
    pub medal_count: u32,
}

/// Medals won, chronologically, with a running count
///
/// **Public** - animation frames for the progression chart
///
/// Sorted by year, then by date where the source has one. Ties keep
/// source order.
pub fn medal_progression(dataset: &MedalDataset) -> Vec<ProgressionPoint> {
    let mut medals: Vec<_> = dataset
        .medal_records()
        .filter_map(|r| r.medal.map(|m| (r, m)))
        .collect();

    medals.sort_by_key(|(r, _)| (r.year, r.date));

    medals
        .into_iter()
        .zip(1u32..)
        .map(|((record, medal), medal_count)| ProgressionPoint {
            year: record.year,
            date: record.date,
            event: record.event.clone(),
            medal,
            medal_count,
        })
        .collect()
}

/// Career medal totals by rank
pub fn medal_totals(dataset: &MedalDataset) -> MedalTotals {
    let mut totals = MedalTotals::default();
    for medal in dataset.medal_records().filter_map(|r| r.medal) {
        totals.add(medal, 1);
    }
    totals
}
