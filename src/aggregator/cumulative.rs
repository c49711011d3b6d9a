//! Running medal totals across the Games.
//!
//! Each row is inclusive of its own year, so the last row equals the
//! career totals.

use super::per_year::YearMedalCount;
use crate::parser::{Medal, MedalRank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Medal counts by rank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTotals {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalTotals {
    pub fn add(&mut self, medal: Medal, count: u32) {
        match medal {
            Medal::Gold => self.gold += count,
            Medal::Silver => self.silver += count,
            Medal::Bronze => self.bronze += count,
        }
    }

    pub fn get(&self, medal: Medal) -> u32 {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }

    /// Human-readable one-liner
    pub fn summary(&self) -> String {
        format!(
            "{} medals ({} Gold + {} Silver + {} Bronze)",
            self.total(),
            self.gold,
            self.silver,
            self.bronze
        )
    }
}

/// Running totals after one Games year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeMedalCount {
    pub year: u16,

    #[serde(flatten)]
    pub totals: MedalTotals,
}

/// Fold per-year counts into running totals
///
/// **Public** - main entry point for the cumulative view
///
/// # Arguments
/// * `per_year` - Output of `per_year_medal_counts`; placeholder rows are ignored
/// * `years` - Known Games years, emitted in chronological order
pub fn cumulative_medal_counts(
    per_year: &[YearMedalCount],
    years: &[u16],
) -> Vec<CumulativeMedalCount> {
    let mut by_year: HashMap<u16, MedalTotals> = HashMap::new();
    for row in per_year {
        if let Some(medal) = rank_to_medal(row.rank) {
            by_year.entry(row.year).or_default().add(medal, row.count);
        }
    }

    let mut years = years.to_vec();
    years.sort_unstable();
    years.dedup();

    let mut running = MedalTotals::default();
    years
        .into_iter()
        .map(|year| {
            if let Some(counts) = by_year.get(&year) {
                running.gold += counts.gold;
                running.silver += counts.silver;
                running.bronze += counts.bronze;
            }
            CumulativeMedalCount {
                year,
                totals: running,
            }
        })
        .collect()
}

fn rank_to_medal(rank: MedalRank) -> Option<Medal> {
    match rank {
        MedalRank::None => None,
        MedalRank::Bronze => Some(Medal::Bronze),
        MedalRank::Silver => Some(Medal::Silver),
        MedalRank::Gold => Some(Medal::Gold),
    }
}
