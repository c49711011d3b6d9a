use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Derived views a report can include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportView {
    /// Medal counts per Games year
    PerYear,
    /// Running medal totals
    Cumulative,
    /// Times of the tracked events
    TimeSeries,
    /// Medal-by-medal running count
    Progression,
    /// Full record table
    Records,
}

impl ReportView {
    pub const ALL: [ReportView; 5] = [
        ReportView::PerYear,
        ReportView::Cumulative,
        ReportView::TimeSeries,
        ReportView::Progression,
        ReportView::Records,
    ];
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Medal CSV (falls back to the config, then the default path)
    pub data: Option<PathBuf>,

    /// Optional dashboard configuration file (TOML)
    pub config: Option<PathBuf>,

    /// Path to write the report JSON
    pub output: Option<PathBuf>,

    /// Views to include (empty = all)
    pub views: Vec<ReportView>,

    /// Events to chart as time series (empty = configured events)
    pub events: Vec<String>,

    /// Fail on the first malformed row instead of skipping it
    pub strict: bool,

    /// Print a human-readable summary to the terminal
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            data: None,
            config: None,
            output: Some(PathBuf::from("artifacts/report.json")),
            views: Vec::new(),
            events: Vec::new(),
            strict: false,
            print_summary: false,
        }
    }
}

impl ReportArgs {
    /// Requested views, all of them when none were named
    pub fn effective_views(&self) -> Vec<ReportView> {
        if self.views.is_empty() {
            ReportView::ALL.to_vec()
        } else {
            self.views.clone()
        }
    }
}
