//! Report command implementation.
//!
//! The report command:
//! 1. Resolves configuration (file, then CLI overrides)
//! 2. Loads and validates the medal table
//! 3. Derives the requested views
//! 4. Writes the JSON report and optional terminal summary

use crate::aggregator::{
    cumulative_medal_counts, event_time_series, medal_progression, medal_totals,
    per_year_medal_counts,
};
use crate::commands::models::{ReportArgs, ReportView};
use crate::output::{render_terminal_report, write_report, DashboardReport, RecordRow};
use crate::parser::{load_dataset, LoadOptions, MedalDataset};
use crate::utils::config::{load_config, DashboardConfig, RowPolicy, SCHEMA_VERSION};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Settings after merging the config file with CLI flags
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub data: PathBuf,
    pub load: LoadOptions,
    pub events: Vec<String>,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The generated report, after it has been written
///
/// # Errors
/// * Config file read/parse errors
/// * `DataNotFound` when the CSV is missing
/// * Malformed rows under `--strict`
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<DashboardReport> {
    let start_time = Instant::now();

    let settings = resolve_settings(&args)?;
    info!("Building report from: {}", settings.data.display());

    let dataset = load_dataset(&settings.data, &settings.load)
        .with_context(|| format!("Failed to load medal data from {}", settings.data.display()))?;

    let views = args.effective_views();
    debug!("Requested views: {:?}", views);

    let report = build_report(
        &dataset,
        &settings.data.display().to_string(),
        &settings.events,
        &views,
    );

    if let Some(path) = &args.output {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("{}", render_terminal_report(&report));
    }

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(report)
}

/// Merge the optional config file with CLI overrides
///
/// **Public** - shared with the validate command
pub fn resolve_settings(args: &ReportArgs) -> Result<ResolvedSettings> {
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    let row_policy = if args.strict {
        RowPolicy::Fail
    } else {
        config.data.row_policy
    };

    let events = if args.events.is_empty() {
        config.series.events.clone()
    } else {
        args.events.clone()
    };

    Ok(ResolvedSettings {
        data: args.data.clone().unwrap_or_else(|| config.data.path.clone()),
        load: LoadOptions::default()
            .with_years(config.sorted_years())
            .with_row_policy(row_policy),
        events,
    })
}

/// Derive the requested views from a loaded dataset
///
/// **Public** - pure apart from the timestamp; the same dataset always
/// yields the same rows in the same order
pub fn build_report(
    dataset: &MedalDataset,
    source: &str,
    events: &[String],
    views: &[ReportView],
) -> DashboardReport {
    let wants = |view: ReportView| views.contains(&view);

    let per_year = if wants(ReportView::PerYear) || wants(ReportView::Cumulative) {
        Some(per_year_medal_counts(dataset))
    } else {
        None
    };

    let cumulative = if wants(ReportView::Cumulative) {
        per_year
            .as_deref()
            .map(|rows| cumulative_medal_counts(rows, dataset.years()))
    } else {
        None
    };

    DashboardReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        totals: medal_totals(dataset),
        skipped_rows: dataset.skipped().len(),
        per_year: per_year.filter(|_| wants(ReportView::PerYear)),
        cumulative,
        time_series: wants(ReportView::TimeSeries).then(|| event_time_series(dataset, events)),
        progression: wants(ReportView::Progression).then(|| medal_progression(dataset)),
        records: wants(ReportView::Records)
            .then(|| dataset.records().iter().map(RecordRow::from).collect()),
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if let Some(data) = &args.data {
        if data.as_os_str().is_empty() {
            anyhow::bail!("Data path cannot be empty");
        }
    }

    if let Some(output) = &args.output {
        crate::output::validate_path(output).context("Invalid output path")?;
    }

    if args.events.iter().any(|e| e.trim().is_empty()) {
        anyhow::bail!("Event names cannot be empty");
    }

    Ok(())
}
