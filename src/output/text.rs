//! Terminal summary of a dashboard report.

use super::schema::DashboardReport;
use crate::aggregator::{CumulativeMedalCount, EventTimeSeries, YearMedalCount};
use crate::parser::MedalRank;
use colored::*;

const RULE: &str = "────────────────────────────────────────────────────────";

/// Render a report as coloured text
///
/// **Public** - used by the report command with `--summary`
pub fn render_terminal_report(report: &DashboardReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    if let Some(per_year) = &report.per_year {
        out.push_str(&render_per_year(per_year));
    }
    if let Some(cumulative) = &report.cumulative {
        out.push_str(&render_cumulative(cumulative));
    }
    if let Some(series) = &report.time_series {
        for s in series {
            out.push_str(&render_series(s));
        }
    }
    out.push_str(&format!("{}\n", RULE));

    out
}

fn render_header(report: &DashboardReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", RULE));
    out.push_str(&format!("  {}\n", "OLYMPIC MEDAL JOURNEY".bold()));
    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!("  Source: {}\n", report.source));
    out.push_str(&format!("  {}\n", report.totals.summary().yellow()));
    if report.skipped_rows > 0 {
        let skipped = format!("{} malformed rows skipped", report.skipped_rows);
        out.push_str(&format!("  {}\n", skipped.red()));
    }
    out
}

fn render_per_year(rows: &[YearMedalCount]) -> String {
    let mut out = format!("\n  {}\n", "Medals per Games".bold());
    for row in rows {
        let label = colour_rank(row.rank);
        let note = row
            .annotation
            .as_ref()
            .map(|n| format!("  ({})", n))
            .unwrap_or_default();
        out.push_str(&format!(
            "    {}  {:<7} {:>2}{}\n",
            row.year, label, row.count, note
        ));
    }
    out
}

fn render_cumulative(rows: &[CumulativeMedalCount]) -> String {
    let mut out = format!("\n  {}\n", "Cumulative totals".bold());
    for row in rows {
        out.push_str(&format!(
            "    {}  G {:>2}  S {:>2}  B {:>2}  = {:>2}\n",
            row.year,
            row.totals.gold,
            row.totals.silver,
            row.totals.bronze,
            row.totals.total()
        ));
    }
    out
}

fn render_series(series: &EventTimeSeries) -> String {
    let mut out = format!("\n  {}\n", series.label().bold());
    let best = series.best().map(|p| p.year);
    for point in &series.points {
        let marker = if Some(point.year) == best { " *" } else { "" };
        out.push_str(&format!(
            "    {}  {:>8}  ({:.2}s){}\n",
            point.year, point.time, point.seconds, marker
        ));
    }
    out
}

fn colour_rank(rank: MedalRank) -> ColoredString {
    match rank {
        MedalRank::Gold => rank.as_str().yellow(),
        MedalRank::Silver => rank.as_str().white(),
        MedalRank::Bronze => rank.as_str().red(),
        MedalRank::None => rank.as_str().dimmed(),
    }
}
