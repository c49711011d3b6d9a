use anyhow::{Context, Result};
use crate::commands::models::ReportArgs;
use crate::commands::report::resolve_settings;
use crate::parser::load_dataset;
use crate::utils::config::SCHEMA_VERSION;

/// Load a medal table and report what was found
pub fn validate_data_file(args: &ReportArgs) -> Result<()> {
    let settings = resolve_settings(args)?;

    println!("Validating medal data: {}", settings.data.display());

    let dataset = load_dataset(&settings.data, &settings.load)
        .with_context(|| format!("Failed to load {}", settings.data.display()))?;

    println!("✓ Valid medal table");
    println!("  Records: {}", dataset.len());
    println!("  Medals: {}", dataset.medal_records().count());
    println!("  Games: {:?}", dataset.years());
    println!("  Skipped rows: {}", dataset.skipped().len());
    for row in dataset.skipped() {
        println!("    line {}: {}", row.line, row.reason);
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Medal Journey Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Input columns: Year (or Date), Event, Medal, Time, Note");
        println!();
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Medal table path");
        println!("  generated_at: string     - RFC 3339 timestamp");
        println!("  totals: object           - Career gold/silver/bronze");
        println!("  skipped_rows: number     - Malformed rows dropped");
        println!("  per_year: array?         - year, rank, count, annotation?");
        println!("  cumulative: array?       - year, gold, silver, bronze (running)");
        println!("  time_series: array?      - event, points[year, seconds, time]");
        println!("  progression: array?      - year, date?, event, medal, medal_count");
        println!("  records: array?          - year, event, medal, time, note, event_type");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Medal Journey v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Data preparation for an Olympic medal record dashboard.");
}
