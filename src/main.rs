//! Medal Journey CLI
//!
//! Derives chart data from an athlete's Olympic medal table and writes it
//! as a JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use medal_journey::commands::{
    display_schema, display_version, execute_report, validate_args, validate_data_file,
    ReportArgs, ReportView,
};

/// Medal Journey - chart data for an Olympic medal record
#[derive(Parser, Debug)]
#[command(name = "medal-journey")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive chart views and write a JSON report
    Report {
        /// Medal CSV (Year/Date, Event, Medal, Time, Note)
        #[arg(short, long, env = "MEDAL_JOURNEY_DATA")]
        data: Option<PathBuf>,

        /// Dashboard configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "artifacts/report.json")]
        output: PathBuf,

        /// Views to include (repeatable, default: all)
        #[arg(long = "view", value_enum)]
        views: Vec<ReportView>,

        /// Event to chart as a time series (repeatable)
        #[arg(short, long = "event")]
        events: Vec<String>,

        /// Fail on the first malformed row
        #[arg(long)]
        strict: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Load a medal CSV and report what it contains
    Validate {
        /// Medal CSV
        #[arg(short, long, env = "MEDAL_JOURNEY_DATA")]
        data: Option<PathBuf>,

        /// Dashboard configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fail on the first malformed row
        #[arg(long)]
        strict: bool,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            data,
            config,
            output,
            views,
            events,
            strict,
            summary,
        } => {
            let args = ReportArgs {
                data,
                config,
                output: Some(output),
                views,
                events,
                strict,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_report(args)?;
        }

        Commands::Validate {
            data,
            config,
            strict,
        } => {
            let args = ReportArgs {
                data,
                config,
                output: None,
                strict,
                ..Default::default()
            };
            validate_data_file(&args)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
