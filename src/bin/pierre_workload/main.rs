// ABOUTME: pierre-workload - command-line front end for the workload ratio engine
// ABOUTME: Reads JSON workload records and prints the analysis or ratio series as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full analysis, "today" taken from the UTC+9 clock
//! pierre-workload analyze --input records.json
//!
//! # Pin the reference date and restrict to the last 90 days
//! pierre-workload analyze --input records.json --today 2025-03-31 --lookback-days 90
//!
//! # Ratio series only, single-line JSON
//! pierre-workload ratios --input records.json --compact
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pierre_workload::calendar::parse_iso_date;
use pierre_workload::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "pierre-workload",
    about = "Acute:chronic workload ratio analytics",
    long_about = "Computes per-day ACWR, weekly and monthly summaries, trend, insights, and recommendations from daily training loads."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Options shared by every analysis command
#[derive(clap::Args)]
struct InputArgs {
    /// JSON file holding an array of { "date", "load" } records
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Reference date (YYYY-MM-DD) instead of the UTC+9 clock
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Only analyze the last N days ending on the reference date
    #[arg(long)]
    lookback_days: Option<u32>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the full analysis and print the result
    Analyze {
        #[command(flatten)]
        args: InputArgs,
    },

    /// Print only the per-day ratio series
    Ratios {
        #[command(flatten)]
        args: InputArgs,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    parse_iso_date(value).ok_or_else(|| format!("expected YYYY-MM-DD, got '{value}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    let output = match cli.command {
        Command::Analyze { args } => commands::analyze(&args)?,
        Command::Ratios { args } => commands::ratios(&args)?,
    };
    println!("{output}");
    Ok(())
}
