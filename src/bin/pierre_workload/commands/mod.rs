// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command implementations for pierre-workload
// ABOUTME: Builds the analyzer from config and CLI flags, then renders results as JSON

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use pierre_workload::calendar::{Clock, FixedClock, FixedOffsetClock};
use pierre_workload::models::AnalysisResult;
use pierre_workload::supplier::{JsonFileSupplier, WorkloadRecordSupplier};
use pierre_workload::{AnalysisConfig, WorkloadAnalyzer};

use crate::InputArgs;

/// Full analysis as JSON
pub fn analyze(args: &InputArgs) -> Result<String> {
    let result = run(args)?;
    render(&result, args.compact)
}

/// Ratio series as JSON
pub fn ratios(args: &InputArgs) -> Result<String> {
    let result = run(args)?;
    render(&result.ratio_points, args.compact)
}

fn run(args: &InputArgs) -> Result<AnalysisResult> {
    let config = AnalysisConfig::load()
        .context("invalid WORKLOAD_* configuration")?
        .with_lookback_days(args.lookback_days)
        .context("invalid --lookback-days")?;

    let clock: Arc<dyn Clock> = match args.today {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(FixedOffsetClock::kst()),
    };

    let supplier = JsonFileSupplier::new(&args.input);
    let records = supplier
        .fetch()
        .with_context(|| format!("failed to read {}", supplier.path().display()))?;
    info!(path = %supplier.path().display(), records = records.len(), "analyzing");

    Ok(WorkloadAnalyzer::new(config, clock).analyze(&records))
}

fn render<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Command};
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn input_args(argv: &[&str]) -> InputArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Analyze { args } | Command::Ratios { args } => args,
        }
    }

    fn write_records(dir: &TempDir) -> String {
        let path = dir.path().join("records.json");
        let records: Vec<serde_json::Value> = (1..=14)
            .map(|day| serde_json::json!({ "date": format!("2025-03-{day:02}"), "load": 50 }))
            .collect();
        fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_zero_lookback_days_is_rejected() {
        let dir = TempDir::new().unwrap();
        let input = write_records(&dir);
        let args = input_args(&[
            "pierre-workload",
            "analyze",
            "--input",
            &input,
            "--today",
            "2025-03-14",
            "--lookback-days",
            "0",
        ]);

        let error = analyze(&args).unwrap_err();
        assert!(format!("{error:#}").contains("lookback"), "{error:#}");
    }

    #[test]
    fn test_lookback_days_limits_ratio_series() {
        let dir = TempDir::new().unwrap();
        let input = write_records(&dir);
        let args = input_args(&[
            "pierre-workload",
            "ratios",
            "--input",
            &input,
            "--today",
            "2025-03-14",
            "--lookback-days",
            "5",
            "--compact",
        ]);

        let output = ratios(&args).unwrap();
        let points: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0]["date"], "2025-03-10");
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_analyze_reports_generated_on_from_today_flag() {
        let dir = TempDir::new().unwrap();
        let input = write_records(&dir);
        let args = input_args(&[
            "pierre-workload",
            "analyze",
            "--input",
            &input,
            "--today",
            "2025-04-01",
        ]);

        let output = analyze(&args).unwrap();
        let result: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(result["generatedOn"], "2025-04-01");
        assert_eq!(result["ratioPoints"].as_array().unwrap().len(), 14);
    }

    #[test]
    fn test_missing_input_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.json").display().to_string();
        let args = input_args(&["pierre-workload", "analyze", "--input", &missing]);
        assert!(analyze(&args).is_err());
    }

    #[test]
    fn test_invalid_today_is_a_parse_error() {
        let parsed = Cli::try_parse_from([
            "pierre-workload",
            "analyze",
            "--input",
            "records.json",
            "--today",
            "2025-13-01",
        ]);
        assert!(parsed.is_err());
    }
}
