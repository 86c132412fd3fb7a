// ABOUTME: Shared test utilities and builders for workload integration tests
// ABOUTME: Provides quiet logging setup, date helpers, record generators, and bucket builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_workload`

use std::sync::{Arc, Once};

use chrono::{Datelike, Days, NaiveDate};
use pierre_workload::calendar::{week_number, FixedClock};
use pierre_workload::models::{
    BucketStats, MonthlyBucket, RatioPoint, RawWorkloadRecord, RiskLevel, TrendDirection,
    WeeklyBucket, WorkloadRecord,
};
use pierre_workload::{AnalysisConfig, WorkloadAnalyzer};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn record(on: NaiveDate, load: f64) -> WorkloadRecord {
    WorkloadRecord { date: on, load }
}

pub fn raw(on: NaiveDate, load: f64) -> RawWorkloadRecord {
    RawWorkloadRecord::new(on.format("%Y-%m-%d").to_string(), load)
}

/// `days` consecutive records starting at `start`, load chosen per day index
pub fn daily_records(start: NaiveDate, days: u64, load: impl Fn(u64) -> f64) -> Vec<WorkloadRecord> {
    (0..days)
        .map(|offset| record(start + Days::new(offset), load(offset)))
        .collect()
}

/// Same as [`daily_records`] in the raw supplier shape
pub fn daily_raw(start: NaiveDate, days: u64, load: impl Fn(u64) -> f64) -> Vec<RawWorkloadRecord> {
    daily_records(start, days, load)
        .into_iter()
        .map(|r| raw(r.date, r.load))
        .collect()
}

/// Loads with a weekly rhythm and a slow build so every bucket has variation
pub fn periodized_load(offset: u64) -> f64 {
    let base = 60.0 + (offset / 7) as f64 * 4.0;
    match offset % 7 {
        0 => base * 1.4,
        3 => base * 0.5,
        6 => 0.0,
        _ => base,
    }
}

/// Ratio point with chronic load 10 and acute load `ratio * 10`
pub fn point(on: NaiveDate, ratio: f64) -> RatioPoint {
    RatioPoint {
        date: on,
        ratio,
        acute_load: ratio * 10.0,
        chronic_load: 10.0,
        risk_level: RiskLevel::from_ratio(ratio),
    }
}

pub fn stats(average_ratio: f64, active_days: u32, risk_days: u32) -> BucketStats {
    BucketStats {
        average_ratio,
        max_ratio: average_ratio,
        min_ratio: average_ratio,
        total_load: average_ratio * 20.0 * f64::from(active_days),
        active_days,
        risk_days,
        trend_direction: TrendDirection::Stable,
        trend_percent: 0.0,
    }
}

/// Weekly bucket starting on the Monday `start`
pub fn week(start: NaiveDate, stats: BucketStats) -> WeeklyBucket {
    WeeklyBucket {
        week_number: week_number(start),
        start_date: start,
        end_date: start + Days::new(6),
        stats,
    }
}

/// Consecutive weekly buckets from 2025-01-06 with the given averages
pub fn weeks_with_averages(averages: &[f64]) -> Vec<WeeklyBucket> {
    let first_monday = date(2025, 1, 6);
    averages
        .iter()
        .enumerate()
        .map(|(i, avg)| week(first_monday + Days::new(7 * i as u64), stats(*avg, 5, 0)))
        .collect()
}

pub fn month(year: i32, month: u32, stats: BucketStats) -> MonthlyBucket {
    let start = date(year, month, 1);
    MonthlyBucket {
        year,
        month,
        month_label: start.format("%B %Y").to_string(),
        start_date: start,
        end_date: pierre_workload::calendar::month_end(start),
        stats,
        weekly_breakdown: Vec::new(),
    }
}

/// Analyzer with default config and a pinned "today"
pub fn analyzer_on(today: NaiveDate) -> WorkloadAnalyzer {
    analyzer_with(AnalysisConfig::default(), today)
}

pub fn analyzer_with(config: AnalysisConfig, today: NaiveDate) -> WorkloadAnalyzer {
    init_test_logging();
    WorkloadAnalyzer::new(config, Arc::new(FixedClock(today)))
}

/// Last day of the series starting at `start` spanning `days`
pub fn last_day(start: NaiveDate, days: u64) -> NaiveDate {
    start + Days::new(days - 1)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn is_monday(on: NaiveDate) -> bool {
    on.weekday() == chrono::Weekday::Mon
}
