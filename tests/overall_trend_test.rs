// ABOUTME: Integration tests for the overall workload trend across recent weeks
// ABOUTME: Covers insufficient data, the four-week lookback, thresholds, and description templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, weeks_with_averages};
use pierre_workload::config::TrendConfig;
use pierre_workload::constants::messages::TREND_INSUFFICIENT_DATA;
use pierre_workload::models::TrendDirection;
use pierre_workload::trend::OverallTrendAnalyzer;

#[test]
fn test_no_weeks_is_insufficient() {
    let trend = OverallTrendAnalyzer::default().analyze(&[]);
    assert_eq!(trend.direction, TrendDirection::Stable);
    assert_close(trend.percent, 0.0);
    assert_eq!(trend.description, TREND_INSUFFICIENT_DATA);
}

#[test]
fn test_single_week_is_insufficient() {
    let trend = OverallTrendAnalyzer::default().analyze(&weeks_with_averages(&[1.2]));
    assert_eq!(trend.direction, TrendDirection::Stable);
    assert_eq!(trend.description, TREND_INSUFFICIENT_DATA);
}

#[test]
fn test_rising_trend_renders_percent() {
    let trend = OverallTrendAnalyzer::default().analyze(&weeks_with_averages(&[1.0, 1.1, 1.2]));
    assert_eq!(trend.direction, TrendDirection::Increasing);
    assert_close(trend.percent, 20.0);
    assert!(trend.description.contains("20.0%"), "{}", trend.description);
}

#[test]
fn test_falling_trend() {
    let trend = OverallTrendAnalyzer::default().analyze(&weeks_with_averages(&[1.0, 0.9]));
    assert_eq!(trend.direction, TrendDirection::Decreasing);
    assert_close(trend.percent, 10.0);
    assert!(trend.description.contains("10.0%"));
}

#[test]
fn test_small_change_is_stable_but_reports_percent() {
    let trend = OverallTrendAnalyzer::default().analyze(&weeks_with_averages(&[1.0, 1.04]));
    assert_eq!(trend.direction, TrendDirection::Stable);
    assert_close(trend.percent, 4.0);
    assert!(trend.description.contains("4.0%"));
}

#[test]
fn test_only_last_four_weeks_are_compared() {
    // the first two weeks would make this a steep decline
    let weeks = weeks_with_averages(&[3.0, 2.5, 1.0, 1.0, 1.0, 1.2]);
    let trend = OverallTrendAnalyzer::default().analyze(&weeks);
    assert_eq!(trend.direction, TrendDirection::Increasing);
    assert_close(trend.percent, 20.0);
}

#[test]
fn test_lookback_and_threshold_follow_config() {
    let config = TrendConfig {
        overall_threshold_percent: 25.0,
        overall_lookback_weeks: 2,
        ..TrendConfig::default()
    };
    let analyzer = OverallTrendAnalyzer::from_config(&config);
    let trend = analyzer.analyze(&weeks_with_averages(&[0.5, 1.0, 1.2]));
    assert_eq!(trend.direction, TrendDirection::Stable);
    assert_close(trend.percent, 20.0);
}
