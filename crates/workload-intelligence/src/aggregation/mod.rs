// ABOUTME: Calendar bucketing of ratio points into weekly and monthly aggregates
// ABOUTME: Shared bucket statistics and first-half/second-half trend detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aggregation
//!
//! Weekly buckets follow Monday-to-Sunday spans; monthly buckets follow
//! calendar months. Both share the statistics computed here and differ only in
//! the trend threshold they apply.

/// Monthly aggregation with nested weekly breakdown
pub mod monthly;
/// Monday-anchored weekly aggregation
pub mod weekly;

pub use monthly::MonthlyAggregator;
pub use weekly::WeeklyAggregator;

use workload_core::models::{BucketStats, RatioPoint, TrendDirection};

use crate::statistics::{direction_for, mean, percent_change, round_to};

/// Compute bucket statistics over `members` (ascending by date)
///
/// Returns `None` when no member has a positive ratio; such buckets are left
/// out of the output.
pub(crate) fn summarize(members: &[&RatioPoint], threshold_percent: f64) -> Option<BucketStats> {
    let positive: Vec<f64> = members
        .iter()
        .map(|point| point.ratio)
        .filter(|ratio| *ratio > 0.0)
        .collect();
    let average_ratio = mean(&positive)?;
    let max_ratio = positive.iter().copied().fold(f64::MIN, f64::max);
    let min_ratio = positive.iter().copied().fold(f64::MAX, f64::min);

    let total_load = members
        .iter()
        .map(|point| point.acute_load + point.chronic_load)
        .sum();
    let risk_days = members
        .iter()
        .filter(|point| point.risk_level.is_elevated())
        .count();

    let ratios: Vec<f64> = members.iter().map(|point| point.ratio).collect();
    let (trend_direction, trend_percent) = split_trend(&ratios, threshold_percent);

    Some(BucketStats {
        average_ratio,
        max_ratio,
        min_ratio,
        total_load,
        active_days: members.len() as u32,
        risk_days: risk_days as u32,
        trend_direction,
        trend_percent,
    })
}

/// Compare the mean of the first half of `values` against the second half
///
/// The first half takes `ceil(n / 2)` values. With fewer than two values, or
/// a first half averaging zero, the trend is stable at 0 %.
pub(crate) fn split_trend(values: &[f64], threshold_percent: f64) -> (TrendDirection, f64) {
    let (first, second) = values.split_at(values.len().div_ceil(2));
    let change = mean(first)
        .zip(mean(second))
        .and_then(|(first_avg, second_avg)| percent_change(first_avg, second_avg));

    match change {
        Some(change) => (
            direction_for(change, threshold_percent),
            round_to(change.abs(), 1),
        ),
        None => (TrendDirection::Stable, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trend_increasing() {
        let (direction, percent) = split_trend(&[1.0, 1.0, 1.3, 1.3], 5.0);
        assert_eq!(direction, TrendDirection::Increasing);
        assert!((percent - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_split_trend_odd_length_puts_middle_in_first_half() {
        // first half [1.0, 1.0], second half [0.9]
        let (direction, percent) = split_trend(&[1.0, 1.0, 0.9], 5.0);
        assert_eq!(direction, TrendDirection::Decreasing);
        assert!((percent - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_split_trend_single_value_is_stable() {
        assert_eq!(split_trend(&[1.2], 5.0), (TrendDirection::Stable, 0.0));
        assert_eq!(split_trend(&[], 5.0), (TrendDirection::Stable, 0.0));
    }

    #[test]
    fn test_split_trend_keeps_percent_when_stable() {
        let (direction, percent) = split_trend(&[1.0, 1.04], 5.0);
        assert_eq!(direction, TrendDirection::Stable);
        assert!((percent - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_split_trend_threshold_differs_by_granularity() {
        let values = [1.0, 1.0, 1.08, 1.08];
        assert_eq!(split_trend(&values, 5.0).0, TrendDirection::Increasing);
        assert_eq!(split_trend(&values, 10.0).0, TrendDirection::Stable);
    }
}
