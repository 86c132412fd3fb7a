// ABOUTME: Monthly aggregation of ratio points into calendar-month buckets
// ABOUTME: Computes per-month statistics, month trend, and a nested weekly breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::debug;
use workload_core::calendar::{month_end, month_label, month_start};
use workload_core::constants::trend::MONTHLY_THRESHOLD_PERCENT;
use workload_core::models::{MonthlyBucket, RatioPoint};

use super::{summarize, WeeklyAggregator};

/// Groups ratio points into calendar months
#[derive(Debug, Clone)]
pub struct MonthlyAggregator {
    threshold_percent: f64,
    weekly: WeeklyAggregator,
}

impl Default for MonthlyAggregator {
    fn default() -> Self {
        Self::new(MONTHLY_THRESHOLD_PERCENT, WeeklyAggregator::default())
    }
}

impl MonthlyAggregator {
    /// Create an aggregator with a month trend threshold and the weekly
    /// aggregator used for the per-month breakdown
    #[must_use]
    pub const fn new(threshold_percent: f64, weekly: WeeklyAggregator) -> Self {
        Self {
            threshold_percent,
            weekly,
        }
    }

    /// Bucket `points` by calendar month, ascending by (year, month)
    #[must_use]
    pub fn aggregate(&self, points: &[RatioPoint]) -> Vec<MonthlyBucket> {
        let mut months: BTreeMap<(i32, u32), Vec<RatioPoint>> = BTreeMap::new();
        for point in points {
            months
                .entry((point.date.year(), point.date.month()))
                .or_default()
                .push(point.clone());
        }

        months
            .into_iter()
            .filter_map(|((year, month), mut members)| {
                members.sort_by_key(|point| point.date);
                let refs: Vec<&RatioPoint> = members.iter().collect();
                let Some(stats) = summarize(&refs, self.threshold_percent) else {
                    debug!(year, month, "omitting month without positive ratios");
                    return None;
                };
                let first = members.first()?.date;
                Some(MonthlyBucket {
                    year,
                    month,
                    month_label: month_label(first),
                    start_date: month_start(first),
                    end_date: month_end(first),
                    stats,
                    weekly_breakdown: self.weekly.aggregate(&members),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use workload_core::models::{RiskLevel, TrendDirection};

    fn point(date: NaiveDate, ratio: f64) -> RatioPoint {
        RatioPoint {
            date,
            ratio,
            acute_load: 12.0,
            chronic_load: 10.0,
            risk_level: RiskLevel::from_ratio(ratio),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_boundary_splits_iso_week() {
        // Fri 2025-01-31 and Sat 2025-02-01 share a week but not a month
        let points = vec![point(date(2025, 1, 31), 1.0), point(date(2025, 2, 1), 1.1)];

        let months = MonthlyAggregator::default().aggregate(&points);
        assert_eq!(months.len(), 2);
        assert_eq!((months[0].year, months[0].month), (2025, 1));
        assert_eq!(months[0].month_label, "January 2025");
        assert_eq!(months[0].start_date, date(2025, 1, 1));
        assert_eq!(months[0].end_date, date(2025, 1, 31));
        assert_eq!(months[1].weekly_breakdown.len(), 1);
        assert_eq!(months[1].weekly_breakdown[0].stats.active_days, 1);
    }

    #[test]
    fn test_monthly_threshold_is_coarser_than_weekly() {
        // 8 % rise between halves: weekly would call it increasing, monthly stable
        let points = vec![
            point(date(2025, 3, 3), 1.0),
            point(date(2025, 3, 4), 1.0),
            point(date(2025, 3, 5), 1.08),
            point(date(2025, 3, 6), 1.08),
        ];

        let month = &MonthlyAggregator::default().aggregate(&points)[0];
        assert_eq!(month.stats.trend_direction, TrendDirection::Stable);
        assert_eq!(
            month.weekly_breakdown[0].stats.trend_direction,
            TrendDirection::Increasing
        );
    }

    #[test]
    fn test_breakdown_covers_every_member() {
        let points: Vec<RatioPoint> = (1..=31)
            .map(|day| point(date(2025, 3, day), 1.0))
            .collect();

        let month = &MonthlyAggregator::default().aggregate(&points)[0];
        let covered: u32 = month
            .weekly_breakdown
            .iter()
            .map(|week| week.stats.active_days)
            .sum();
        assert_eq!(month.stats.active_days, 31);
        assert_eq!(covered, 31);
    }
}
