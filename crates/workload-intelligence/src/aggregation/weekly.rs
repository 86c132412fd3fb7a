// ABOUTME: Weekly aggregation of ratio points into Monday-to-Sunday buckets
// ABOUTME: Computes per-week ratio statistics, risk-day counts, and within-week trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use tracing::debug;
use workload_core::calendar::{week_number, week_start};
use workload_core::constants::trend::WEEKLY_THRESHOLD_PERCENT;
use workload_core::models::{RatioPoint, WeeklyBucket};

use super::summarize;

/// Groups ratio points into Monday-anchored weeks
#[derive(Debug, Clone)]
pub struct WeeklyAggregator {
    threshold_percent: f64,
}

impl Default for WeeklyAggregator {
    fn default() -> Self {
        Self::new(WEEKLY_THRESHOLD_PERCENT)
    }
}

impl WeeklyAggregator {
    /// Create an aggregator with the given trend threshold (percent)
    #[must_use]
    pub const fn new(threshold_percent: f64) -> Self {
        Self { threshold_percent }
    }

    /// Bucket `points` by the Monday of their week, ascending by start date
    ///
    /// Two points share a bucket exactly when they fall in the same
    /// Monday-to-Sunday span, including spans that cross a year boundary.
    #[must_use]
    pub fn aggregate(&self, points: &[RatioPoint]) -> Vec<WeeklyBucket> {
        let mut weeks: BTreeMap<NaiveDate, Vec<&RatioPoint>> = BTreeMap::new();
        for point in points {
            weeks.entry(week_start(point.date)).or_default().push(point);
        }

        weeks
            .into_iter()
            .filter_map(|(start_date, mut members)| {
                members.sort_by_key(|point| point.date);
                // numbered in the year of the earliest member, not of the Monday
                let first_date = members.first().map_or(start_date, |point| point.date);
                let Some(stats) = summarize(&members, self.threshold_percent) else {
                    debug!(%start_date, "omitting week without positive ratios");
                    return None;
                };
                Some(WeeklyBucket {
                    week_number: week_number(first_date),
                    start_date,
                    end_date: start_date + Days::new(6),
                    stats,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workload_core::models::{RiskLevel, TrendDirection};

    fn point(date: NaiveDate, ratio: f64) -> RatioPoint {
        RatioPoint {
            date,
            ratio,
            acute_load: 10.0,
            chronic_load: 8.0,
            risk_level: RiskLevel::from_ratio(ratio),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_groups_by_monday_week() {
        // Mon 2025-03-03 .. Sun 2025-03-09, then Mon 2025-03-10
        let points = vec![
            point(date(2025, 3, 3), 1.0),
            point(date(2025, 3, 9), 1.2),
            point(date(2025, 3, 10), 1.4),
        ];

        let buckets = WeeklyAggregator::default().aggregate(&points);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].start_date, date(2025, 3, 3));
        assert_eq!(buckets[0].end_date, date(2025, 3, 9));
        assert_eq!(buckets[0].stats.active_days, 2);
        assert_eq!(buckets[1].start_date, date(2025, 3, 10));
        assert_eq!(buckets[1].stats.risk_days, 1);
    }

    #[test]
    fn test_week_spanning_new_year_is_one_bucket() {
        let points = vec![point(date(2024, 12, 31), 1.0), point(date(2025, 1, 2), 1.0)];
        let buckets = WeeklyAggregator::default().aggregate(&points);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].start_date, date(2024, 12, 30));
        assert_eq!(buckets[0].week_number, 53);
    }

    #[test]
    fn test_new_year_week_with_only_january_points_is_week_one() {
        let points = vec![point(date(2025, 1, 1), 1.0), point(date(2025, 1, 3), 1.1)];
        let buckets = WeeklyAggregator::default().aggregate(&points);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].start_date, date(2024, 12, 30));
        assert_eq!(buckets[0].week_number, 1);
    }

    #[test]
    fn test_statistics_ignore_zero_ratios() {
        let points = vec![
            point(date(2025, 3, 3), 0.0),
            point(date(2025, 3, 4), 1.0),
            point(date(2025, 3, 5), 1.4),
        ];

        let bucket = &WeeklyAggregator::default().aggregate(&points)[0];
        assert!((bucket.stats.average_ratio - 1.2).abs() < 1e-9);
        assert!((bucket.stats.min_ratio - 1.0).abs() < f64::EPSILON);
        assert!((bucket.stats.max_ratio - 1.4).abs() < f64::EPSILON);
        assert_eq!(bucket.stats.active_days, 3);
        assert!((bucket.stats.total_load - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_week_with_only_zero_ratios_is_omitted() {
        let points = vec![point(date(2025, 3, 3), 0.0), point(date(2025, 3, 10), 1.0)];
        let buckets = WeeklyAggregator::default().aggregate(&points);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].start_date, date(2025, 3, 10));
    }

    #[test]
    fn test_unsorted_members_trend_by_date() {
        let points = vec![
            point(date(2025, 3, 6), 1.3),
            point(date(2025, 3, 3), 1.0),
            point(date(2025, 3, 7), 1.3),
            point(date(2025, 3, 4), 1.0),
        ];
        let bucket = &WeeklyAggregator::default().aggregate(&points)[0];
        assert_eq!(bucket.stats.trend_direction, TrendDirection::Increasing);
        assert!((bucket.stats.trend_percent - 30.0).abs() < f64::EPSILON);
    }
}
