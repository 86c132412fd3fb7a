// ABOUTME: Overall workload trend across the most recent weekly buckets
// ABOUTME: Classifies direction and percent change and renders a templated description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workload_core::constants::messages::{
    TREND_DECREASING, TREND_INCREASING, TREND_INSUFFICIENT_DATA, TREND_STABLE,
};
use workload_core::models::{OverallTrend, TrendDirection, WeeklyBucket};

use crate::config::TrendConfig;
use crate::statistics::{direction_for, percent_change, round_to};

/// Compares the first and last of the most recent weekly buckets
#[derive(Debug, Clone)]
pub struct OverallTrendAnalyzer {
    threshold_percent: f64,
    lookback_weeks: usize,
}

impl Default for OverallTrendAnalyzer {
    fn default() -> Self {
        Self::from_config(&TrendConfig::default())
    }
}

impl OverallTrendAnalyzer {
    /// Create an analyzer from the trend configuration
    #[must_use]
    pub fn from_config(config: &TrendConfig) -> Self {
        Self {
            threshold_percent: config.overall_threshold_percent,
            lookback_weeks: config.overall_lookback_weeks,
        }
    }

    /// Classify the direction of `weekly` (ascending by start date)
    #[must_use]
    pub fn analyze(&self, weekly: &[WeeklyBucket]) -> OverallTrend {
        if weekly.len() < 2 {
            return Self::insufficient_data();
        }

        let recent = &weekly[weekly.len().saturating_sub(self.lookback_weeks)..];
        let (Some(first), Some(last)) = (recent.first(), recent.last()) else {
            return Self::insufficient_data();
        };
        let Some(change) = percent_change(first.stats.average_ratio, last.stats.average_ratio)
        else {
            return Self::insufficient_data();
        };

        let direction = direction_for(change, self.threshold_percent);
        let percent = round_to(change.abs(), 1);
        let template = match direction {
            TrendDirection::Increasing => TREND_INCREASING,
            TrendDirection::Decreasing => TREND_DECREASING,
            TrendDirection::Stable => TREND_STABLE,
        };

        OverallTrend {
            direction,
            percent,
            description: template.replace("{percent}", &format!("{percent:.1}")),
        }
    }

    fn insufficient_data() -> OverallTrend {
        OverallTrend {
            direction: TrendDirection::Stable,
            percent: 0.0,
            description: TREND_INSUFFICIENT_DATA.to_owned(),
        }
    }
}
