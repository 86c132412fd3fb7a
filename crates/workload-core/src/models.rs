// ABOUTME: Workload data models shared between the engine and its callers
// ABOUTME: Records, daily ratio points, weekly/monthly buckets, insights, and analysis results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workload Models
//!
//! All output types serialize with camelCase field names so a presentation
//! layer can consume them directly as JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::risk::{CAUTION_RATIO, GOOD_RATIO, HIGH_RATIO};

/// Daily workload entry as delivered by a record supplier
///
/// The date is kept as text so that malformed rows can be skipped by the
/// engine instead of failing deserialization of the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWorkloadRecord {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    /// Training load for that day (non-negative)
    pub load: f64,
}

impl RawWorkloadRecord {
    /// Create a raw record
    pub fn new(date: impl Into<String>, load: f64) -> Self {
        Self {
            date: date.into(),
            load,
        }
    }
}

/// Parsed daily workload entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadRecord {
    /// Civil date of the entry
    pub date: NaiveDate,
    /// Training load for that day
    pub load: f64,
}

/// Injury-risk classification of an acute:chronic ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Below the productive band (detraining)
    Low,
    /// Productive training band
    Good,
    /// Elevated ratio, monitor closely
    Caution,
    /// Load spike, high injury risk
    High,
}

impl RiskLevel {
    /// Classify a ratio using explicit thresholds
    ///
    /// Evaluated in order: `> high`, `>= caution`, `>= good`, otherwise low.
    #[must_use]
    pub fn classify(ratio: f64, high: f64, caution: f64, good: f64) -> Self {
        if ratio > high {
            Self::High
        } else if ratio >= caution {
            Self::Caution
        } else if ratio >= good {
            Self::Good
        } else {
            Self::Low
        }
    }

    /// Classify a ratio using the standard thresholds (1.5 / 1.3 / 0.8)
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self::classify(ratio, HIGH_RATIO, CAUTION_RATIO, GOOD_RATIO)
    }

    /// Whether this level counts as a "risk day" (caution or high)
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Caution | Self::High)
    }
}

/// One day of the acute:chronic workload ratio series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioPoint {
    /// Date the windows end on
    pub date: NaiveDate,
    /// Acute load divided by chronic load, two decimals
    pub ratio: f64,
    /// 7-day trailing daily average, one decimal
    pub acute_load: f64,
    /// 28-day trailing daily average, one decimal
    pub chronic_load: f64,
    /// Classification of `ratio`
    pub risk_level: RiskLevel,
}

/// Direction of a metric across a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Rising beyond the threshold
    Increasing,
    /// Falling beyond the threshold
    Decreasing,
    /// Within the threshold
    Stable,
}

/// Statistics shared by weekly and monthly buckets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketStats {
    /// Mean ratio over members with a positive ratio
    pub average_ratio: f64,
    /// Highest positive ratio
    pub max_ratio: f64,
    /// Lowest positive ratio
    pub min_ratio: f64,
    /// Sum of `acute_load + chronic_load` over all members
    pub total_load: f64,
    /// Number of ratio points in the bucket
    pub active_days: u32,
    /// Members classified caution or high
    pub risk_days: u32,
    /// Direction from the first half of the bucket to the second
    pub trend_direction: TrendDirection,
    /// Absolute percent change between halves, one decimal
    pub trend_percent: f64,
}

impl BucketStats {
    /// Spread between the highest and lowest ratio
    #[must_use]
    pub fn ratio_spread(&self) -> f64 {
        self.max_ratio - self.min_ratio
    }
}

/// Monday-to-Sunday aggregate of ratio points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBucket {
    /// Monday-aligned week of the year containing the earliest member point
    ///
    /// A week starting Monday 2024-12-30 is week 53 when it holds a December
    /// point and week 1 when all of its points fall in January 2025.
    pub week_number: u32,
    /// Monday of the week
    pub start_date: NaiveDate,
    /// Sunday of the week
    pub end_date: NaiveDate,
    /// Aggregate statistics
    #[serde(flatten)]
    pub stats: BucketStats,
}

/// Calendar-month aggregate of ratio points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Display label, e.g. "March 2025"
    pub month_label: String,
    /// First day of the month
    pub start_date: NaiveDate,
    /// Last day of the month
    pub end_date: NaiveDate,
    /// Aggregate statistics
    #[serde(flatten)]
    pub stats: BucketStats,
    /// Weekly aggregation restricted to this month's points
    pub weekly_breakdown: Vec<WeeklyBucket>,
}

/// Category of a generated insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    /// Something needs attention
    Warning,
    /// Something is going well
    Positive,
    /// Informational
    Neutral,
}

/// Categorized observation about recent training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Category of the insight
    pub category: InsightCategory,
    /// Short headline
    pub title: String,
    /// Human-readable explanation
    pub description: String,
    /// Numeric value that triggered the insight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Reference point for `value`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_label: Option<String>,
}

/// Global direction across the most recent weeks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallTrend {
    /// Direction of change
    pub direction: TrendDirection,
    /// Absolute percent change, one decimal
    pub percent: f64,
    /// Templated sentence describing the trend
    pub description: String,
}

/// Aggregate output of one full engine run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Date the analysis was produced on, per the injected clock
    pub generated_on: NaiveDate,
    /// Daily ratio series, ascending by date
    pub ratio_points: Vec<RatioPoint>,
    /// Weekly buckets, ascending by start date
    pub weekly_buckets: Vec<WeeklyBucket>,
    /// Monthly buckets, ascending by (year, month)
    pub monthly_buckets: Vec<MonthlyBucket>,
    /// Direction across recent weeks
    pub overall_trend: OverallTrend,
    /// Ordered insights
    pub insights: Vec<Insight>,
    /// Ordered recommendations
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Whether the ratio series is long enough for callers to trust it
    #[must_use]
    pub fn has_sufficient_data(&self, min_qualifying_days: usize) -> bool {
        self.ratio_points.len() >= min_qualifying_days
    }

    /// Most recent weekly bucket, if any
    #[must_use]
    pub fn latest_week(&self) -> Option<&WeeklyBucket> {
        self.weekly_buckets.last()
    }
}
