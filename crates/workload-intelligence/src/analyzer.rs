// ABOUTME: Top-level workload analysis entry point wiring every engine stage together
// ABOUTME: Normalizes records, computes ratios, buckets, trend, insights, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workload Analyzer
//!
//! Runs the full pipeline for one athlete:
//!
//! ```text
//! records ─▶ RatioCalculator ─┬─▶ WeeklyAggregator ──┬─▶ OverallTrendAnalyzer
//!                             └─▶ MonthlyAggregator ─┼─▶ InsightGenerator
//!                                                    └─▶ RecommendationGenerator
//! ```
//!
//! The analyzer holds no mutable state; one instance can serve any number of
//! athletes from any number of threads.
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use workload_core::calendar::FixedClock;
//! use workload_core::models::RawWorkloadRecord;
//! use workload_intelligence::{AnalysisConfig, WorkloadAnalyzer};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
//! let analyzer = WorkloadAnalyzer::new(AnalysisConfig::default(), Arc::new(FixedClock(today)));
//! let result = analyzer.analyze(&[RawWorkloadRecord::new("2025-03-30", 70.0)]);
//! assert_eq!(result.ratio_points.len(), 1);
//! assert_eq!(result.generated_on, today);
//! ```

use std::sync::Arc;

use tracing::{debug, info};
use workload_core::calendar::{window_start, Clock, FixedOffsetClock};
use workload_core::models::{AnalysisResult, RawWorkloadRecord, WorkloadRecord};

use crate::aggregation::{MonthlyAggregator, WeeklyAggregator};
use crate::config::AnalysisConfig;
use crate::insights::InsightGenerator;
use crate::normalize::{merge_duplicate_dates, normalize_records};
use crate::ratio::RatioCalculator;
use crate::recommendations::RecommendationGenerator;
use crate::trend::OverallTrendAnalyzer;

/// Stateless entry point for workload analysis
#[derive(Clone)]
pub struct WorkloadAnalyzer {
    clock: Arc<dyn Clock>,
    ratio: RatioCalculator,
    weekly: WeeklyAggregator,
    monthly: MonthlyAggregator,
    trend: OverallTrendAnalyzer,
    insights: InsightGenerator,
    recommendations: RecommendationGenerator,
    lookback_days: Option<u32>,
}

impl Default for WorkloadAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default(), Arc::new(FixedOffsetClock::kst()))
    }
}

impl WorkloadAnalyzer {
    /// Create an analyzer from a configuration and a clock
    #[must_use]
    pub fn new(config: AnalysisConfig, clock: Arc<dyn Clock>) -> Self {
        let weekly = WeeklyAggregator::new(config.trend.weekly_threshold_percent);
        Self {
            clock,
            ratio: RatioCalculator::new(config.windows.clone(), config.risk.clone()),
            monthly: MonthlyAggregator::new(
                config.trend.monthly_threshold_percent,
                weekly.clone(),
            ),
            weekly,
            trend: OverallTrendAnalyzer::from_config(&config.trend),
            insights: InsightGenerator::new(config.insights),
            recommendations: RecommendationGenerator::new(config.recommendations),
            lookback_days: config.lookback_days,
        }
    }

    /// Replace the insight generator (e.g. one with extra rules)
    #[must_use]
    pub fn with_insight_generator(mut self, generator: InsightGenerator) -> Self {
        self.insights = generator;
        self
    }

    /// Replace the recommendation generator (e.g. one with extra rules)
    #[must_use]
    pub fn with_recommendation_generator(mut self, generator: RecommendationGenerator) -> Self {
        self.recommendations = generator;
        self
    }

    /// Analyze raw supplier rows
    ///
    /// Rows with unparseable dates are skipped; rows sharing a date are summed.
    #[must_use]
    pub fn analyze(&self, raw: &[RawWorkloadRecord]) -> AnalysisResult {
        let records = normalize_records(raw);
        if records.len() < raw.len() {
            debug!(
                received = raw.len(),
                kept = records.len(),
                "normalized workload records"
            );
        }
        self.run(records)
    }

    /// Analyze already-parsed records
    #[must_use]
    pub fn analyze_records(&self, records: &[WorkloadRecord]) -> AnalysisResult {
        self.run(merge_duplicate_dates(records))
    }

    fn run(&self, records: Vec<WorkloadRecord>) -> AnalysisResult {
        let today = self.clock.today();
        let records = match self.lookback_days {
            Some(days) => {
                let first_day = window_start(today, days);
                records
                    .into_iter()
                    .filter(|record| record.date >= first_day && record.date <= today)
                    .collect()
            }
            None => records,
        };

        let ratio_points = self.ratio.calculate(&records);
        let weekly_buckets = self.weekly.aggregate(&ratio_points);
        let monthly_buckets = self.monthly.aggregate(&ratio_points);
        let overall_trend = self.trend.analyze(&weekly_buckets);
        let insights = self.insights.generate(&weekly_buckets, &monthly_buckets);
        let recommendations =
            self.recommendations
                .generate(&weekly_buckets, &monthly_buckets, &insights);

        info!(
            records = records.len(),
            ratio_points = ratio_points.len(),
            weeks = weekly_buckets.len(),
            months = monthly_buckets.len(),
            trend = ?overall_trend.direction,
            "workload analysis complete"
        );

        AnalysisResult {
            generated_on: today,
            ratio_points,
            weekly_buckets,
            monthly_buckets,
            overall_trend,
            insights,
            recommendations,
        }
    }
}
