// ABOUTME: Workload ratio analytics engine for athlete injury-risk monitoring
// ABOUTME: ACWR series, weekly/monthly aggregation, overall trend, insights, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workload Intelligence
//!
//! Pure, synchronous computation over an athlete's daily training loads.
//! Every stage is a function of its inputs; nothing is cached and no I/O is
//! performed. Use [`WorkloadAnalyzer`] for the full pipeline or the
//! individual stages for charts that only need part of it.

/// Weekly and monthly bucketing
pub mod aggregation;
/// Top-level analysis entry point
pub mod analyzer;
/// Engine configuration
pub mod config;
/// Rule-based insights
pub mod insights;
/// Record parsing and duplicate merging
pub mod normalize;
/// Acute:chronic ratio series
pub mod ratio;
/// Rule-based recommendations
pub mod recommendations;
/// Numeric helpers
pub mod statistics;
/// Overall trend across recent weeks
pub mod trend;

pub use aggregation::{MonthlyAggregator, WeeklyAggregator};
pub use analyzer::WorkloadAnalyzer;
pub use config::{AnalysisConfig, ConfigError};
pub use insights::{InsightGenerator, InsightRule};
pub use ratio::RatioCalculator;
pub use recommendations::{RecommendationGenerator, RecommendationRule};
pub use trend::OverallTrendAnalyzer;
