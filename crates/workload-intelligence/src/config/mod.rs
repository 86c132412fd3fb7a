// ABOUTME: Engine configuration for windows, risk bands, trend sensitivity, and rule thresholds
// ABOUTME: Defaults reproduce the standard ACWR constants; environment variables may override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workload Engine Configuration
//!
//! Provides type-safe configuration for every stage of the engine. The
//! defaults are the standard constants from `workload_core::constants`;
//! `AnalysisConfig::load()` applies `WORKLOAD_*` environment overrides and
//! validates the result.
//!
//! Override keys by group:
//!
//! - windows: `WORKLOAD_ACUTE_WINDOW_DAYS`, `WORKLOAD_CHRONIC_WINDOW_DAYS`
//! - risk: `WORKLOAD_RISK_{HIGH,CAUTION,GOOD}_RATIO`
//! - trend: `WORKLOAD_{WEEKLY,MONTHLY,OVERALL}_TREND_PERCENT`,
//!   `WORKLOAD_OVERALL_LOOKBACK_WEEKS`
//! - insights: `WORKLOAD_INSIGHT_*` named after the `InsightThresholds` fields
//! - recommendations: `WORKLOAD_REC_*` named after the
//!   `RecommendationThresholds` fields
//! - `WORKLOAD_LOOKBACK_DAYS`

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;
use workload_core::constants::{insights, recommendations, risk, trend, windows};
use workload_core::models::RiskLevel;

/// Trailing window sizes, in calendar days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Acute window length (denominator of the acute average)
    pub acute_days: u32,
    /// Chronic window length (denominator of the chronic average)
    pub chronic_days: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            acute_days: windows::ACUTE_WINDOW_DAYS,
            chronic_days: windows::CHRONIC_WINDOW_DAYS,
        }
    }
}

/// Ratio thresholds separating the four risk levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Strictly above is high risk
    pub high_ratio: f64,
    /// At or above is caution
    pub caution_ratio: f64,
    /// At or above is good
    pub good_ratio: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_ratio: risk::HIGH_RATIO,
            caution_ratio: risk::CAUTION_RATIO,
            good_ratio: risk::GOOD_RATIO,
        }
    }
}

impl RiskThresholds {
    /// Classify a (rounded) ratio
    #[must_use]
    pub fn classify(&self, ratio: f64) -> RiskLevel {
        RiskLevel::classify(ratio, self.high_ratio, self.caution_ratio, self.good_ratio)
    }
}

/// Trend-direction sensitivity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Percent change between halves of a week needed to call a direction
    pub weekly_threshold_percent: f64,
    /// Percent change between halves of a month needed to call a direction
    pub monthly_threshold_percent: f64,
    /// Percent change across recent weeks needed to call an overall direction
    pub overall_threshold_percent: f64,
    /// Number of most recent weeks compared for the overall trend
    pub overall_lookback_weeks: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            weekly_threshold_percent: trend::WEEKLY_THRESHOLD_PERCENT,
            monthly_threshold_percent: trend::MONTHLY_THRESHOLD_PERCENT,
            overall_threshold_percent: trend::OVERALL_THRESHOLD_PERCENT,
            overall_lookback_weeks: trend::OVERALL_LOOKBACK_WEEKS,
        }
    }
}

/// Thresholds for insight rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Risk days above this raise a warning
    pub max_risk_days: u32,
    /// Ratio spread above this raises a warning
    pub max_ratio_spread: f64,
    /// Active days below this raise a warning
    pub low_frequency_days: u32,
    /// Active days at or above this may earn a positive insight
    pub balanced_frequency_days: u32,
    /// Average ratio below this may earn a positive insight
    pub balanced_max_ratio: f64,
    /// Month-over-month change above this percent is reported
    pub monthly_change_percent: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            max_risk_days: insights::MAX_RISK_DAYS_PER_WEEK,
            max_ratio_spread: insights::MAX_RATIO_SPREAD,
            low_frequency_days: insights::LOW_FREQUENCY_DAYS,
            balanced_frequency_days: insights::BALANCED_FREQUENCY_DAYS,
            balanced_max_ratio: insights::BALANCED_MAX_RATIO,
            monthly_change_percent: insights::MONTHLY_CHANGE_PERCENT,
        }
    }
}

/// Thresholds for recommendation rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Average ratio above this asks for lower intensity
    pub high_load_ratio: f64,
    /// Average ratio below this asks for higher intensity
    pub low_load_ratio: f64,
    /// Upper bound of the maintain band (lower bound is `low_load_ratio`)
    pub maintain_max_ratio: f64,
    /// Risk days above this ask for a plan review
    pub max_risk_days: u32,
    /// Active days below this ask for more sessions
    pub low_frequency_days: u32,
    /// Active days above this ask for a rest day
    pub high_frequency_days: u32,
    /// Rising weekly trend above this percent warns about rapid increases
    pub rapid_increase_percent: f64,
    /// Ratio spread above this asks for steadier intensity
    pub max_ratio_spread: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            high_load_ratio: recommendations::HIGH_LOAD_RATIO,
            low_load_ratio: recommendations::LOW_LOAD_RATIO,
            maintain_max_ratio: recommendations::MAINTAIN_MAX_RATIO,
            max_risk_days: recommendations::MAX_RISK_DAYS,
            low_frequency_days: recommendations::LOW_FREQUENCY_DAYS,
            high_frequency_days: recommendations::HIGH_FREQUENCY_DAYS,
            rapid_increase_percent: recommendations::RAPID_INCREASE_PERCENT,
            max_ratio_spread: recommendations::MAX_RATIO_SPREAD,
        }
    }
}

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Acute/chronic window sizes
    pub windows: WindowConfig,
    /// Risk level thresholds
    pub risk: RiskThresholds,
    /// Trend sensitivity
    pub trend: TrendConfig,
    /// Insight rule thresholds
    pub insights: InsightThresholds,
    /// Recommendation rule thresholds
    pub recommendations: RecommendationThresholds,
    /// Restrict analysis to the last N days ending today (per the clock)
    pub lookback_days: Option<u32>,
}

impl AnalysisConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an invalid value or
    /// validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Validate threshold ordering and window sizes
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.windows.acute_days == 0 || self.windows.chronic_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "window sizes must be at least one day",
            ));
        }
        if self.windows.acute_days > self.windows.chronic_days {
            return Err(ConfigError::InvalidRange(
                "acute window must not exceed chronic window",
            ));
        }

        let risk = &self.risk;
        if risk.good_ratio >= risk.caution_ratio || risk.caution_ratio > risk.high_ratio {
            return Err(ConfigError::InvalidRange(
                "risk thresholds must satisfy good < caution <= high",
            ));
        }
        if risk.good_ratio < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "risk thresholds must be non-negative",
            ));
        }

        let trend = &self.trend;
        if trend.weekly_threshold_percent < 0.0
            || trend.monthly_threshold_percent < 0.0
            || trend.overall_threshold_percent < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "trend thresholds must be non-negative",
            ));
        }
        if trend.overall_lookback_weeks < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "overall trend needs at least two weeks to compare",
            ));
        }

        let insights = &self.insights;
        if insights.low_frequency_days > insights.balanced_frequency_days {
            return Err(ConfigError::InvalidRange(
                "insight low_frequency_days must be <= balanced_frequency_days",
            ));
        }

        let recs = &self.recommendations;
        if recs.low_load_ratio > recs.maintain_max_ratio
            || recs.maintain_max_ratio > recs.high_load_ratio
        {
            return Err(ConfigError::InvalidRange(
                "recommendation load bands must satisfy low <= maintain_max <= high",
            ));
        }
        if recs.low_frequency_days > recs.high_frequency_days {
            return Err(ConfigError::InvalidRange(
                "recommendation low_frequency_days must be <= high_frequency_days",
            ));
        }

        if self.lookback_days == Some(0) {
            return Err(ConfigError::ValueOutOfRange(
                "lookback_days must be at least one day",
            ));
        }

        Ok(())
    }

    /// Override the lookback window (e.g. from a CLI flag) and re-validate
    ///
    /// `None` keeps the current setting.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a zero-day window, or any
    /// other constraint violated by the resulting configuration
    pub fn with_lookback_days(mut self, lookback_days: Option<u32>) -> Result<Self, ConfigError> {
        if lookback_days.is_some() {
            self.lookback_days = lookback_days;
        }
        self.validate()?;
        Ok(self)
    }

    /// Apply overrides from a key lookup (the environment, in `load()`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` naming the first unparseable key
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        apply_var(&lookup, "WORKLOAD_ACUTE_WINDOW_DAYS", &mut self.windows.acute_days)?;
        apply_var(&lookup, "WORKLOAD_CHRONIC_WINDOW_DAYS", &mut self.windows.chronic_days)?;
        apply_var(&lookup, "WORKLOAD_RISK_HIGH_RATIO", &mut self.risk.high_ratio)?;
        apply_var(&lookup, "WORKLOAD_RISK_CAUTION_RATIO", &mut self.risk.caution_ratio)?;
        apply_var(&lookup, "WORKLOAD_RISK_GOOD_RATIO", &mut self.risk.good_ratio)?;
        apply_var(
            &lookup,
            "WORKLOAD_WEEKLY_TREND_PERCENT",
            &mut self.trend.weekly_threshold_percent,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_MONTHLY_TREND_PERCENT",
            &mut self.trend.monthly_threshold_percent,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_OVERALL_TREND_PERCENT",
            &mut self.trend.overall_threshold_percent,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_OVERALL_LOOKBACK_WEEKS",
            &mut self.trend.overall_lookback_weeks,
        )?;


        let insights = &mut self.insights;
        apply_var(&lookup, "WORKLOAD_INSIGHT_MAX_RISK_DAYS", &mut insights.max_risk_days)?;
        apply_var(
            &lookup,
            "WORKLOAD_INSIGHT_MAX_RATIO_SPREAD",
            &mut insights.max_ratio_spread,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_INSIGHT_LOW_FREQUENCY_DAYS",
            &mut insights.low_frequency_days,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_INSIGHT_BALANCED_FREQUENCY_DAYS",
            &mut insights.balanced_frequency_days,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_INSIGHT_BALANCED_MAX_RATIO",
            &mut insights.balanced_max_ratio,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_INSIGHT_MONTHLY_CHANGE_PERCENT",
            &mut insights.monthly_change_percent,
        )?;

        let recs = &mut self.recommendations;
        apply_var(&lookup, "WORKLOAD_REC_HIGH_LOAD_RATIO", &mut recs.high_load_ratio)?;
        apply_var(&lookup, "WORKLOAD_REC_LOW_LOAD_RATIO", &mut recs.low_load_ratio)?;
        apply_var(
            &lookup,
            "WORKLOAD_REC_MAINTAIN_MAX_RATIO",
            &mut recs.maintain_max_ratio,
        )?;
        apply_var(&lookup, "WORKLOAD_REC_MAX_RISK_DAYS", &mut recs.max_risk_days)?;
        apply_var(
            &lookup,
            "WORKLOAD_REC_LOW_FREQUENCY_DAYS",
            &mut recs.low_frequency_days,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_REC_HIGH_FREQUENCY_DAYS",
            &mut recs.high_frequency_days,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_REC_RAPID_INCREASE_PERCENT",
            &mut recs.rapid_increase_percent,
        )?;
        apply_var(
            &lookup,
            "WORKLOAD_REC_MAX_RATIO_SPREAD",
            &mut recs.max_ratio_spread,
        )?;

        if let Some(value) = lookup("WORKLOAD_LOOKBACK_DAYS") {
            let days = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid WORKLOAD_LOOKBACK_DAYS".to_owned()))?;
            self.lookback_days = Some(days);
        }

        Ok(self)
    }
}

/// Parse and apply a single override
fn apply_var<F, T>(lookup: &F, key: &str, target: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(value) = lookup(key) {
        *target = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}")))?;
        debug!(key, "applied workload config override");
    }
    Ok(())
}
