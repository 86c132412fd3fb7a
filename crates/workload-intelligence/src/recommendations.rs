// ABOUTME: Rule-based training recommendations derived from the latest weekly bucket
// ABOUTME: Ordered rule table producing plain-text action items plus fixed closing advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Generation
//!
//! Like insights, recommendations come from an ordered rule table. Every rule
//! is checked independently and may contribute zero or more messages. The
//! generated insights are accepted as input but not consulted: the two
//! outputs are derived from the same buckets on their own terms.

use workload_core::constants::messages;
use workload_core::models::{Insight, MonthlyBucket, TrendDirection, WeeklyBucket};

use crate::config::RecommendationThresholds;

/// Inputs visible to every recommendation rule
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    /// Most recent weekly bucket
    pub recent: &'a WeeklyBucket,
    /// All weekly buckets, ascending
    pub weekly: &'a [WeeklyBucket],
    /// All monthly buckets, ascending
    pub monthly: &'a [MonthlyBucket],
    /// Active thresholds
    pub thresholds: &'a RecommendationThresholds,
}

/// Signature of a caller-supplied recommendation rule
pub type RecommendationRuleFn = fn(&RecommendationContext<'_>) -> Vec<String>;

/// One entry of the recommendation rule table
#[derive(Debug, Clone, Copy)]
pub enum RecommendationRule {
    /// Average ratio too high, too low, or in the maintain band
    LoadBand,
    /// Too many caution/high days
    RiskDays,
    /// Too few or too many active days
    Frequency,
    /// Week is trending up steeply
    RapidIncrease,
    /// Ratio spread too wide
    RatioSpread,
    /// General advice appended to every non-empty analysis
    ClosingAdvice,
    /// Caller-supplied rule
    Custom {
        /// Identifier used in logs and tests
        name: &'static str,
        /// Rule body
        evaluate: RecommendationRuleFn,
    },
}

/// Rules evaluated by default, in output order
pub const DEFAULT_RECOMMENDATION_RULES: [RecommendationRule; 6] = [
    RecommendationRule::LoadBand,
    RecommendationRule::RiskDays,
    RecommendationRule::Frequency,
    RecommendationRule::RapidIncrease,
    RecommendationRule::RatioSpread,
    RecommendationRule::ClosingAdvice,
];

impl RecommendationRule {
    /// Rule identifier
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadBand => "load_band",
            Self::RiskDays => "risk_days",
            Self::Frequency => "frequency",
            Self::RapidIncrease => "rapid_increase",
            Self::RatioSpread => "ratio_spread",
            Self::ClosingAdvice => "closing_advice",
            Self::Custom { name, .. } => *name,
        }
    }

    /// Messages this rule contributes for `ctx`
    #[must_use]
    pub fn evaluate(&self, ctx: &RecommendationContext<'_>) -> Vec<String> {
        let stats = &ctx.recent.stats;
        let limits = ctx.thresholds;
        let selected: &[&str] = match self {
            Self::LoadBand => {
                let average = stats.average_ratio;
                if average > limits.high_load_ratio {
                    &[messages::REDUCE_INTENSITY, messages::ADD_RECOVERY_DAY]
                } else if average < limits.low_load_ratio {
                    &[messages::INCREASE_INTENSITY, messages::ADD_TRAINING_DAY]
                } else if average <= limits.maintain_max_ratio {
                    &[messages::MAINTAIN_LOAD]
                } else {
                    &[]
                }
            }
            Self::RiskDays if stats.risk_days > limits.max_risk_days => {
                &[messages::REVIEW_PLAN, messages::CONSULT_COACH]
            }
            Self::Frequency if stats.active_days < limits.low_frequency_days => {
                &[messages::INCREASE_FREQUENCY]
            }
            Self::Frequency if stats.active_days > limits.high_frequency_days => {
                &[messages::ENSURE_REST_DAY]
            }
            Self::RapidIncrease
                if stats.trend_direction == TrendDirection::Increasing
                    && stats.trend_percent > limits.rapid_increase_percent =>
            {
                &[messages::AVOID_RAPID_INCREASE]
            }
            Self::RatioSpread if stats.ratio_spread() > limits.max_ratio_spread => {
                &[messages::CONSISTENT_INTENSITY]
            }
            Self::ClosingAdvice => &[messages::KEEP_LOGGING, messages::LISTEN_TO_BODY],
            Self::Custom { evaluate, .. } => return evaluate(ctx),
            Self::RiskDays | Self::Frequency | Self::RapidIncrease | Self::RatioSpread => &[],
        };
        selected.iter().map(|message| (*message).to_owned()).collect()
    }
}

/// Evaluates the recommendation rule table
#[derive(Debug, Clone)]
pub struct RecommendationGenerator {
    thresholds: RecommendationThresholds,
    rules: Vec<RecommendationRule>,
}

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self::new(RecommendationThresholds::default())
    }
}

impl RecommendationGenerator {
    /// Create a generator with the default rule table
    #[must_use]
    pub fn new(thresholds: RecommendationThresholds) -> Self {
        Self {
            thresholds,
            rules: DEFAULT_RECOMMENDATION_RULES.to_vec(),
        }
    }

    /// Insert a rule just before the closing advice (or at the end if the
    /// closing advice rule has been removed)
    #[must_use]
    pub fn with_rule(mut self, rule: RecommendationRule) -> Self {
        let position = self
            .rules
            .iter()
            .position(|existing| matches!(existing, RecommendationRule::ClosingAdvice))
            .unwrap_or(self.rules.len());
        self.rules.insert(position, rule);
        self
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    /// Generate recommendations from ascending weekly and monthly buckets
    ///
    /// With no weekly data the fixed onboarding list is returned.
    #[must_use]
    pub fn generate(
        &self,
        weekly: &[WeeklyBucket],
        monthly: &[MonthlyBucket],
        _insights: &[Insight],
    ) -> Vec<String> {
        let Some(recent) = weekly.last() else {
            return messages::ONBOARDING
                .iter()
                .map(|message| (*message).to_owned())
                .collect();
        };

        let ctx = RecommendationContext {
            recent,
            weekly,
            monthly,
            thresholds: &self.thresholds,
        };
        self.rules
            .iter()
            .flat_map(|rule| rule.evaluate(&ctx))
            .collect()
    }
}
