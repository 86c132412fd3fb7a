// ABOUTME: Rule-based insight generation from the latest weekly and monthly buckets
// ABOUTME: Evaluates an ordered rule table; rule order is the order insights are reported in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Insight Generation
//!
//! Insights are produced by an ordered list of [`InsightRule`]s. Each rule
//! inspects an [`InsightContext`] and yields at most one [`Insight`]. Rules run
//! in list order and the output preserves that order, so appending a rule
//! never reorders existing insights.

use workload_core::models::{Insight, InsightCategory, MonthlyBucket, WeeklyBucket};

use crate::config::InsightThresholds;
use crate::statistics::{percent_change, round_to};

/// Inputs visible to every insight rule
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    /// Most recent weekly bucket
    pub recent: &'a WeeklyBucket,
    /// All weekly buckets, ascending
    pub weekly: &'a [WeeklyBucket],
    /// All monthly buckets, ascending
    pub monthly: &'a [MonthlyBucket],
    /// Active thresholds
    pub thresholds: &'a InsightThresholds,
}

/// Signature of a caller-supplied insight rule
pub type InsightRuleFn = fn(&InsightContext<'_>) -> Option<Insight>;

/// One entry of the insight rule table
#[derive(Debug, Clone, Copy)]
pub enum InsightRule {
    /// Too many caution/high days in the latest week
    RiskDays,
    /// Latest week's ratio spread is too wide
    RatioSpread,
    /// Latest week trained too rarely, or often enough with a balanced ratio
    TrainingFrequency,
    /// Average ratio moved sharply between the last two months
    MonthlyChange,
    /// Caller-supplied rule
    Custom {
        /// Identifier used in logs and tests
        name: &'static str,
        /// Rule body
        evaluate: InsightRuleFn,
    },
}

/// Rules evaluated by default, in reporting order
pub const DEFAULT_INSIGHT_RULES: [InsightRule; 4] = [
    InsightRule::RiskDays,
    InsightRule::RatioSpread,
    InsightRule::TrainingFrequency,
    InsightRule::MonthlyChange,
];

impl InsightRule {
    /// Rule identifier
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RiskDays => "risk_days",
            Self::RatioSpread => "ratio_spread",
            Self::TrainingFrequency => "training_frequency",
            Self::MonthlyChange => "monthly_change",
            Self::Custom { name, .. } => *name,
        }
    }

    /// Evaluate this rule against `ctx`
    #[must_use]
    pub fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<Insight> {
        match self {
            Self::RiskDays => risk_days(ctx),
            Self::RatioSpread => ratio_spread(ctx),
            Self::TrainingFrequency => training_frequency(ctx),
            Self::MonthlyChange => monthly_change(ctx),
            Self::Custom { evaluate, .. } => evaluate(ctx),
        }
    }
}

fn risk_days(ctx: &InsightContext<'_>) -> Option<Insight> {
    let risk_days = ctx.recent.stats.risk_days;
    (risk_days > ctx.thresholds.max_risk_days).then(|| Insight {
        category: InsightCategory::Warning,
        title: "Frequent high-risk days".into(),
        description: format!(
            "{risk_days} training days this week were in the caution or high-risk zone."
        ),
        value: Some(f64::from(risk_days)),
        comparison_label: Some("recommended ≤ 2/week".into()),
    })
}

fn ratio_spread(ctx: &InsightContext<'_>) -> Option<Insight> {
    let spread = ctx.recent.stats.ratio_spread();
    (spread > ctx.thresholds.max_ratio_spread).then(|| Insight {
        category: InsightCategory::Warning,
        title: "Inconsistent training intensity".into(),
        description: format!("Your workload ratio varied by {spread:.2} within this week."),
        value: Some(round_to(spread, 2)),
        comparison_label: Some("recommended ≤ 0.5".into()),
    })
}

fn training_frequency(ctx: &InsightContext<'_>) -> Option<Insight> {
    let stats = &ctx.recent.stats;
    let days = stats.active_days;
    if days < ctx.thresholds.low_frequency_days {
        return Some(Insight {
            category: InsightCategory::Warning,
            title: "Low training frequency".into(),
            description: format!("You trained on only {days} days this week."),
            value: Some(f64::from(days)),
            comparison_label: Some("recommended 4–6/week".into()),
        });
    }
    if days >= ctx.thresholds.balanced_frequency_days
        && stats.average_ratio < ctx.thresholds.balanced_max_ratio
    {
        return Some(Insight {
            category: InsightCategory::Positive,
            title: "Well-balanced training".into(),
            description: format!(
                "You trained {days} days this week with an average ratio of {:.2}.",
                stats.average_ratio
            ),
            value: Some(round_to(stats.average_ratio, 2)),
            comparison_label: None,
        });
    }
    None
}

fn monthly_change(ctx: &InsightContext<'_>) -> Option<Insight> {
    let [.., previous, latest] = ctx.monthly else {
        return None;
    };
    let change = percent_change(previous.stats.average_ratio, latest.stats.average_ratio)?;
    if change.abs() <= ctx.thresholds.monthly_change_percent {
        return None;
    }

    let percent = round_to(change.abs(), 1);
    let (category, title, verb) = if change > 0.0 {
        (
            InsightCategory::Warning,
            "Workload rising month over month",
            "rose",
        )
    } else {
        (
            InsightCategory::Neutral,
            "Workload falling month over month",
            "fell",
        )
    };

    Some(Insight {
        category,
        title: title.into(),
        description: format!(
            "Your average ratio in {} {verb} {percent:.1}% compared with {}.",
            latest.month_label, previous.month_label
        ),
        value: Some(percent),
        comparison_label: Some(format!(
            "previous month avg {:.2}",
            previous.stats.average_ratio
        )),
    })
}

/// Evaluates the insight rule table
#[derive(Debug, Clone)]
pub struct InsightGenerator {
    thresholds: InsightThresholds,
    rules: Vec<InsightRule>,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new(InsightThresholds::default())
    }
}

impl InsightGenerator {
    /// Create a generator with the default rule table
    #[must_use]
    pub fn new(thresholds: InsightThresholds) -> Self {
        Self {
            thresholds,
            rules: DEFAULT_INSIGHT_RULES.to_vec(),
        }
    }

    /// Append a rule after the existing ones
    #[must_use]
    pub fn with_rule(mut self, rule: InsightRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[InsightRule] {
        &self.rules
    }

    /// Generate insights from ascending weekly and monthly buckets
    ///
    /// With no weekly data a single neutral "insufficient data" insight is
    /// returned and no rule runs.
    #[must_use]
    pub fn generate(&self, weekly: &[WeeklyBucket], monthly: &[MonthlyBucket]) -> Vec<Insight> {
        let Some(recent) = weekly.last() else {
            return vec![Insight {
                category: InsightCategory::Neutral,
                title: "Insufficient data".into(),
                description: "Not enough training data to generate insights yet. Keep logging your daily load.".into(),
                value: None,
                comparison_label: None,
            }];
        };

        let ctx = InsightContext {
            recent,
            weekly,
            monthly,
            thresholds: &self.thresholds,
        };
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(&ctx))
            .collect()
    }
}
