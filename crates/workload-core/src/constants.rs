// ABOUTME: Constants for workload ratio analytics organized by domain
// ABOUTME: Window sizes, risk and trend thresholds, and user-facing message templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Default values used by the engine configuration. Callers normally go
//! through `AnalysisConfig` rather than reading these directly.

/// Trailing window sizes for the acute:chronic ratio
pub mod windows {
    /// Acute window - 7 calendar days ending on the evaluated date
    pub const ACUTE_WINDOW_DAYS: u32 = 7;
    /// Chronic window - 28 calendar days ending on the evaluated date
    pub const CHRONIC_WINDOW_DAYS: u32 = 28;
}

/// Risk level thresholds applied to a rounded ratio
pub mod risk {
    /// Strictly above this ratio is high risk
    pub const HIGH_RATIO: f64 = 1.5;
    /// At or above this ratio is caution
    pub const CAUTION_RATIO: f64 = 1.3;
    /// At or above this ratio is the productive ("good") band
    pub const GOOD_RATIO: f64 = 0.8;
}

/// Trend-direction thresholds (percent change)
pub mod trend {
    /// Weekly bucket halves must differ by more than this to count as a trend
    pub const WEEKLY_THRESHOLD_PERCENT: f64 = 5.0;
    /// Monthly bucket halves use a coarser threshold
    pub const MONTHLY_THRESHOLD_PERCENT: f64 = 10.0;
    /// Overall trend across recent weeks
    pub const OVERALL_THRESHOLD_PERCENT: f64 = 5.0;
    /// Number of most recent weekly buckets inspected for the overall trend
    pub const OVERALL_LOOKBACK_WEEKS: usize = 4;
}

/// Insight rule thresholds
pub mod insights {
    /// More risk days than this in the latest week triggers a warning
    pub const MAX_RISK_DAYS_PER_WEEK: u32 = 3;
    /// Ratio spread (max - min) above this triggers a volatility warning
    pub const MAX_RATIO_SPREAD: f64 = 1.0;
    /// Fewer active days than this triggers a low-frequency warning
    pub const LOW_FREQUENCY_DAYS: u32 = 3;
    /// At least this many active days may earn a balanced-training insight
    pub const BALANCED_FREQUENCY_DAYS: u32 = 5;
    /// Average ratio must stay below this for a balanced-training insight
    pub const BALANCED_MAX_RATIO: f64 = 1.3;
    /// Month-over-month change above this percent is reported
    pub const MONTHLY_CHANGE_PERCENT: f64 = 15.0;
}

/// Recommendation rule thresholds
pub mod recommendations {
    /// Weekly average ratio above this asks for lower intensity
    pub const HIGH_LOAD_RATIO: f64 = 1.5;
    /// Weekly average ratio below this asks for higher intensity
    pub const LOW_LOAD_RATIO: f64 = 0.8;
    /// Upper bound (inclusive) of the maintain-current-load band
    pub const MAINTAIN_MAX_RATIO: f64 = 1.3;
    /// More risk days than this asks for a plan review
    pub const MAX_RISK_DAYS: u32 = 3;
    /// Fewer active days than this asks for more sessions
    pub const LOW_FREQUENCY_DAYS: u32 = 3;
    /// More active days than this asks for a rest day
    pub const HIGH_FREQUENCY_DAYS: u32 = 6;
    /// Rising weekly trend above this percent warns about rapid increases
    pub const RAPID_INCREASE_PERCENT: f64 = 10.0;
    /// Ratio spread above this asks for steadier intensity
    pub const MAX_RATIO_SPREAD: f64 = 1.0;
}

/// Civil-calendar defaults
pub mod calendar {
    /// Fixed UTC offset (hours east) used to decide what "today" is
    pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;
    /// Wire format for record dates
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// User-facing message templates
pub mod messages {
    /// Overall trend description when fewer than two weeks exist
    pub const TREND_INSUFFICIENT_DATA: &str =
        "Not enough data to determine a trend yet. Keep logging your training.";
    /// Overall trend, rising (`{percent}` is substituted)
    pub const TREND_INCREASING: &str = "Your workload ratio has risen {percent}% over recent weeks. Watch for signs of overload.";
    /// Overall trend, falling (`{percent}` is substituted)
    pub const TREND_DECREASING: &str = "Your workload ratio has fallen {percent}% over recent weeks. Make sure fitness is not slipping.";
    /// Overall trend, stable (`{percent}` is substituted)
    pub const TREND_STABLE: &str =
        "Your workload ratio is stable ({percent}% change). Keep up the consistent training.";

    /// Onboarding recommendations returned when no weekly data exists
    pub const ONBOARDING: [&str; 3] = [
        "Log your training load every day to build a reliable baseline.",
        "At least four weeks of data are needed for an accurate workload ratio.",
        "Record both training sessions and rest days consistently.",
    ];

    /// Load band: too high
    pub const REDUCE_INTENSITY: &str =
        "Your workload ratio is high. Reduce training intensity for the next few days.";
    /// Load band: too high, second step
    pub const ADD_RECOVERY_DAY: &str = "Schedule at least one full recovery day this week.";
    /// Load band: too low
    pub const INCREASE_INTENSITY: &str =
        "Your workload ratio is low. Gradually increase training intensity.";
    /// Load band: too low, second step
    pub const ADD_TRAINING_DAY: &str = "Consider adding one more training day per week.";
    /// Load band: productive
    pub const MAINTAIN_LOAD: &str =
        "Your workload is in the optimal range. Maintain your current training load.";
    /// Too many risk days
    pub const REVIEW_PLAN: &str = "Review your training plan: too many high-risk days this week.";
    /// Too many risk days, second step
    pub const CONSULT_COACH: &str = "Consult your coach or trainer about adjusting your schedule.";
    /// Low frequency
    pub const INCREASE_FREQUENCY: &str =
        "Train more regularly - aim for four to six sessions per week.";
    /// High frequency
    pub const ENSURE_REST_DAY: &str = "Make sure to take at least one rest day per week.";
    /// Rapid increase
    pub const AVOID_RAPID_INCREASE: &str =
        "Your load is climbing quickly. Avoid increasing weekly load by more than 10%.";
    /// Volatile intensity
    pub const CONSISTENT_INTENSITY: &str =
        "Your daily intensity varies a lot. Aim for more consistent session intensity.";
    /// Always-on closing advice
    pub const KEEP_LOGGING: &str = "Keep logging your training daily for more accurate analysis.";
    /// Always-on closing advice
    pub const LISTEN_TO_BODY: &str =
        "Adjust training to how you feel - fatigue and condition matter as much as numbers.";
}
