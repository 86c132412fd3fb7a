// ABOUTME: Small numeric helpers shared by the ratio calculator and aggregators
// ABOUTME: Decimal rounding, arithmetic mean, and guarded percent change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workload_core::models::TrendDirection;

/// Round `value` to `decimals` decimal places (half away from zero)
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percent change from `from` to `to`, `None` when `from` is zero or not finite
#[must_use]
pub fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 || !from.is_finite() || !to.is_finite() {
        return None;
    }
    Some((to - from) / from * 100.0)
}

/// Direction of a percent change given a strict threshold on its magnitude
#[must_use]
pub fn direction_for(percent_change: f64, threshold_percent: f64) -> TrendDirection {
    if percent_change.abs() <= threshold_percent {
        TrendDirection::Stable
    } else if percent_change > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert!((round_to(1.234_567, 2) - 1.23).abs() < f64::EPSILON);
        assert!((round_to(2.25, 1) - 2.3).abs() < f64::EPSILON);
        assert!((round_to(30.000_000_000_000_004, 1) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_and_percent_change() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(percent_change(0.0, 1.0), None);
        assert_eq!(percent_change(2.0, 3.0), Some(50.0));
    }

    #[test]
    fn test_direction_threshold_is_strict() {
        assert_eq!(direction_for(5.0, 5.0), TrendDirection::Stable);
        assert_eq!(direction_for(5.1, 5.0), TrendDirection::Increasing);
        assert_eq!(direction_for(-5.1, 5.0), TrendDirection::Decreasing);
        assert_eq!(direction_for(-4.9, 5.0), TrendDirection::Stable);
    }
}
