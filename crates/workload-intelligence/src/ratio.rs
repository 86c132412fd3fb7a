// ABOUTME: Acute:chronic workload ratio calculation over trailing calendar windows
// ABOUTME: Converts daily workload records into risk-classified ratio points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ratio Calculator
//!
//! For each record date `D`:
//!
//! - acute load = sum of loads in the 7 calendar days ending at `D` / 7
//! - chronic load = sum of loads in the 28 calendar days ending at `D` / 28
//! - ratio = acute / chronic
//!
//! Missing days count as zero: the denominators never shrink to the number
//! of records actually present. Dates whose chronic total is not positive
//! produce no point.

use tracing::debug;
use workload_core::calendar::window_start;
use workload_core::models::{RatioPoint, WorkloadRecord};

use crate::config::{RiskThresholds, WindowConfig};
use crate::statistics::round_to;

/// Calculator for the daily acute:chronic ratio series
#[derive(Debug, Clone, Default)]
pub struct RatioCalculator {
    windows: WindowConfig,
    risk: RiskThresholds,
}

impl RatioCalculator {
    /// Create a calculator with explicit windows and risk thresholds
    #[must_use]
    pub const fn new(windows: WindowConfig, risk: RiskThresholds) -> Self {
        Self { windows, risk }
    }

    /// Calculate one ratio point per qualifying record date, ascending by date
    ///
    /// Input order does not matter. Records are expected to carry distinct
    /// dates (see `normalize::merge_duplicate_dates`).
    #[must_use]
    pub fn calculate(&self, records: &[WorkloadRecord]) -> Vec<RatioPoint> {
        let mut sorted: Vec<WorkloadRecord> = records.to_vec();
        sorted.sort_by_key(|record| record.date);

        let acute_days = f64::from(self.windows.acute_days);
        let chronic_days = f64::from(self.windows.chronic_days);

        let mut points = Vec::with_capacity(sorted.len());
        for record in &sorted {
            let date = record.date;
            let end = sorted.partition_point(|r| r.date <= date);
            let acute_begin =
                sorted.partition_point(|r| r.date < window_start(date, self.windows.acute_days));
            let chronic_begin =
                sorted.partition_point(|r| r.date < window_start(date, self.windows.chronic_days));

            // sum each window directly; differences of running totals drift
            let chronic_sum = window_sum(&sorted[chronic_begin..end]);
            if end == chronic_begin || chronic_sum <= 0.0 {
                debug!(%date, "skipping date with no chronic load");
                continue;
            }
            let acute_sum = window_sum(&sorted[acute_begin..end]);

            let acute_load = acute_sum / acute_days;
            let chronic_load = chronic_sum / chronic_days;
            let ratio = round_to(acute_load / chronic_load, 2);

            points.push(RatioPoint {
                date,
                ratio,
                acute_load: round_to(acute_load, 1),
                chronic_load: round_to(chronic_load, 1),
                risk_level: self.risk.classify(ratio),
            });
        }

        points
    }
}

fn window_sum(window: &[WorkloadRecord]) -> f64 {
    window.iter().map(|record| record.load).sum()
}
