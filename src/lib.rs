// ABOUTME: Main library entry point for the Pierre workload analytics toolkit
// ABOUTME: Re-exports the engine crates and adds logging, record suppliers, and batch analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Workload
//!
//! Acute:chronic workload ratio (ACWR) analytics for athlete monitoring
//! dashboards. The engine turns a series of daily training loads into a
//! per-day injury-risk ratio, weekly and monthly trend summaries, insights,
//! and recommendations.
//!
//! ## Architecture
//!
//! - **`workload-core`**: errors, constants, models, calendar/clock capability
//! - **`workload-intelligence`**: the pure analysis engine
//! - **this crate**: logging setup, record suppliers, parallel batch analysis,
//!   and the `pierre-workload` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_workload::supplier::{JsonFileSupplier, WorkloadRecordSupplier};
//! use pierre_workload::WorkloadAnalyzer;
//! use pierre_workload::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let records = JsonFileSupplier::new("records.json").fetch()?;
//!     let result = WorkloadAnalyzer::default().analyze(&records);
//!     println!("{}", result.overall_trend.description);
//!     Ok(())
//! }
//! ```

/// Parallel analysis of independent athletes
pub mod batch;

/// Structured logging configuration
pub mod logging;

/// Workload record suppliers (JSON file, in-memory)
pub mod supplier;

pub use workload_core::{calendar, constants, errors, models};
pub use workload_intelligence::{
    aggregation, config, insights, normalize, ratio, recommendations, statistics, trend,
};
pub use workload_intelligence::{AnalysisConfig, WorkloadAnalyzer};
