// ABOUTME: Core types and constants for the Pierre workload analytics engine
// ABOUTME: Foundation crate with error handling, workload models, calendar helpers, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workload Core
//!
//! Foundation crate providing shared types and constants for the workload
//! ratio engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Window sizes, thresholds, and message templates organized by domain
//! - **models**: Workload records, ratio points, buckets, insights, and analysis results
//! - **calendar**: Injectable clock and civil-date helpers (Monday weeks, calendar months)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Workload data models (records, ratio points, buckets, insights)
pub mod models;

/// Clock capability and calendar arithmetic
pub mod calendar;
