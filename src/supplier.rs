// ABOUTME: Workload record suppliers feeding the analyzer from files or memory
// ABOUTME: Defines the WorkloadRecordSupplier trait with JSON-file and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record suppliers
//!
//! The engine never performs I/O itself. Suppliers are the boundary where
//! raw `{ "date", "load" }` records are read and handed to
//! [`WorkloadAnalyzer::analyze`](crate::WorkloadAnalyzer::analyze).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use workload_core::errors::{AppError, AppResult};
use workload_core::models::RawWorkloadRecord;

/// Source of raw workload records for one athlete
pub trait WorkloadRecordSupplier: Send + Sync {
    /// Fetch all available records
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or decoded
    fn fetch(&self) -> AppResult<Vec<RawWorkloadRecord>>;
}

/// Reads a JSON array of `{ "date": "YYYY-MM-DD", "load": number }` objects
#[derive(Debug, Clone)]
pub struct JsonFileSupplier {
    path: PathBuf,
}

impl JsonFileSupplier {
    /// Create a supplier reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this supplier reads from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkloadRecordSupplier for JsonFileSupplier {
    fn fetch(&self) -> AppResult<Vec<RawWorkloadRecord>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            AppError::from(e).with_details(serde_json::json!({
                "path": self.path.display().to_string(),
            }))
        })?;
        let records: Vec<RawWorkloadRecord> = serde_json::from_str(&contents)?;
        debug!(
            path = %self.path.display(),
            count = records.len(),
            "loaded workload records"
        );
        Ok(records)
    }
}

/// Supplier over records already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySupplier {
    records: Vec<RawWorkloadRecord>,
}

impl InMemorySupplier {
    /// Wrap an existing record list
    #[must_use]
    pub const fn new(records: Vec<RawWorkloadRecord>) -> Self {
        Self { records }
    }
}

impl From<Vec<RawWorkloadRecord>> for InMemorySupplier {
    fn from(records: Vec<RawWorkloadRecord>) -> Self {
        Self::new(records)
    }
}

impl WorkloadRecordSupplier for InMemorySupplier {
    fn fetch(&self) -> AppResult<Vec<RawWorkloadRecord>> {
        Ok(self.records.clone())
    }
}
