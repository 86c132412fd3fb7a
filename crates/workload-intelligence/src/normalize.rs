// ABOUTME: Input normalization for workload records before ratio calculation
// ABOUTME: Parses ISO dates, drops malformed rows, and merges duplicate dates by summing loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record normalization
//!
//! Suppliers hand over raw rows. Rows with an unparseable date or a
//! non-finite load are skipped rather than reported. Several rows on the same
//! date are merged into one record whose load is the sum, the same way daily
//! stress scores are accumulated for training-load curves.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;
use workload_core::calendar::parse_iso_date;
use workload_core::models::{RawWorkloadRecord, WorkloadRecord};

/// Parse raw rows and merge them into one record per date, ascending
#[must_use]
pub fn normalize_records(raw: &[RawWorkloadRecord]) -> Vec<WorkloadRecord> {
    let mut parsed = Vec::with_capacity(raw.len());
    for row in raw {
        let Some(date) = parse_iso_date(&row.date) else {
            debug!(date = %row.date, "skipping workload record with unparseable date");
            continue;
        };
        parsed.push(WorkloadRecord {
            date,
            load: row.load,
        });
    }
    merge_duplicate_dates(&parsed)
}

/// Merge records sharing a date by summing their loads, ascending by date
///
/// Records with a non-finite load are dropped.
#[must_use]
pub fn merge_duplicate_dates(records: &[WorkloadRecord]) -> Vec<WorkloadRecord> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        if !record.load.is_finite() {
            debug!(date = %record.date, "skipping workload record with non-finite load");
            continue;
        }
        match by_date.entry(record.date) {
            Entry::Vacant(slot) => {
                slot.insert(record.load);
            }
            Entry::Occupied(mut slot) => {
                debug!(date = %record.date, "merging duplicate workload date");
                *slot.get_mut() += record.load;
            }
        }
    }

    by_date
        .into_iter()
        .map(|(date, load)| WorkloadRecord { date, load })
        .collect()
}
