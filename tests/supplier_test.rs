// ABOUTME: Integration tests for workload record suppliers
// ABOUTME: Reads JSON record files from temp directories and checks error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::{analyzer_on, date, init_test_logging};
use pierre_workload::errors::ErrorCode;
use pierre_workload::models::RawWorkloadRecord;
use pierre_workload::supplier::{InMemorySupplier, JsonFileSupplier, WorkloadRecordSupplier};
use tempfile::TempDir;

#[test]
fn test_json_file_supplier_reads_records() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    fs::write(
        &path,
        r#"[
            {"date": "2025-03-10", "load": 70},
            {"date": "2025-03-09", "load": 45.5}
        ]"#,
    )
    .unwrap();

    let records = JsonFileSupplier::new(&path).fetch().unwrap();
    assert_eq!(
        records,
        vec![
            RawWorkloadRecord::new("2025-03-10", 70.0),
            RawWorkloadRecord::new("2025-03-09", 45.5),
        ]
    );

    let result = analyzer_on(date(2025, 3, 10)).analyze(&records);
    assert_eq!(result.ratio_points.len(), 2);
}

#[test]
fn test_missing_file_is_not_found() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let error = JsonFileSupplier::new(dir.path().join("absent.json"))
        .fetch()
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.details.is_some());
}

#[test]
fn test_malformed_json_is_serialization_error() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"date": "2025-03-10", "load": }]"#).unwrap();

    let error = JsonFileSupplier::new(&path).fetch().unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_in_memory_supplier_returns_its_records() {
    let records = vec![RawWorkloadRecord::new("2025-01-01", 30.0)];
    let supplier = InMemorySupplier::from(records.clone());
    assert_eq!(supplier.fetch().unwrap(), records);
    assert!(InMemorySupplier::default().fetch().unwrap().is_empty());
}
