// ABOUTME: Parallel analysis of many independent athletes using rayon
// ABOUTME: Each athlete's records are analyzed in isolation and results keep input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;
use tracing::info;
use workload_core::models::{AnalysisResult, RawWorkloadRecord};
use workload_intelligence::WorkloadAnalyzer;

/// Analyze each athlete's records independently, in parallel
///
/// Output order matches input order. No state is shared between athletes.
#[must_use]
pub fn analyze_batch<K>(
    analyzer: &WorkloadAnalyzer,
    athletes: &[(K, Vec<RawWorkloadRecord>)],
) -> Vec<(K, AnalysisResult)>
where
    K: Clone + Send + Sync,
{
    let results: Vec<(K, AnalysisResult)> = athletes
        .par_iter()
        .map(|(id, records)| (id.clone(), analyzer.analyze(records)))
        .collect();
    info!(athletes = results.len(), "batch analysis complete");
    results
}
