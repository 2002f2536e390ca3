//! Run metrics.
//!
//! `Extractor::run` returns only the `ExtractionResult`;
//! `Extractor::run_with_metrics` also keeps per-line traces, the auto-detect
//! statistics and phase timings for the verbose API and the CLI report.

use crate::{AutoDetectStats, ExtractionResult, LineTrace};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Extractor::run_with_metrics`](super::Extractor::run_with_metrics).
    pub total: Duration,
    /// Filtering and normalizing every line.
    pub prepare: Duration,
    /// Resolving the column policy (includes the auto-detect scan).
    pub resolve_policy: Duration,
    /// Number extraction, name matching and record assembly.
    pub matching: Duration,
}

/// Extraction output bundled with traces and timings.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub result: ExtractionResult,
    pub traces: Vec<LineTrace>,
    pub auto_detect: Option<AutoDetectStats>,
    pub metrics: RunMetrics,
}
