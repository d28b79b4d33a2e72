//! JSON rendering of a size report for CI integration

use super::{BundleComparison, SizeReport};
use crate::classify::Category;
use crate::delta::DeltaRecord;
use crate::fmt::{format_diff, format_size};
use serde::Serialize;

/// JSON document describing a whole comparison
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Pull request the report was built for
    pub pull_request: Option<u64>,
    /// Library modules, ranked
    pub main: Vec<JsonEntry>,
    /// Documentation pages, ranked
    pub pages: Vec<JsonEntry>,
}

/// One bundle of the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    /// Bundle identifier
    pub id: String,
    /// Display label
    pub label: String,
    /// Report section
    pub category: Category,
    /// Preview deployment of a page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    /// Minified size change
    pub parsed: JsonMetric,
    /// Gzipped size change
    pub gzip: JsonMetric,
}

/// Raw and formatted values of one metric
#[derive(Debug, Clone, Serialize)]
pub struct JsonMetric {
    /// Size in the baseline, in bytes
    pub previous: u64,
    /// Size in the target, in bytes
    pub current: u64,
    /// Byte difference (negative = reduction)
    pub absolute_diff: i64,
    /// Ratio of change; `null` when the baseline size was zero
    pub relative_diff: Option<f64>,
    /// Formatted change, e.g. `▲ +250 B (+25.00%)`
    pub change: String,
    /// Formatted current size
    pub size: String,
}

impl JsonMetric {
    /// Convert from a delta record
    pub fn from_delta(delta: &DeltaRecord) -> Self {
        Self {
            previous: delta.previous,
            current: delta.current,
            absolute_diff: delta.absolute_diff,
            relative_diff: delta.relative_diff.is_finite().then_some(delta.relative_diff),
            change: format_diff(delta.absolute_diff, delta.relative_diff),
            size: format_size(delta.current),
        }
    }
}

impl JsonEntry {
    /// Convert from a bundle comparison
    pub fn from_comparison(comparison: &BundleComparison) -> Self {
        Self {
            id: comparison.id.clone(),
            label: comparison.label.clone(),
            category: comparison.category,
            preview_url: comparison.preview_url.clone(),
            parsed: JsonMetric::from_delta(&comparison.parsed),
            gzip: JsonMetric::from_delta(&comparison.gzip),
        }
    }
}

impl JsonReport {
    /// Create the JSON document of a report
    pub fn new(report: &SizeReport) -> Self {
        Self {
            pull_request: report.pull_request,
            main: report.main.iter().map(JsonEntry::from_comparison).collect(),
            pages: report.pages.iter().map(JsonEntry::from_comparison).collect(),
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))
    }
}
