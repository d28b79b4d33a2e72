//! Size comparison report assembly
//!
//! Combines deltas, classification and ranking into two ordered sections: library
//! modules and documentation pages. Renderers for the terminal, GitHub comments and
//! JSON live in the submodules.

pub mod json;
pub mod markdown;
pub mod table;

use crate::classify::{Category, Classifier};
use crate::delta::{compute_deltas, DeltaRecord};
use crate::fmt::{format_diff_with, format_size, PercentMarkers};
use crate::rank::rank;
use crate::snapshot::Snapshot;
use log::debug;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the pull request number in preview templates
pub const PR_PLACEHOLDER: &str = "{pr}";

/// Host of per-pull-request preview deployments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewHost {
    template: String,
}

impl Default for PreviewHost {
    fn default() -> Self {
        Self::new("https://deploy-preview-{pr}--lib.netlify.app")
    }
}

impl PreviewHost {
    /// Create a host from a template containing [`PR_PLACEHOLDER`]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The raw template
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Preview URL of `path` for a pull request
    ///
    /// # Examples
    ///
    /// ```
    /// use size_comparison::report::PreviewHost;
    ///
    /// let host = PreviewHost::default();
    /// assert_eq!(
    ///     host.url_for(123, "/getting-started"),
    ///     "https://deploy-preview-123--lib.netlify.app/getting-started"
    /// );
    /// ```
    pub fn url_for(&self, pull_request: u64, path: &str) -> String {
        let host = self
            .template
            .replace(PR_PLACEHOLDER, &pull_request.to_string());
        format!("{}{}", host.trim_end_matches('/'), path)
    }
}

/// Inputs of a comparison that are not snapshots
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    /// Pull request being compared; only used for preview links
    pub pull_request: Option<u64>,
    /// Preview deployment host
    pub preview: PreviewHost,
    /// Bundle classification rules
    pub classifier: Classifier,
}

impl ReportContext {
    /// Context with default rules for the given pull request
    pub fn for_pull_request(pull_request: u64) -> Self {
        Self {
            pull_request: Some(pull_request),
            ..Default::default()
        }
    }
}

/// Comparison of one bundle between baseline and target
#[derive(Debug, Clone, PartialEq)]
pub struct BundleComparison {
    /// Bundle identifier from the snapshots
    pub id: String,
    /// Display label
    pub label: String,
    /// Report section
    pub category: Category,
    /// Preview deployment of a page, when known
    pub preview_url: Option<String>,
    /// Change of the minified size
    pub parsed: DeltaRecord,
    /// Change of the gzipped size
    pub gzip: DeltaRecord,
}

/// Pre-formatted cells of one report line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Display label
    pub label: String,
    /// e.g. `▲ +250 B (+25.00%)`
    pub parsed_change: String,
    /// Current minified size
    pub parsed_size: String,
    /// e.g. `--`
    pub gzip_change: String,
    /// Current gzipped size
    pub gzip_size: String,
}

impl BundleComparison {
    /// Format this comparison for display
    pub fn row(&self) -> ReportRow {
        self.row_with(PercentMarkers::PLAIN)
    }

    /// Format this comparison with custom percentage markers
    pub fn row_with(&self, markers: PercentMarkers<'_>) -> ReportRow {
        ReportRow {
            label: self.label.clone(),
            parsed_change: format_diff_with(
                self.parsed.absolute_diff,
                self.parsed.relative_diff,
                markers,
            ),
            parsed_size: format_size(self.parsed.current),
            gzip_change: format_diff_with(
                self.gzip.absolute_diff,
                self.gzip.relative_diff,
                markers,
            ),
            gzip_size: format_size(self.gzip.current),
        }
    }

    /// True when either metric changed
    pub fn is_changed(&self) -> bool {
        !self.parsed.is_unchanged() || !self.gzip.is_unchanged()
    }
}

/// Ranked comparisons split by category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeReport {
    /// Pull request the report was built for
    pub pull_request: Option<u64>,
    /// Library modules, most significant change first
    pub main: Vec<BundleComparison>,
    /// Documentation pages, most significant change first
    pub pages: Vec<BundleComparison>,
}

impl SizeReport {
    /// Total number of bundles across both sections
    pub fn len(&self) -> usize {
        self.main.len() + self.pages.len()
    }

    /// True when neither snapshot had any bundle
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.pages.is_empty()
    }

    /// True when any bundle changed size
    pub fn has_changes(&self) -> bool {
        self.main
            .iter()
            .chain(&self.pages)
            .any(BundleComparison::is_changed)
    }

    /// Section titles with their entries, modules first
    pub fn sections(&self) -> [(&'static str, &[BundleComparison]); 2] {
        [("Modules", &self.main), ("Pages", &self.pages)]
    }
}

/// Compare two snapshots
///
/// Every bundle of either snapshot appears exactly once, in the section of its
/// category, ranked by [`crate::rank::compare_significance`]. The pull request only
/// contributes preview links.
///
/// # Examples
///
/// ```
/// use size_comparison::report::{build_report, ReportContext};
/// use size_comparison::snapshot::Snapshot;
///
/// let baseline = Snapshot::from_json(r#"{ "@lib/core/Button.esm": { "parsed": 1000, "gzip": 400 } }"#)?;
/// let target = Snapshot::from_json(r#"{
///     "@lib/core/Button.esm": { "parsed": 1250, "gzip": 400 },
///     "docs:/getting-started": { "parsed": 5000, "gzip": 2000 }
/// }"#)?;
///
/// let report = build_report(&baseline, &target, &ReportContext::for_pull_request(7));
/// assert_eq!(report.main[0].label, "Button");
/// assert_eq!(report.main[0].row().parsed_change, "▲ +250 B (+25.00%)");
/// assert_eq!(
///     report.pages[0].preview_url.as_deref(),
///     Some("https://deploy-preview-7--lib.netlify.app/getting-started")
/// );
/// # Ok::<(), size_comparison::snapshot::SnapshotError>(())
/// ```
pub fn build_report(baseline: &Snapshot, target: &Snapshot, context: &ReportContext) -> SizeReport {
    let mut report = SizeReport {
        pull_request: context.pull_request,
        ..Default::default()
    };

    for (id, delta) in compute_deltas(baseline, target) {
        let classification = context.classifier.classify(&id);
        let preview_url = match (classification.page_path(), context.pull_request) {
            (Some(path), Some(pull_request)) => Some(context.preview.url_for(pull_request, path)),
            _ => None,
        };

        let comparison = BundleComparison {
            id,
            label: classification.label,
            category: classification.category,
            preview_url,
            parsed: delta.parsed,
            gzip: delta.gzip,
        };

        match comparison.category {
            Category::Main => report.main.push(comparison),
            Category::Page => report.pages.push(comparison),
        }
    }

    rank(&mut report.main);
    rank(&mut report.pages);

    debug!(
        "Built size report: {} modules, {} pages ({} baseline / {} target bundles)",
        report.main.len(),
        report.pages.len(),
        baseline.len(),
        target.len()
    );

    report
}
