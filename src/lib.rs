#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! size-comparison library
//!
//! Compares two bundle size snapshots (a pull request build and its merge base) and
//! produces a ranked report of which library modules and documentation pages changed.
//! The CLI is a thin layer over these modules.
//!
//! # Basic Example
//!
//! ```
//! use size_comparison::report::{build_report, ReportContext};
//! use size_comparison::snapshot::{SizeMetric, Snapshot};
//!
//! let baseline: Snapshot = [("@lib/core/Chip.esm", SizeMetric::new(1500, 600))]
//!     .into_iter()
//!     .collect();
//! let target: Snapshot = [("@lib/core/Chip.esm", SizeMetric::new(1000, 600))]
//!     .into_iter()
//!     .collect();
//!
//! let report = build_report(&baseline, &target, &ReportContext::default());
//!
//! let row = report.main[0].row();
//! assert_eq!(row.label, "Chip");
//! assert_eq!(row.parsed_change, "▼ -500 B (-33.33%)");
//! assert_eq!(row.gzip_change, "--");
//! ```
//!
//! # Advanced Example: Custom Rules
//!
//! Classification rules usually come from `.size-comparison.toml`:
//!
//! ```
//! use size_comparison::config::ConfigFile;
//!
//! let config: ConfigFile = toml_edit::de::from_str(r#"
//! [classifier]
//! page-prefix = "site:"
//! strip-prefixes = ["@acme/ui/"]
//! "#).unwrap();
//!
//! let context = config.report_context(Some(12)).unwrap();
//! assert_eq!(context.classifier.classify("@acme/ui/Menu.esm").label, "Menu");
//! ```

/// Snapshot storage and CI artifact locations
pub mod artifacts;
/// Bundle classification and display labels
pub mod classify;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Per-metric size deltas
pub mod delta;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Ordering of comparisons by significance
pub mod rank;
/// Report assembly and rendering
pub mod report;
/// Size snapshot model and loading
pub mod snapshot;
