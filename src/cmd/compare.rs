//! Compare command implementation
//!
//! Handles the `size-comparison compare` command which loads a baseline and a target
//! snapshot and prints the ranked report in the requested format.

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use log::debug;
use std::path::Path;

use crate::config::ConfigLoader;
use crate::fmt::{CHECKMARK, WARNING};
use crate::report::{self, json::JsonReport, SizeReport};
use crate::snapshot::{SnapshotLoader, SnapshotRole};

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    #[default]
    Table,
    /// GitHub pull request comment
    Markdown,
    /// Machine-readable JSON
    Json,
}

/// Load both snapshots and build the report
///
/// Configuration is read from the project root; snapshots are read from the given
/// paths.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or either snapshot cannot be
/// loaded.
pub fn compare_snapshots(
    project_root: &Path,
    baseline: &Path,
    target: &Path,
    pull_request: Option<u64>,
) -> Result<SizeReport> {
    let config = ConfigLoader::load(project_root)?;
    let context = config
        .report_context(pull_request)
        .context("Failed to resolve comparison settings")?;

    let loader = SnapshotLoader::new().for_pull_request(pull_request);
    let baseline = loader
        .load(baseline, SnapshotRole::Baseline)
        .context("Failed to load baseline snapshot")?;
    let target = loader
        .load(target, SnapshotRole::Target)
        .context("Failed to load target snapshot")?;

    Ok(report::build_report(&baseline, &target, &context))
}

/// Render a report in the given format
pub fn render(report: &SizeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(report::table::render(report)?),
        OutputFormat::Markdown => Ok(report::markdown::render(report)?),
        OutputFormat::Json => JsonReport::new(report).to_json(),
    }
}

/// Compare two size snapshots
///
/// # Examples
///
/// ```no_run
/// use size_comparison::cmd::compare::{cmd_compare, OutputFormat};
/// use std::path::Path;
///
/// cmd_compare(
///     Path::new("."),
///     Path::new("base/size-snapshot.json"),
///     Path::new("pr/size-snapshot.json"),
///     Some(123),
///     OutputFormat::Markdown,
/// )?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_compare(
    project_root: &Path,
    baseline: &Path,
    target: &Path,
    pull_request: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let report = compare_snapshots(project_root, baseline, target, pull_request)?;
    if report.is_empty() {
        eprintln!(
            "{}{}",
            WARNING,
            style("Both snapshots are empty; check that the build produced its size snapshot")
                .yellow()
        );
    }
    debug!("Rendering {} bundles as {:?}", report.len(), format);

    let rendered = render(&report, format)?;
    if format == OutputFormat::Json {
        println!("{}", rendered);
    } else {
        print!("{}", rendered);
    }

    if format == OutputFormat::Table && !report.has_changes() {
        println!("\n{}{}", CHECKMARK, style("No size changes").green());
    }

    Ok(())
}
