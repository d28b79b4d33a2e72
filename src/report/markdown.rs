//! Markdown rendering for pull request comments
//!
//! Modules are expanded by default; pages are collapsed since most pull requests
//! touch few of them. Increases are flagged with a GitHub emoji shortcode.

use super::{BundleComparison, SizeReport};
use crate::fmt::PercentMarkers;
use std::fmt::{self, Write as _};

/// Render a report as GitHub-flavored markdown
pub fn render(report: &SizeReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    match report.pull_request {
        Some(pull_request) => writeln!(out, "## Size comparison for #{}", pull_request)?,
        None => writeln!(out, "## Size comparison")?,
    }

    render_section(&mut out, "Modules", &report.main, true)?;
    render_section(&mut out, "Pages", &report.pages, false)?;

    Ok(out)
}

fn render_section(
    out: &mut String,
    title: &str,
    entries: &[BundleComparison],
    open: bool,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", if open { "<details open>" } else { "<details>" })?;
    writeln!(out, "<summary>{} ({})</summary>", title, entries.len())?;
    writeln!(out)?;

    if entries.is_empty() {
        writeln!(out, "_No bundles_")?;
    } else {
        writeln!(out, "| bundle | Size change | Size | Gzip change | Gzip |")?;
        writeln!(out, "|:-------|------------:|-----:|------------:|-----:|")?;
        for entry in entries {
            let row = entry.row_with(PercentMarkers::GITHUB);
            let label = escape_cell(&row.label);
            let label = match &entry.preview_url {
                Some(url) => format!("[{}]({})", label, url),
                None => label,
            };
            writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                label, row.parsed_change, row.parsed_size, row.gzip_change, row.gzip_size
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "</details>")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
