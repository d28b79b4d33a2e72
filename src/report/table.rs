//! Terminal table rendering of a size report

use super::{BundleComparison, SizeReport};
use crate::fmt::CHART;
use console::style;
use std::fmt::{self, Write as _};

const LABEL_WIDTH: usize = 40;
const CHANGE_WIDTH: usize = 26;
const SIZE_WIDTH: usize = 10;
const TABLE_WIDTH: usize = LABEL_WIDTH + 2 * (CHANGE_WIDTH + SIZE_WIDTH) + 4;

/// Render a report as a plain-text table
pub fn render(report: &SizeReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let title = match report.pull_request {
        Some(pull_request) => format!("Size comparison for #{}", pull_request),
        None => "Size comparison".to_string(),
    };
    writeln!(out, "\n{}{}", CHART, style(title).bold())?;
    writeln!(out, "{}", "=".repeat(TABLE_WIDTH))?;

    for (title, entries) in report.sections() {
        render_section(&mut out, title, entries)?;
    }

    Ok(out)
}

fn render_section(out: &mut String, title: &str, entries: &[BundleComparison]) -> fmt::Result {
    writeln!(out, "\n{} ({})", style(title).bold(), entries.len())?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    if entries.is_empty() {
        return writeln!(out, "{}", style("No bundles").dim());
    }

    writeln!(
        out,
        "{:<label$} {:>change$} {:>size$} {:>change$} {:>size$}",
        "bundle",
        "Size change",
        "Size",
        "Gzip change",
        "Gzip",
        label = LABEL_WIDTH,
        change = CHANGE_WIDTH,
        size = SIZE_WIDTH,
    )?;

    for entry in entries {
        let row = entry.row();
        writeln!(
            out,
            "{:<label$} {} {:>size$} {} {:>size$}",
            truncate(&row.label, LABEL_WIDTH),
            paint(&row.parsed_change, entry.parsed.absolute_diff),
            row.parsed_size,
            paint(&row.gzip_change, entry.gzip.absolute_diff),
            row.gzip_size,
            label = LABEL_WIDTH,
            size = SIZE_WIDTH,
        )?;

        if let Some(url) = &entry.preview_url {
            writeln!(out, "   {}", style(url).dim())?;
        }
    }

    Ok(())
}

// Pad before styling so escape codes don't count toward the column width.
fn paint(change: &str, absolute_diff: i64) -> String {
    let padded = format!("{:>width$}", change, width = CHANGE_WIDTH);
    match absolute_diff.signum() {
        1 => style(padded).red().to_string(),
        -1 => style(padded).green().to_string(),
        _ => style(padded).dim().to_string(),
    }
}

/// Truncate string to max length in characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
