//! CLI status formatting.
//!
//! One line per processed file plus a final summary:
//!
//! ```text
//! ✔ cover.jpg → out/cover_k4.png
//! ✖ Missing: scans/gone.png
//! ↷ Skipped (wrong size 1024x768): wide.jpg
//! ✖ Failed: broken.jpg (Format error decoding Jpeg: invalid JPEG format)
//!
//! Done. Converted: 1 | Skipped/Failed: 3
//! ```
//!
//! Each line has a `format_*` function (pure, unit testable) and a `print_*`
//! wrapper that writes to stdout.

use std::path::Path;

use crate::convert::{FileOutcome, FileReport, RunSummary, SkipReason};

/// Format the status line for one processed file.
pub fn format_report(report: &FileReport) -> String {
    match &report.outcome {
        FileOutcome::Converted { output } => {
            format!("✔ {} → {}", file_name(&report.source), output.display())
        }
        FileOutcome::Skipped(SkipReason::Missing) => {
            format!("✖ Missing: {}", report.source.display())
        }
        FileOutcome::Skipped(SkipReason::WrongSize { width, height }) => {
            format!(
                "↷ Skipped (wrong size {width}x{height}): {}",
                file_name(&report.source)
            )
        }
        FileOutcome::Skipped(SkipReason::Failed(reason)) => {
            format!("✖ Failed: {} ({reason})", file_name(&report.source))
        }
    }
}

/// Format the final summary line.
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "Done. Converted: {} | Skipped/Failed: {}",
        summary.converted, summary.skipped
    )
}

pub fn print_report(report: &FileReport) {
    println!("{}", format_report(report));
}

pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", format_summary(summary));
}

/// Bare file name for per-file lines; missing-file lines show the full path
/// instead, since the name alone may not identify which argument was bad.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
