//! Pure formatting functions for UI output.
//!
//! This module contains all display logic for terminal progress and result
//! lines. Messages are built by `format_*` functions so they can be tested
//! without capturing output.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::ExportReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Status line announcing the extraction
pub fn format_extraction_start(num_commits: usize, branch: &str) -> String {
    format!("Extracting {} commits from branch '{}'...", num_commits, branch)
}

/// Result lines of a completed export, in display order
pub fn format_report(report: &ExportReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Exported {} commits to {}",
        report.commit_count,
        report.json_path.display()
    )];

    if report.excluded_count > 0 {
        lines.push(format!(
            "Excluded {} commits matching filters",
            report.excluded_count
        ));
    }

    if let Some(path) = &report.markdown_path {
        lines.push(format!("Generated markdown file: {}", path.display()));
    }

    lines
}

/// Display everything a finished run has to say.
pub fn display_report(report: &ExportReport) {
    for warning in &report.warnings {
        display_boundary_warning(warning);
    }
    for line in format_report(report) {
        display_success(&line);
    }
}
