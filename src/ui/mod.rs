//! User interface module - terminal output for the CLI.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions that build the displayed text
//! - This module - Printing to stdout/stderr

use console::style;

use crate::artifact::VersionArtifact;
use crate::boundary::BoundaryWarning;
use crate::verify::VerifyReport;

pub mod formatter;

pub use formatter::{format_artifact_summary, format_report_summary};

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a non-fatal classification warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), warning);
}

/// Print the resolved version fields.
pub fn display_artifact(artifact: &VersionArtifact) {
    println!("\n{}", style("Resolved version:").bold());
    for line in format_artifact_summary(artifact) {
        println!("  {}", line);
    }
}

/// Print the rendered artifact, as it would be written.
pub fn display_rendered(rendered: &str) {
    println!("\n{}", style("Artifact preview:").bold());
    print!("{}", rendered);
}

/// Print every verifier finding followed by a summary line.
pub fn display_report(report: &VerifyReport) {
    for finding in &report.findings {
        eprintln!("{} {}", style("✗").red(), finding);
    }

    let summary = format_report_summary(report);
    if report.is_clean() {
        display_success(&summary);
    } else {
        display_error(&summary);
    }
}
