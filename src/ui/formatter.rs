//! Pure formatting functions for UI output.
//!
//! Functions here build text only and never print, so they are testable.

use crate::artifact::VersionArtifact;
use crate::verify::VerifyReport;

/// Lines describing each artifact field, aligned on the field names.
pub fn format_artifact_summary(artifact: &VersionArtifact) -> Vec<String> {
    vec![
        format!("{:<14} {}", "major", artifact.major),
        format!("{:<14} {}", "short_version", artifact.short_version),
        format!("{:<14} {}", "version", artifact.version),
        format!("{:<14} {}", "full_version", artifact.full_version),
        format!("{:<14} {}", "is_released", artifact.is_released),
    ]
}

/// One-line summary of a verification run.
pub fn format_report_summary(report: &VerifyReport) -> String {
    match report.findings.len() {
        0 => "Artifact matches the repository".to_string(),
        1 => "1 verification finding".to_string(),
        n => format!("{} verification findings", n),
    }
}
