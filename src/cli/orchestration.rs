//! Main workflow orchestration logic
//!
//! Keeps CLI argument parsing in main.rs separate from the stamp and verify
//! workflows, so both can be driven programmatically without clap.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::artifact::VersionArtifact;
use crate::boundary::BoundaryWarning;
use crate::classifier;
use crate::config::Config;
use crate::domain::VersionTriple;
use crate::git::Git2Repository;
use crate::verify::{self, VerifyReport};

/// Arguments for the stamp and verify workflows
///
/// Every `Some` value takes precedence over the corresponding config entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StampWorkflowArgs {
    /// Repository location
    pub repo_path: Option<PathBuf>,

    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub micro: Option<u64>,

    /// Explicit release flag instead of the one derived from the repository
    pub released: Option<bool>,

    /// Artifact destination
    pub output: Option<PathBuf>,

    /// Prefix of version tags
    pub tag_prefix: Option<String>,

    /// Render without writing
    pub dry_run: bool,
}

impl StampWorkflowArgs {
    /// Version components after applying overrides to the configured ones
    pub fn triple(&self, config: &Config) -> VersionTriple {
        let configured = config.version.triple();
        VersionTriple::new(
            self.major.unwrap_or(configured.major),
            self.minor.unwrap_or(configured.minor),
            self.micro.unwrap_or(configured.micro),
        )
    }

    pub fn repo_path(&self, config: &Config) -> PathBuf {
        self.repo_path
            .clone()
            .unwrap_or_else(|| config.repository.path.clone())
    }

    pub fn output(&self, config: &Config) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| config.artifact.path.clone())
    }

    pub fn tag_prefix(&self, config: &Config) -> String {
        self.tag_prefix
            .clone()
            .unwrap_or_else(|| config.repository.tag_prefix.clone())
    }
}

/// Result of a successful stamp workflow
#[derive(Debug, Clone, PartialEq)]
pub struct StampResult {
    /// The resolved artifact
    pub artifact: VersionArtifact,

    /// Where the artifact was (or would have been) written
    pub destination: PathBuf,

    /// Whether the artifact was written to disk
    pub written: bool,

    /// Non-fatal issues found while classifying the checkout
    pub warnings: Vec<BoundaryWarning>,
}

/// Stamp workflow
///
/// 1. Classify the checkout at the repository location
/// 2. Apply an explicit release flag, if given
/// 3. Resolve the artifact from the version triple
/// 4. Write it, unless this is a dry run
///
/// Repository and I/O failures abort the workflow.
pub fn run_stamp_workflow(args: &StampWorkflowArgs, config: &Config) -> Result<StampResult> {
    let repo_path = args.repo_path(config);
    let repo = Git2Repository::open(&repo_path)
        .with_context(|| format!("Cannot open repository at '{}'", repo_path.display()))?;

    let classification = classifier::classify(&repo).context("Failed to classify checkout")?;
    let mut warnings = Vec::new();

    if classification.head.is_detached() {
        warnings.push(BoundaryWarning::DetachedHead {
            current_commit_hash: classification.head.target.to_string(),
        });
    }

    if classification.released_by_tag_only() {
        warnings.push(BoundaryWarning::ReleasedByTagOnly {
            branch: classification.branch.name.clone(),
            tags: classification.head_tags.clone(),
        });
    }

    let is_released = match args.released {
        Some(requested) if requested != classification.is_released => {
            warnings.push(BoundaryWarning::ReleasedFlagOverridden {
                derived: classification.is_released,
                requested,
            });
            requested
        }
        Some(requested) => requested,
        None => classification.is_released,
    };

    let triple = args.triple(config);
    let artifact = VersionArtifact::new(triple, is_released);
    let destination = args.output(config);
    debug!(version = %triple, is_released, "resolved version");

    if args.dry_run {
        info!(path = %destination.display(), "dry run, artifact not written");
        return Ok(StampResult {
            artifact,
            destination,
            written: false,
            warnings,
        });
    }

    artifact
        .write_to(&destination)
        .with_context(|| format!("Failed to write artifact '{}'", destination.display()))?;

    Ok(StampResult {
        artifact,
        destination,
        written: true,
        warnings,
    })
}

/// Verify workflow
///
/// Reads the artifact at the configured destination and checks it against
/// the repository's tags and HEAD branch.
pub fn run_verify_workflow(args: &StampWorkflowArgs, config: &Config) -> Result<VerifyReport> {
    let repo_path = args.repo_path(config);
    let repo = Git2Repository::open(&repo_path)
        .with_context(|| format!("Cannot open repository at '{}'", repo_path.display()))?;

    let destination = args.output(config);
    let artifact = VersionArtifact::read(&destination)
        .with_context(|| format!("Failed to read artifact '{}'", destination.display()))?;

    let report = verify::verify(&repo, &artifact, &args.tag_prefix(config))?;
    debug!(findings = report.findings.len(), "verified artifact");

    Ok(report)
}
