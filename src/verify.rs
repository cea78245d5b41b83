//! Verification of a generated artifact against the repository
//!
//! The verifier applies its own, broader notion of a release: release/* and
//! hotfix/* branches and branches named like version tags count too. This
//! deliberately differs from [crate::classifier::is_released], and a
//! checkout where the two disagree produces a finding rather than being
//! silently reconciled.

use std::cmp::Ordering;
use std::fmt;

use semver::Version;
use tracing::debug;

use crate::artifact::{VersionArtifact, DEVELOP_SUFFIX};
use crate::classifier::list_tags;
use crate::domain::reference::short_name;
use crate::domain::{is_tag_semver_shaped, BranchContext, Tag};
use crate::error::{ReleaseStampError, Result};
use crate::git::Repository;

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyFinding {
    /// `major` differs from the latest tagged version
    Major { expected: u64, found: u64 },
    /// `short_version` differs from the latest tagged "major.minor"
    ShortVersion { expected: String, found: String },
    /// `version` differs from the latest tagged version
    Version { expected: String, found: String },
    /// `full_version` does not start with `version`
    FullVersionPrefix {
        version: String,
        full_version: String,
    },
    /// `full_version` is not a semantic version
    UnparsableFullVersion { full_version: String, reason: String },
    /// `is_released` disagrees with the branch classification
    ReleasedFlag {
        branch: String,
        expected: bool,
        found: bool,
    },
    /// The prerelease label of `full_version` disagrees with the branch classification
    Prerelease {
        branch: String,
        expected: Option<String>,
        found: Option<String>,
    },
}

impl fmt::Display for VerifyFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyFinding::Major { expected, found } => {
                write!(f, "major is {} but the latest tag has {}", found, expected)
            }
            VerifyFinding::ShortVersion { expected, found } => write!(
                f,
                "short_version is '{}' but the latest tag has '{}'",
                found, expected
            ),
            VerifyFinding::Version { expected, found } => write!(
                f,
                "version is '{}' but the latest tag is '{}'",
                found, expected
            ),
            VerifyFinding::FullVersionPrefix {
                version,
                full_version,
            } => write!(
                f,
                "full_version '{}' does not start with version '{}'",
                full_version, version
            ),
            VerifyFinding::UnparsableFullVersion {
                full_version,
                reason,
            } => write!(f, "Cannot parse full_version '{}': {}", full_version, reason),
            VerifyFinding::ReleasedFlag {
                branch,
                expected,
                found,
            } => write!(
                f,
                "is_released is {} on branch '{}', expected {}",
                found, branch, expected
            ),
            VerifyFinding::Prerelease {
                branch,
                expected,
                found,
            } => write!(
                f,
                "full_version prerelease is {} on branch '{}', expected {}",
                describe_pre(found.as_deref()),
                branch,
                describe_pre(expected.as_deref())
            ),
        }
    }
}

fn describe_pre(pre: Option<&str>) -> String {
    match pre {
        Some(label) => format!("'{}'", label),
        None => "none".to_string(),
    }
}

/// Outcome of verifying one artifact
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerifyReport {
    pub findings: Vec<VerifyFinding>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Semver precedence: build metadata does not take part in the ordering.
fn precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

/// Highest version among the tags that carry `prefix`.
///
/// Tags that do not parse are ignored. Fails with
/// [ReleaseStampError::NoVersionTags] when nothing parses, and with
/// [ReleaseStampError::AmbiguousVersion] when distinct tags tie for the
/// maximum.
pub fn latest_tag_version(repo: &impl Repository, prefix: &str) -> Result<Version> {
    let mut best: Option<Version> = None;
    let mut best_tags: Vec<String> = Vec::new();

    for name in list_tags(repo)? {
        let Some(version) = Tag::new(name.as_str()).version(prefix) else {
            debug!(tag = %name, "skipping tag without a semantic version");
            continue;
        };

        let ordering = best
            .as_ref()
            .map_or(Ordering::Greater, |current| precedence(&version, current));

        match ordering {
            Ordering::Greater => {
                best = Some(version);
                best_tags = vec![name];
            }
            Ordering::Equal => best_tags.push(name),
            Ordering::Less => {}
        }
    }

    let best = best.ok_or_else(|| {
        ReleaseStampError::NoVersionTags(format!("no tag parses with prefix '{}'", prefix))
    })?;

    if best_tags.len() > 1 {
        return Err(ReleaseStampError::AmbiguousVersion {
            version: best.to_string(),
            tags: best_tags,
        });
    }

    Ok(best)
}

/// The verifier's release predicate for a branch short name.
pub fn expects_release(branch_name: &str, prefix: &str) -> bool {
    BranchContext::new(branch_name).is_release_branch() || is_tag_semver_shaped(branch_name, prefix)
}

/// Check the version fields of `artifact` against the latest version tag.
pub fn check_version(
    repo: &impl Repository,
    artifact: &VersionArtifact,
    prefix: &str,
) -> Result<Vec<VerifyFinding>> {
    let latest = latest_tag_version(repo, prefix)?;
    let mut findings = Vec::new();

    if artifact.major != latest.major {
        findings.push(VerifyFinding::Major {
            expected: latest.major,
            found: artifact.major,
        });
    }

    let expected_short = format!("{}.{}", latest.major, latest.minor);
    if artifact.short_version != expected_short {
        findings.push(VerifyFinding::ShortVersion {
            expected: expected_short,
            found: artifact.short_version.clone(),
        });
    }

    let expected_version = latest.to_string();
    if artifact.version != expected_version {
        findings.push(VerifyFinding::Version {
            expected: expected_version,
            found: artifact.version.clone(),
        });
    }

    let base = artifact
        .full_version
        .split('-')
        .next()
        .unwrap_or_default();
    if artifact.version != base {
        findings.push(VerifyFinding::FullVersionPrefix {
            version: artifact.version.clone(),
            full_version: artifact.full_version.clone(),
        });
    }

    Ok(findings)
}

/// Check `is_released` and the `full_version` label against HEAD's branch.
pub fn check_released(
    repo: &impl Repository,
    artifact: &VersionArtifact,
    prefix: &str,
) -> Result<Vec<VerifyFinding>> {
    let branch = short_name(&repo.head()?.name);
    let mut findings = Vec::new();

    let full_version = match Version::parse(&artifact.full_version) {
        Ok(version) => version,
        Err(e) => {
            findings.push(VerifyFinding::UnparsableFullVersion {
                full_version: artifact.full_version.clone(),
                reason: e.to_string(),
            });
            return Ok(findings);
        }
    };

    let expected_released = expects_release(&branch, prefix);
    let expected_pre = (!expected_released).then(|| develop_label().to_string());
    let found_pre = (!full_version.pre.is_empty()).then(|| full_version.pre.to_string());

    if artifact.is_released != expected_released {
        findings.push(VerifyFinding::ReleasedFlag {
            branch: branch.clone(),
            expected: expected_released,
            found: artifact.is_released,
        });
    }

    if found_pre != expected_pre {
        findings.push(VerifyFinding::Prerelease {
            branch,
            expected: expected_pre,
            found: found_pre,
        });
    }

    Ok(findings)
}

/// Run every check and collect the findings.
pub fn verify(
    repo: &impl Repository,
    artifact: &VersionArtifact,
    prefix: &str,
) -> Result<VerifyReport> {
    let mut findings = check_version(repo, artifact, prefix)?;
    findings.extend(check_released(repo, artifact, prefix)?);

    Ok(VerifyReport { findings })
}

fn develop_label() -> &'static str {
    DEVELOP_SUFFIX.trim_start_matches('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionTriple;
    use crate::git::MockRepository;
    use git2::Oid;

    fn oid(byte: u8) -> Oid {
        Oid::from_bytes(&[byte; 20]).unwrap()
    }

    fn tagged_repo(branch: &str, tags: &[&str]) -> MockRepository {
        let mut repo = MockRepository::new();
        repo.checkout_branch(branch, oid(100));
        for (i, tag) in tags.iter().enumerate() {
            repo.add_tag(tag, oid(i as u8 + 1));
        }
        repo
    }

    #[test]
    fn test_latest_uses_semver_order() {
        let repo = tagged_repo("main", &["v1.10.0", "v1.2.0", "v1.9.3"]);
        assert_eq!(
            latest_tag_version(&repo, "v").unwrap(),
            Version::new(1, 10, 0)
        );
    }

    #[test]
    fn test_latest_prerelease_ranks_below_release() {
        let repo = tagged_repo("main", &["v2.0.0", "v2.0.0-rc1"]);
        assert_eq!(latest_tag_version(&repo, "v").unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_latest_skips_unparsable_tags() {
        let repo = tagged_repo("main", &["nightly", "v1.0", "v0.3.0", "release-9.0.0"]);
        assert_eq!(latest_tag_version(&repo, "v").unwrap(), Version::new(0, 3, 0));
    }

    #[test]
    fn test_latest_without_version_tags() {
        let repo = tagged_repo("main", &["nightly"]);
        assert!(matches!(
            latest_tag_version(&repo, "v"),
            Err(ReleaseStampError::NoVersionTags(_))
        ));
    }

    #[test]
    fn test_latest_tie_is_ambiguous() {
        let repo = tagged_repo("main", &["v1.0.0+a", "v0.9.0", "v1.0.0+b"]);
        match latest_tag_version(&repo, "v") {
            Err(ReleaseStampError::AmbiguousVersion { tags, .. }) => {
                assert_eq!(tags, vec!["v1.0.0+a".to_string(), "v1.0.0+b".to_string()]);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_lower_tie_is_not_ambiguous() {
        let repo = tagged_repo("main", &["v1.0.0+a", "v1.0.0+b", "v1.1.0"]);
        assert_eq!(latest_tag_version(&repo, "v").unwrap(), Version::new(1, 1, 0));
    }

    #[test]
    fn test_expects_release() {
        assert!(expects_release("main", "v"));
        assert!(expects_release("release/1.2.3", "v"));
        assert!(expects_release("hotfix/crash", "v"));
        assert!(expects_release("v1.2.3", "v"));
        assert!(!expects_release("feature/x", "v"));
        assert!(!expects_release("develop", "v"));
    }

    #[test]
    fn test_check_version_clean() {
        let repo = tagged_repo("main", &["v0.0.1", "v0.0.2"]);
        let artifact = VersionArtifact::new(VersionTriple::new(0, 0, 2), true);
        assert!(check_version(&repo, &artifact, "v").unwrap().is_empty());
    }

    #[test]
    fn test_check_version_mismatch() {
        let repo = tagged_repo("main", &["v1.3.0"]);
        let artifact = VersionArtifact::new(VersionTriple::new(0, 0, 2), true);
        let findings = check_version(&repo, &artifact, "v").unwrap();

        assert_eq!(findings.len(), 3);
        assert!(findings.contains(&VerifyFinding::Major {
            expected: 1,
            found: 0
        }));
    }

    #[test]
    fn test_check_released_feature_branch_develop() {
        let repo = tagged_repo("feature/x", &[]);
        let artifact = VersionArtifact::new(VersionTriple::new(0, 0, 2), false);
        assert!(check_released(&repo, &artifact, "v").unwrap().is_empty());
    }

    #[test]
    fn test_check_released_flags_tag_only_release() {
        // released because a tag sits on HEAD, but the branch is not a release branch
        let repo = tagged_repo("feature/x", &[]);
        let artifact = VersionArtifact::new(VersionTriple::new(0, 0, 2), true);
        let findings = check_released(&repo, &artifact, "v").unwrap();

        assert_eq!(
            findings,
            vec![
                VerifyFinding::ReleasedFlag {
                    branch: "feature/x".to_string(),
                    expected: false,
                    found: true,
                },
                VerifyFinding::Prerelease {
                    branch: "feature/x".to_string(),
                    expected: Some("develop".to_string()),
                    found: None,
                },
            ]
        );
    }

    #[test]
    fn test_check_released_unparsable_full_version() {
        let repo = tagged_repo("main", &[]);
        let mut artifact = VersionArtifact::new(VersionTriple::new(0, 0, 2), true);
        artifact.full_version = "0.0".to_string();

        let findings = check_released(&repo, &artifact, "v").unwrap();
        assert!(matches!(
            findings.as_slice(),
            [VerifyFinding::UnparsableFullVersion { .. }]
        ));
    }

    #[test]
    fn test_verify_report() {
        let repo = tagged_repo("release/0.0", &["v0.0.2"]);
        let artifact = VersionArtifact::new(VersionTriple::new(0, 0, 2), true);
        let report = verify(&repo, &artifact, "v").unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_finding_display() {
        let finding = VerifyFinding::ReleasedFlag {
            branch: "feature/x".to_string(),
            expected: false,
            found: true,
        };
        assert_eq!(
            finding.to_string(),
            "is_released is true on branch 'feature/x', expected false"
        );
    }
}
