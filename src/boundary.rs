use std::fmt;

/// Warnings that occur while classifying a checkout.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// HEAD is not on a branch, so only tags can mark it as released
    DetachedHead { current_commit_hash: String },
    /// Released only because tags point at HEAD; the verifier will disagree
    /// unless the branch is a release branch
    ReleasedByTagOnly { branch: String, tags: Vec<String> },
    /// An explicit release flag replaced the one derived from the repository
    ReleasedFlagOverridden { derived: bool, requested: bool },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::DetachedHead {
                current_commit_hash,
            } => {
                let short_hash = if current_commit_hash.len() > 7 {
                    &current_commit_hash[..7]
                } else {
                    current_commit_hash.as_str()
                };
                write!(f, "HEAD is detached at {}", short_hash)
            }
            BoundaryWarning::ReleasedByTagOnly { branch, tags } => {
                write!(
                    f,
                    "Branch '{}' is treated as released because of tag(s) {}",
                    branch,
                    tags.join(", ")
                )
            }
            BoundaryWarning::ReleasedFlagOverridden { derived, requested } => {
                write!(
                    f,
                    "Release flag overridden to {} (repository says {})",
                    requested, derived
                )
            }
        }
    }
}
