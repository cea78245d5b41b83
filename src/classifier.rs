//! Reference classification - decides whether the checkout is a release
//!
//! A checkout counts as released when HEAD is on one of the main branches
//! (master, main, trunk) or when HEAD's commit is the target of any tag.

use std::collections::HashMap;
use std::path::Path;

use git2::Oid;
use tracing::debug;

use crate::domain::reference::{is_tag_reference, short_name};
use crate::domain::BranchContext;
use crate::error::Result;
use crate::git::{Git2Repository, HeadRef, Repository};

/// Short names of every tag in the repository, in reference order.
pub fn list_tags(repo: &impl Repository) -> Result<Vec<String>> {
    Ok(repo
        .reference_names()?
        .iter()
        .filter(|name| is_tag_reference(name))
        .map(|name| short_name(name))
        .collect())
}

/// Map each tagged commit to the names of the tags pointing at it.
///
/// Tags are resolved through the repository's refish resolution, so
/// annotated tags map to the commit they tag. Resolution failures propagate.
pub fn tagged_commits(repo: &impl Repository) -> Result<HashMap<Oid, Vec<String>>> {
    let mut commits: HashMap<Oid, Vec<String>> = HashMap::new();

    for tag in list_tags(repo)? {
        let oid = repo.resolve_commit(&tag)?;
        commits.entry(oid).or_default().push(tag);
    }

    Ok(commits)
}

/// Why a checkout is (or is not) considered released
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseClassification {
    pub head: HeadRef,
    pub branch: BranchContext,
    /// Tags whose target is HEAD's commit
    pub head_tags: Vec<String>,
    pub is_released: bool,
}

impl ReleaseClassification {
    /// Released only because a tag points at HEAD, not because of the branch
    pub fn released_by_tag_only(&self) -> bool {
        self.is_released && !self.branch.is_main
    }
}

/// Classify HEAD against the main branches and the tagged commits.
pub fn classify(repo: &impl Repository) -> Result<ReleaseClassification> {
    let head = repo.head()?;
    let branch = BranchContext::new(short_name(&head.name));

    let mut head_tags = tagged_commits(repo)?
        .remove(&head.target)
        .unwrap_or_default();
    head_tags.sort();

    let is_released = branch.is_main || !head_tags.is_empty();

    debug!(
        head = %head.name,
        commit = %head.target,
        on_main = branch.is_main,
        tags = ?head_tags,
        is_released,
        "classified checkout"
    );

    Ok(ReleaseClassification {
        head,
        branch,
        head_tags,
        is_released,
    })
}

/// Whether the checkout is on a main branch or on a tagged commit.
pub fn is_released(repo: &impl Repository) -> Result<bool> {
    Ok(classify(repo)?.is_released)
}

/// Open the repository at `path` and run [is_released] on it.
pub fn is_released_at(path: impl AsRef<Path>) -> Result<bool> {
    let repo = Git2Repository::open(path)?;
    is_released(&repo)
}
