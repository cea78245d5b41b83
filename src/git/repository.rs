use crate::error::{ReleaseStampError, Result};
use crate::git::HeadRef;
use git2::Repository as Git2Repo;
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened git repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn reference_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for reference in self.repo.references()? {
            let reference = reference?;
            if let Some(name) = reference.name() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    fn resolve_commit(&self, refish: &str) -> Result<git2::Oid> {
        let commit = self.repo.revparse_single(refish)?.peel_to_commit()?;

        Ok(commit.id())
    }

    fn head(&self) -> Result<HeadRef> {
        let head = self.repo.head()?;

        let name = head
            .name()
            .ok_or_else(|| ReleaseStampError::head("HEAD name is not valid UTF-8"))?
            .to_string();
        let target = head.peel_to_commit()?.id();

        Ok(HeadRef { name, target })
    }
}
