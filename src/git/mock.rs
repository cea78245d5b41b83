use crate::domain::Reference;
use crate::error::{ReleaseStampError, Result};
use crate::git::{HeadRef, Repository};
use git2::Oid;

/// Mock repository for testing without actual git operations
///
/// References are kept in insertion order, which is the order
/// [Repository::reference_names] reports them in.
pub struct MockRepository {
    references: Vec<Reference>,
    head: Option<HeadRef>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            references: Vec::new(),
            head: None,
        }
    }

    /// Add a branch pointing to an OID
    pub fn add_branch(&mut self, name: impl AsRef<str>, oid: Oid) {
        self.add_reference(format!("refs/heads/{}", name.as_ref()), oid);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl AsRef<str>, oid: Oid) {
        self.add_reference(format!("refs/tags/{}", name.as_ref()), oid);
    }

    /// Add an arbitrary fully-qualified reference
    pub fn add_reference(&mut self, name: impl Into<String>, oid: Oid) {
        self.references.push(Reference::new(name, oid));
    }

    /// Every reference added so far, in insertion order
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Check out a branch, creating it at `oid`
    pub fn checkout_branch(&mut self, name: impl AsRef<str>, oid: Oid) {
        let full_name = format!("refs/heads/{}", name.as_ref());
        if !self.references.iter().any(|r| r.name == full_name) {
            self.add_reference(full_name.clone(), oid);
        }
        self.head = Some(HeadRef {
            name: full_name,
            target: oid,
        });
    }

    /// Detach HEAD at a commit
    pub fn detach_head(&mut self, oid: Oid) {
        self.head = Some(HeadRef {
            name: "HEAD".to_string(),
            target: oid,
        });
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn reference_names(&self) -> Result<Vec<String>> {
        Ok(self.references.iter().map(|r| r.name.clone()).collect())
    }

    fn resolve_commit(&self, refish: &str) -> Result<Oid> {
        self.references
            .iter()
            .find(|r| r.name == refish)
            .or_else(|| self.references.iter().find(|r| r.short_name() == refish))
            .map(|r| r.target)
            .ok_or_else(|| {
                ReleaseStampError::Git(git2::Error::from_str(&format!(
                    "revspec '{}' not found",
                    refish
                )))
            })
    }

    fn head(&self) -> Result<HeadRef> {
        self.head
            .clone()
            .ok_or_else(|| ReleaseStampError::head("HEAD does not point to a commit"))
    }
}
