//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only Git
//! operations release-stamp needs, allowing for multiple implementations
//! including real Git repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! Classification and verification take the repository as an explicit
//! parameter, so most code should depend on the [Repository] trait rather
//! than on a concrete implementation.
//!
//! ```rust
//! # use release_stamp::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let head = repo.head()?;
//! let names = repo.reference_names()?;
//! println!("{} at {} ({} refs)", head.name, head.target, names.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// The checked-out reference and the commit it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadRef {
    /// Fully-qualified reference name (e.g., "refs/heads/main", or "HEAD" when detached)
    pub name: String,
    /// The commit HEAD points at
    pub target: Oid,
}

impl HeadRef {
    /// HEAD points straight at a commit instead of a branch
    pub fn is_detached(&self) -> bool {
        self.name == "HEAD"
    }
}

/// Read-only git operations used to classify a checkout
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map the
/// underlying errors (like `git2::Error`) to
/// [crate::error::ReleaseStampError] variants and never recover from them:
/// a broken repository aborts the invocation.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation with in-memory references
pub trait Repository {
    /// Get every reference in the repository
    ///
    /// Returns fully-qualified names (e.g., "refs/heads/main",
    /// "refs/tags/v1.0.0") in the order the repository enumerates them.
    fn reference_names(&self) -> Result<Vec<String>>;

    /// Resolve a reference or revision expression to a commit
    ///
    /// Annotated tags are peeled to the commit they tag.
    ///
    /// # Arguments
    /// * `refish` - A short or fully-qualified reference name, or any revision expression
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the resolved commit
    /// * `Err` - If the expression does not resolve to a commit
    fn resolve_commit(&self, refish: &str) -> Result<Oid>;

    /// Get the checked-out reference and its target commit
    ///
    /// # Returns
    /// * `Ok(HeadRef)` - HEAD's reference name and commit
    /// * `Err` - If HEAD is unborn or cannot be read
    fn head(&self) -> Result<HeadRef>;
}
