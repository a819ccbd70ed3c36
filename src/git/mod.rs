//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries semver-bump needs, allowing for a real implementation backed by
//! `git2` and an in-memory mock for testing.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations.
//!
//! ```rust,no_run
//! # use semver_bump::git::{Git2Repository, Repository};
//! # fn example() -> semver_bump::Result<()> {
//! let repo = Git2Repository::open(".")?;
//! let tags = repo.list_tags()?;
//! let messages = repo.list_commit_messages(None)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Tag;
use crate::error::Result;

/// Read-only view of the repository history
///
/// Implementations never write commits or tags.
pub trait Repository {
    /// Get commit messages reachable from HEAD
    ///
    /// When `since_tag` is given, commits reachable from that tag are
    /// excluded. Messages are trimmed of surrounding whitespace. Ordering is
    /// newest first but carries no meaning for the analysis.
    ///
    /// # Arguments
    /// * `since_tag` - Raw tag name to exclude history from (e.g., "v1.2.3")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Commit messages, empty for a repository without commits
    /// * `Err` - If the tag cannot be resolved or there's a Git error
    fn list_commit_messages(&self, since_tag: Option<&str>) -> Result<Vec<String>>;

    /// Get all tags with the timestamp of the commit they point at
    ///
    /// Both lightweight and annotated tags are returned. The order of the
    /// result is unspecified.
    fn list_tags(&self) -> Result<Vec<Tag>>;
}
