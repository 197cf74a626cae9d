//! Git operations abstraction layer
//!
//! This module provides a trait-based, read-only abstraction over the
//! version-control history that release notes are generated from.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use git_release_notes::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let commits = repo.commits("main", 10)?;
//! let tags = repo.tags()?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod remote;
pub mod repository;

pub use mock::MockRepository;
pub use remote::normalize_remote_url;
pub use repository::Git2Repository;

pub use crate::domain::CommitInfo;
use crate::domain::Tag;
use crate::error::Result;

/// Read-only view of a version-control repository
///
/// ## Error Handling
///
/// Failing to read history is fatal and reported as
/// [crate::error::ReleaseNotesError::Repository] or
/// [crate::error::ReleaseNotesError::Git]. Missing optional metadata
/// (no remote, unreadable tag) is not an error.
pub trait Repository {
    /// Get up to `max_count` commits reachable from `branch`
    ///
    /// # Returns
    /// * `Ok(Vec<CommitInfo>)` - Commits ordered newest first
    /// * `Err` - If the branch cannot be resolved or history cannot be read
    fn commits(&self, branch: &str, max_count: usize) -> Result<Vec<CommitInfo>>;

    /// Get every tag together with the commit it points to
    ///
    /// Tags that cannot be resolved to a commit are skipped.
    fn tags(&self) -> Result<Vec<Tag>>;

    /// Get the configured URL of a remote, as written in the git config
    ///
    /// # Returns
    /// * `Ok(Some(url))` - The remote exists and has a URL
    /// * `Ok(None)` - No such remote
    fn remote_url(&self, remote: &str) -> Result<Option<String>>;
}
