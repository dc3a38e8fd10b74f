//! Git query abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries that base resolution needs, allowing for multiple implementations
//! including real Git repositories and mock implementations for testing.
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations so the resolver can be exercised without a live repository.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only git queries used during base resolution.
///
/// Commit identifiers are opaque hex strings; equality is exact string
/// match and no parsing is performed beyond what an implementation needs
/// internally.
///
/// All methods except [Repository::commit_exists] fail loudly when the
/// repository cannot answer (detached state, shallow clone missing
/// objects, unknown SHA); those errors propagate as resolution failures.
pub trait Repository: Send + Sync {
    /// SHA of the current HEAD commit
    fn head_sha(&self) -> Result<String>;

    /// SHA of the first parent of HEAD (`HEAD~1`)
    fn head_parent_sha(&self) -> Result<String>;

    /// Merge-base (lowest common ancestor) of HEAD and the remote
    /// tracking branch `origin/<main_branch_name>`
    fn merge_base_with_remote(&self, main_branch_name: &str) -> Result<String>;

    /// Earliest child of `parent_sha` among commits reachable from HEAD
    /// but not from `parent_sha`, in oldest-to-newest order.
    ///
    /// Returns `Ok(None)` when no commit in that range lists `parent_sha`
    /// as a direct parent (the commit is HEAD itself, or HEAD's history
    /// does not pass through it).
    fn earliest_child_of(&self, parent_sha: &str) -> Result<Option<String>>;

    /// First line (subject) of the commit message for `sha`
    fn commit_subject(&self, sha: &str) -> Result<String>;

    /// Whether `sha` denotes a commit present in the local object store.
    ///
    /// This is a membership test, not an error path: unknown or malformed
    /// SHAs return `false`.
    fn commit_exists(&self, sha: &str) -> bool;
}
