//! CI run-history provider abstraction
//!
//! The main-branch strategy needs two remote queries: resolving the
//! workflow id that the current run belongs to, and listing the head SHAs
//! of that workflow's past successful push runs. Both are network-bound
//! and abstracted behind [RunHistory] so the resolver can be tested
//! against scripted fakes.

pub mod github;
pub mod mock;

pub use github::GithubRunsClient;
pub use mock::MockRunHistory;

use crate::error::Result;

/// Historical workflow-run queries against the CI provider.
///
/// Errors from either method are fatal to main-branch resolution; they are
/// propagated, never silently defaulted, because a guessed base could be
/// misleading.
pub trait RunHistory: Send + Sync {
    /// Workflow id that the given run belongs to
    fn workflow_id_for_run(&self, run_id: u64, owner: &str, repo: &str, branch: &str)
        -> Result<u64>;

    /// Head SHAs of successful push-triggered runs of the workflow on the
    /// given branch, in provider order (most relevant first). The resolver
    /// trusts this ordering and does not re-sort.
    fn successful_push_run_shas(
        &self,
        workflow_id: u64,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Vec<String>>;
}
