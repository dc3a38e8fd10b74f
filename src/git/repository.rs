use crate::error::{AffectedBaseError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn head_commit(&self) -> Result<git2::Commit<'_>> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit)
    }
}

impl super::Repository for Git2Repository {
    fn head_sha(&self) -> Result<String> {
        Ok(self.head_commit()?.id().to_string())
    }

    fn head_parent_sha(&self) -> Result<String> {
        let head = self.head_commit()?;
        let parent = head.parent(0).map_err(|e| {
            AffectedBaseError::Git(git2::Error::from_str(&format!(
                "HEAD has no parent commit: {}",
                e
            )))
        })?;

        Ok(parent.id().to_string())
    }

    fn merge_base_with_remote(&self, main_branch_name: &str) -> Result<String> {
        let remote_ref = format!("refs/remotes/origin/{}", main_branch_name);
        let remote_oid = self
            .repo
            .find_reference(&remote_ref)
            .and_then(|r| r.peel_to_commit())
            .map_err(|e| {
                AffectedBaseError::Git(git2::Error::from_str(&format!(
                    "Cannot resolve '{}': {}",
                    remote_ref, e
                )))
            })?
            .id();

        let head_oid = self.head_commit()?.id();
        let base = self.repo.merge_base(remote_oid, head_oid)?;

        Ok(base.to_string())
    }

    fn earliest_child_of(&self, parent_sha: &str) -> Result<Option<String>> {
        let parent_oid = Oid::from_str(parent_sha)?;
        let head_oid = self.head_commit()?.id();

        // Walk HEAD ^parent oldest-first and return the first commit whose
        // parent list contains the candidate.
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        revwalk.push(head_oid)?;
        revwalk.hide(parent_oid)?;

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            if commit.parent_ids().any(|p| p == parent_oid) {
                return Ok(Some(oid.to_string()));
            }
        }

        Ok(None)
    }

    fn commit_subject(&self, sha: &str) -> Result<String> {
        let oid = Oid::from_str(sha)?;
        let commit = self.repo.find_commit(oid)?;

        Ok(commit.summary().unwrap_or("").to_string())
    }

    fn commit_exists(&self, sha: &str) -> bool {
        match Oid::from_str(sha) {
            Ok(oid) => self.repo.find_commit(oid).is_ok(),
            Err(_) => false,
        }
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git2_repository_open_discovers_or_fails_gracefully() {
        let result = Git2Repository::open(".");
        let _ = result;
    }

    #[test]
    fn test_commit_exists_rejects_malformed_sha() {
        if let Ok(repo) = Git2Repository::open(".") {
            use crate::git::Repository;
            assert!(!repo.commit_exists("not-a-sha"));
        }
    }
}
