use crate::error::{AffectedBaseError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// A single commit in the mock history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCommit {
    pub sha: String,
    pub parents: Vec<String>,
    pub subject: String,
}

/// Mock repository for testing without actual git operations.
///
/// Commits are held in insertion order, which the mock treats as
/// oldest-first history order for child lookups.
pub struct MockRepository {
    commits: Vec<MockCommit>,
    head: Option<String>,
    merge_bases: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            head: None,
            merge_bases: HashMap::new(),
        }
    }

    /// Add a commit to the mock history (oldest-first order)
    pub fn add_commit(
        &mut self,
        sha: impl Into<String>,
        parents: &[&str],
        subject: impl Into<String>,
    ) {
        self.commits.push(MockCommit {
            sha: sha.into(),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            subject: subject.into(),
        });
    }

    /// Set the current HEAD commit
    pub fn set_head(&mut self, sha: impl Into<String>) {
        self.head = Some(sha.into());
    }

    /// Set the merge-base answer for a given main branch name
    pub fn set_merge_base(&mut self, main_branch_name: impl Into<String>, sha: impl Into<String>) {
        self.merge_bases.insert(main_branch_name.into(), sha.into());
    }

    fn find(&self, sha: &str) -> Option<&MockCommit> {
        self.commits.iter().find(|c| c.sha == sha)
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_sha(&self) -> Result<String> {
        self.head
            .clone()
            .ok_or_else(|| AffectedBaseError::config("Mock repository has no HEAD"))
    }

    fn head_parent_sha(&self) -> Result<String> {
        let head = self.head_sha()?;
        let commit = self
            .find(&head)
            .ok_or_else(|| AffectedBaseError::config(format!("Unknown HEAD commit: {}", head)))?;

        commit
            .parents
            .first()
            .cloned()
            .ok_or_else(|| AffectedBaseError::config("HEAD has no parent commit"))
    }

    fn merge_base_with_remote(&self, main_branch_name: &str) -> Result<String> {
        self.merge_bases
            .get(main_branch_name)
            .cloned()
            .ok_or_else(|| {
                AffectedBaseError::config(format!(
                    "No merge-base configured for 'origin/{}'",
                    main_branch_name
                ))
            })
    }

    fn earliest_child_of(&self, parent_sha: &str) -> Result<Option<String>> {
        Ok(self
            .commits
            .iter()
            .find(|c| c.parents.iter().any(|p| p == parent_sha))
            .map(|c| c.sha.clone()))
    }

    fn commit_subject(&self, sha: &str) -> Result<String> {
        self.find(sha)
            .map(|c| c.subject.clone())
            .ok_or_else(|| AffectedBaseError::config(format!("Unknown commit: {}", sha)))
    }

    fn commit_exists(&self, sha: &str) -> bool {
        self.find(sha).is_some()
    }
}
