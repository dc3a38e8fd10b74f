//! Branch classification from the CI-provided symbolic ref.

use crate::error::{AffectedBaseError, Result};

const HEADS_PREFIX: &str = "refs/heads/";

/// Extract the branch name from a `refs/heads/<name>` ref string.
///
/// The ref comes from the CI environment (`GITHUB_REF`). Absent or empty
/// input and refs outside the heads namespace (tags, pull request merge
/// refs, detached checkouts) are errors, never defaulted.
pub fn branch_name_from_ref(current_ref: Option<&str>) -> Result<String> {
    let current_ref = match current_ref {
        Some(r) if !r.is_empty() => r,
        _ => return Err(AffectedBaseError::MissingRef),
    };

    match current_ref.strip_prefix(HEADS_PREFIX) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(AffectedBaseError::MalformedRef(current_ref.to_string())),
    }
}

/// A classified branch with its relation to the configured main branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_main: bool,
}

impl BranchContext {
    /// Classify a branch name against the configured main branch name.
    /// Comparison is exact string equality, no case folding.
    pub fn new(name: impl Into<String>, main_branch_name: &str) -> Self {
        let name = name.into();
        let is_main = name == main_branch_name;

        BranchContext { name, is_main }
    }
}
