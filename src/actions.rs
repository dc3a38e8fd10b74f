//! GitHub Actions platform I/O.
//!
//! Everything the runner hands us (context, inputs) and everything we hand
//! back (step outputs, failure signal) goes through this module so the core
//! never touches the environment directly.

use crate::error::{AffectedBaseError, Result};
use crate::logger;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;

/// Identity of the current workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubContext {
    pub run_id: u64,
    pub owner: String,
    pub repo: String,
}

/// Action inputs, as the runner exposes them (`INPUT_<NAME>` variables).
/// Unset inputs stay `None` so file-config defaults can apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInputs {
    pub main_branch_name: Option<String>,
    pub version_bump_commit_message_summary_matcher: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Read the run context from the runner environment
pub fn github_context() -> Result<GithubContext> {
    let run_id = non_empty_var("GITHUB_RUN_ID")
        .ok_or_else(|| AffectedBaseError::config("GITHUB_RUN_ID is not set"))?
        .parse::<u64>()
        .map_err(|e| AffectedBaseError::config(format!("Cannot parse GITHUB_RUN_ID: {}", e)))?;

    let repository = non_empty_var("GITHUB_REPOSITORY")
        .ok_or_else(|| AffectedBaseError::config("GITHUB_REPOSITORY is not set"))?;

    let (owner, repo) = repository.split_once('/').ok_or_else(|| {
        AffectedBaseError::config(format!(
            "GITHUB_REPOSITORY must be 'owner/repo', got '{}'",
            repository
        ))
    })?;

    if owner.is_empty() || repo.is_empty() {
        return Err(AffectedBaseError::config(format!(
            "GITHUB_REPOSITORY must be 'owner/repo', got '{}'",
            repository
        )));
    }

    Ok(GithubContext {
        run_id,
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

/// Read the declared action inputs from the runner environment
pub fn action_inputs() -> ActionInputs {
    ActionInputs {
        main_branch_name: non_empty_var("INPUT_MAIN-BRANCH-NAME"),
        version_bump_commit_message_summary_matcher: non_empty_var(
            "INPUT_VERSION-BUMP-COMMIT-MESSAGE-SUMMARY-MATCHER",
        ),
    }
}

/// The symbolic ref of the current checkout, when the runner provides one
pub fn github_ref() -> Option<String> {
    non_empty_var("GITHUB_REF")
}

/// Write a step output by appending to the file named in `GITHUB_OUTPUT`
pub fn set_output(name: &str, value: &str) -> Result<()> {
    let path = non_empty_var("GITHUB_OUTPUT")
        .ok_or_else(|| AffectedBaseError::config("GITHUB_OUTPUT is not set"))?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", name, value)?;

    Ok(())
}

/// Signal platform-level failure. The caller is responsible for exiting
/// non-zero without writing any outputs.
pub fn set_failed(message: &str) {
    logger::error(message);
}
