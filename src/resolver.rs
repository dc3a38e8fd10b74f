//! Base-commit resolution.
//!
//! Picks the commit that affected analysis should diff against. On the
//! configured main branch the base is the last commit this workflow
//! succeeded on (per the CI provider's run history, filtered to commits the
//! local clone actually has); on any other branch it is the fork point from
//! `origin/<main>`. Both answers are then nudged past an immediately
//! following version-bump commit when one exists.

use crate::actions::GithubContext;
use crate::branch::BranchContext;
use crate::bump::adjust_base_past_version_bump;
use crate::error::Result;
use crate::git::Repository;
use crate::logger;
use crate::provider::RunHistory;
use regex::Regex;

/// Resolve the base commit for the current checkout.
///
/// Provider errors on the main-branch path are fatal; a provider with no
/// usable history is not, and falls back to `HEAD~1` with a warning.
pub fn resolve_base(
    repo: &dyn Repository,
    runs: &dyn RunHistory,
    ctx: &GithubContext,
    branch: &BranchContext,
    main_branch_name: &str,
    bump_matcher: Option<&Regex>,
) -> Result<String> {
    if branch.is_main {
        resolve_base_for_main_branch(repo, runs, ctx, main_branch_name, bump_matcher)
    } else {
        let fork_point = repo.merge_base_with_remote(main_branch_name)?;
        Ok(adjust_base_past_version_bump(repo, &fork_point, bump_matcher))
    }
}

fn resolve_base_for_main_branch(
    repo: &dyn Repository,
    runs: &dyn RunHistory,
    ctx: &GithubContext,
    main_branch_name: &str,
    bump_matcher: Option<&Regex>,
) -> Result<String> {
    let workflow_id =
        runs.workflow_id_for_run(ctx.run_id, &ctx.owner, &ctx.repo, main_branch_name)?;
    logger::debug(&format!("Workflow id: {}", workflow_id));

    let candidates =
        runs.successful_push_run_shas(workflow_id, &ctx.owner, &ctx.repo, main_branch_name)?;
    logger::debug(&format!(
        "Successful push runs on 'origin/{}': {}",
        main_branch_name,
        candidates.len()
    ));

    // First candidate present in the local object store wins; provider
    // ordering is trusted as-is. Shallow clones may be missing older ones.
    match candidates.iter().find(|sha| repo.commit_exists(sha)) {
        Some(sha) => Ok(adjust_base_past_version_bump(repo, sha, bump_matcher)),
        None => {
            logger::warning(&format!(
                "Unable to find a successful workflow run on 'origin/{}'",
                main_branch_name
            ));
            logger::warning(&format!(
                "We are therefore defaulting to use HEAD~1 on 'origin/{}'",
                main_branch_name
            ));

            repo.head_parent_sha()
        }
    }
}
