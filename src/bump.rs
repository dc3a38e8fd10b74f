//! Version-bump adjustment of a candidate base commit.
//!
//! On the main branch an automated release process may commit a version
//! bump immediately after the commit a workflow last succeeded on. Affected
//! analysis should start after that bump, otherwise the bump's own changes
//! show up as affected on every subsequent run.

use crate::git::Repository;
use crate::logger;
use regex::Regex;

/// Move `candidate` one commit forward when its earliest child is a
/// version-bump commit.
///
/// Inspects only the immediate earliest child of `candidate` within the
/// range reachable from HEAD; a chain of consecutive bump commits is not
/// walked. Never fails: when the candidate has no child in range, the
/// child's subject does not match, or any underlying git query errors, the
/// candidate is returned unchanged.
pub fn adjust_base_past_version_bump<R: Repository + ?Sized>(
    repo: &R,
    candidate: &str,
    matcher: Option<&Regex>,
) -> String {
    let matcher = match matcher {
        Some(m) => m,
        None => return candidate.to_string(),
    };

    let child_sha = match repo.earliest_child_of(candidate) {
        Ok(Some(sha)) => sha,
        Ok(None) => {
            logger::debug(&format!(
                "Failed to find a child for commit {}, for which this workflow was last successfully run.",
                candidate
            ));
            return candidate.to_string();
        }
        Err(e) => {
            logger::debug(&format!(
                "Child lookup for commit {} failed ({}); keeping it as the base.",
                candidate, e
            ));
            return candidate.to_string();
        }
    };

    logger::debug(&format!(
        "Found a child for commit {}, for which this workflow was last successfully run. Child commit SHA: {}",
        candidate, child_sha
    ));

    let subject = match repo.commit_subject(&child_sha) {
        Ok(subject) => subject,
        Err(e) => {
            logger::debug(&format!(
                "Subject lookup for commit {} failed ({}); keeping {} as the base.",
                child_sha, e, candidate
            ));
            return candidate.to_string();
        }
    };

    if matcher.is_match(&subject) {
        logger::debug(&format!(
            "Commit {} is a version bump commit. It will therefore be used as the base commit for affected comparison.",
            child_sha
        ));
        child_sha
    } else {
        logger::debug(&format!(
            "Commit {} is not a version bump commit. Pattern used for matching version bump commits: '{}'",
            child_sha, matcher
        ));
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    fn bump_matcher() -> Regex {
        Regex::new(r"^chore\(release\)").unwrap()
    }

    fn history_with_bump_child() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.add_commit("base", &[], "feat: last green commit");
        repo.add_commit("bump", &["base"], "chore(release): 1.2.0");
        repo.add_commit("next", &["bump"], "feat: new work");
        repo.set_head("next");
        repo
    }

    #[test]
    fn test_replaces_candidate_with_matching_child() {
        let repo = history_with_bump_child();
        let matcher = bump_matcher();
        let base = adjust_base_past_version_bump(&repo, "base", Some(&matcher));
        assert_eq!(base, "bump");
    }

    #[test]
    fn test_keeps_candidate_for_non_matching_child() {
        let mut repo = MockRepository::new();
        repo.add_commit("base", &[], "feat: last green commit");
        repo.add_commit("child", &["base"], "fix: unrelated");
        repo.set_head("child");

        let matcher = bump_matcher();
        let base = adjust_base_past_version_bump(&repo, "base", Some(&matcher));
        assert_eq!(base, "base");
    }

    #[test]
    fn test_no_op_without_children() {
        let mut repo = MockRepository::new();
        repo.add_commit("base", &[], "feat: tip of history");
        repo.set_head("base");

        let matcher = bump_matcher();
        let base = adjust_base_past_version_bump(&repo, "base", Some(&matcher));
        assert_eq!(base, "base");
    }

    #[test]
    fn test_only_first_child_is_inspected() {
        // Two consecutive bump commits: only one step is taken.
        let mut repo = MockRepository::new();
        repo.add_commit("base", &[], "feat: last green commit");
        repo.add_commit("bump1", &["base"], "chore(release): 1.2.0");
        repo.add_commit("bump2", &["bump1"], "chore(release): 1.2.1");
        repo.set_head("bump2");

        let matcher = bump_matcher();
        let base = adjust_base_past_version_bump(&repo, "base", Some(&matcher));
        assert_eq!(base, "bump1");
    }

    #[test]
    fn test_disabled_matcher_is_no_op() {
        let repo = history_with_bump_child();
        let base = adjust_base_past_version_bump(&repo, "base", None);
        assert_eq!(base, "base");
    }

    #[test]
    fn test_earliest_child_wins_over_later_siblings() {
        // Two children of the same parent: the oldest one decides.
        let mut repo = MockRepository::new();
        repo.add_commit("base", &[], "feat: last green commit");
        repo.add_commit("older", &["base"], "chore(release): 1.2.0");
        repo.add_commit("merge", &["older", "base"], "Merge branch 'x'");
        repo.set_head("merge");

        let matcher = bump_matcher();
        let base = adjust_base_past_version_bump(&repo, "base", Some(&matcher));
        assert_eq!(base, "older");
    }
}
