use crate::error::{AffectedBaseError, Result};
use crate::provider::RunHistory;
use serde::Deserialize;
use std::env;

const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub Actions REST client for workflow-run history.
///
/// Talks to the `actions/runs` and `actions/workflows/{id}/runs` endpoints
/// with blocking requests; the whole resolution is one sequential pipeline,
/// so there is nothing to overlap.
pub struct GithubRunsClient {
    http: reqwest::blocking::Client,
    api_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WorkflowRunResponse {
    workflow_id: u64,
}

#[derive(Debug, Deserialize)]
struct WorkflowRunsResponse {
    workflow_runs: Vec<WorkflowRunEntry>,
}

#[derive(Debug, Deserialize)]
struct WorkflowRunEntry {
    head_sha: String,
}

impl GithubRunsClient {
    /// Build a client from the Actions runner environment.
    ///
    /// Uses `GITHUB_API_URL` when set (GitHub Enterprise) and authenticates
    /// with `GITHUB_TOKEN` when present.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        Self::new(api_url, token)
    }

    /// Build a client against an explicit API base URL
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("affected-base/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AffectedBaseError::provider(format!("Cannot build HTTP client: {}", e)))?;

        Ok(GithubRunsClient {
            http,
            api_url: api_url.into(),
            token,
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut request = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .query(query);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| AffectedBaseError::provider(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AffectedBaseError::provider(format!(
                "GET {} returned {}: {}",
                url, status, body
            )));
        }

        response.json().map_err(|e| {
            AffectedBaseError::provider(format!("Cannot decode response from {}: {}", url, e))
        })
    }
}

impl RunHistory for GithubRunsClient {
    fn workflow_id_for_run(
        &self,
        run_id: u64,
        owner: &str,
        repo: &str,
        _branch: &str,
    ) -> Result<u64> {
        let url = format!("{}/repos/{}/{}/actions/runs/{}", self.api_url, owner, repo, run_id);
        let run: WorkflowRunResponse = self.get_json(&url, &[])?;

        Ok(run.workflow_id)
    }

    fn successful_push_run_shas(
        &self,
        workflow_id: u64,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Vec<String>> {
        let url = format!(
            "{}/repos/{}/{}/actions/workflows/{}/runs",
            self.api_url, owner, repo, workflow_id
        );
        let query = [
            ("branch", branch.to_string()),
            ("event", "push".to_string()),
            ("status", "success".to_string()),
        ];
        let runs: WorkflowRunsResponse = self.get_json(&url, &query)?;

        Ok(runs.workflow_runs.into_iter().map(|r| r.head_sha).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_without_token() {
        let client = GithubRunsClient::new("https://api.github.com", None);
        assert!(client.is_ok());
    }

    #[test]
    fn test_workflow_run_response_decodes() {
        let body = r#"{"id": 42, "workflow_id": 7, "head_sha": "abc"}"#;
        let run: WorkflowRunResponse = serde_json::from_str(body).unwrap();
        assert_eq!(run.workflow_id, 7);
    }

    #[test]
    fn test_workflow_runs_response_preserves_order() {
        let body = r#"{
            "total_count": 2,
            "workflow_runs": [
                {"head_sha": "shaA", "event": "push", "status": "completed"},
                {"head_sha": "shaB", "event": "push", "status": "completed"}
            ]
        }"#;
        let runs: WorkflowRunsResponse = serde_json::from_str(body).unwrap();
        let shas: Vec<_> = runs.workflow_runs.into_iter().map(|r| r.head_sha).collect();
        assert_eq!(shas, vec!["shaA", "shaB"]);
    }
}
