use crate::error::{AffectedBaseError, Result};
use crate::provider::RunHistory;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted run-history provider for tests.
///
/// Counts every query it receives so tests can assert that the
/// feature-branch path never touches the provider.
pub struct MockRunHistory {
    workflow_id: u64,
    run_shas: Vec<String>,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockRunHistory {
    /// Provider that answers with the given workflow id and run SHAs
    pub fn with_runs(workflow_id: u64, run_shas: &[&str]) -> Self {
        MockRunHistory {
            workflow_id,
            run_shas: run_shas.iter().map(|s| s.to_string()).collect(),
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider whose every query fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        MockRunHistory {
            workflow_id: 0,
            run_shas: Vec::new(),
            fail_with: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of queries received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(AffectedBaseError::provider(message.clone())),
            None => Ok(()),
        }
    }
}

impl RunHistory for MockRunHistory {
    fn workflow_id_for_run(
        &self,
        _run_id: u64,
        _owner: &str,
        _repo: &str,
        _branch: &str,
    ) -> Result<u64> {
        self.record_call()?;
        Ok(self.workflow_id)
    }

    fn successful_push_run_shas(
        &self,
        _workflow_id: u64,
        _owner: &str,
        _repo: &str,
        _branch: &str,
    ) -> Result<Vec<String>> {
        self.record_call()?;
        Ok(self.run_shas.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_runs() {
        let provider = MockRunHistory::with_runs(7, &["shaA", "shaB"]);
        assert_eq!(provider.workflow_id_for_run(1, "o", "r", "main").unwrap(), 7);
        assert_eq!(
            provider.successful_push_run_shas(7, "o", "r", "main").unwrap(),
            vec!["shaA", "shaB"]
        );
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_failing_provider() {
        let provider = MockRunHistory::failing("rate limited");
        let err = provider.workflow_id_for_run(1, "o", "r", "main").unwrap_err();
        assert!(err.to_string().contains("rate limited"));
        assert_eq!(provider.call_count(), 1);
    }
}
