use thiserror::Error;

/// Unified error type for base-commit resolution
#[derive(Error, Debug)]
pub enum AffectedBaseError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Missing current branch ref (should be present in 'env.GITHUB_REF')")]
    MissingRef,

    #[error("Invalid current branch ref format: {0}")]
    MalformedRef(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Workflow run query failed: {0}")]
    Provider(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in affected-base
pub type Result<T> = std::result::Result<T, AffectedBaseError>;

impl AffectedBaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AffectedBaseError::Config(msg.into())
    }

    /// Create a provider error with context
    pub fn provider(msg: impl Into<String>) -> Self {
        AffectedBaseError::Provider(msg.into())
    }
}
