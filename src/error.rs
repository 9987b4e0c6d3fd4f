//! Error types for iocflow operators.

use thiserror::Error;

/// Result type alias for operator operations
pub type Result<T> = std::result::Result<T, OperatorError>;

/// Errors that can occur while configuring or running an operator
#[derive(Debug, Error)]
pub enum OperatorError {
    /// Configuration validation failed
    #[error("configuration error: {0}")]
    Config(String),

    /// Template rendering failed
    #[error("template error: {0}")]
    Template(String),

    /// Queue transport error
    #[error("queue error: {0}")]
    Queue(String),

    /// Payload serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Raw config parsing error
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl OperatorError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a template error
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Create a queue transport error
    pub fn queue(msg: impl Into<String>) -> Self {
        Self::Queue(msg.into())
    }

    /// Check if this error is retryable by the calling pipeline
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Queue(_))
    }
}
