//! Error types for reviewer requests

use thiserror::Error;

use crate::gate::GateError;

/// Result type alias for reviewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reviewer operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A precondition for requesting reviewers was not met
    #[error(transparent)]
    Gate(#[from] GateError),

    /// The review request itself failed
    #[error(transparent)]
    Request(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a client error as a failed review request
    pub fn request(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Request(Box::new(err))
    }
}
