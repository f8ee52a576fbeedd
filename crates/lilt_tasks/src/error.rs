//! Task controller error types

use thiserror::Error;

/// Errors raised while creating a task
#[derive(Error, Debug)]
pub enum TaskError {
    /// The API base URL could not be parsed
    #[error("Invalid task API URL: {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the response body not read
    #[error("Task request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Task request rejected with HTTP {0}")]
    Status(u16),

    /// The response body was not a task
    #[error("Failed to decode task: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for task operations
pub type Result<T> = std::result::Result<T, TaskError>;
