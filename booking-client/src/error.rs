//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected the submission as invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested seating time was taken before the submission landed
    #[error("Slot taken: {0}")]
    SlotTaken(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
