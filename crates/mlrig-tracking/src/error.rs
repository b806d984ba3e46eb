//! Error types for tracking server calls

use thiserror::Error;

/// Result type for tracking operations
pub type Result<T> = std::result::Result<T, TrackingError>;

/// Error code the tracking server returns for duplicate experiment names
pub const RESOURCE_ALREADY_EXISTS: &str = "RESOURCE_ALREADY_EXISTS";

/// Errors that can occur while talking to the tracking server
#[derive(Debug, Error)]
pub enum TrackingError {
    /// Transport-level failure (connection refused, timeout, bad body)
    #[error("Tracking server request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Structured error returned by the tracking API
    #[error("Tracking server refused the request ({code}): {message}")]
    Api { code: String, message: String },

    /// Response that is neither a success nor a structured API error
    #[error("Unexpected response from tracking server (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

impl TrackingError {
    /// True when the server rejected a create because the name is taken
    ///
    /// Only the dedicated error code counts. Any other failure, including
    /// an unreachable server, is not a duplicate and stays an error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, TrackingError::Api { code, .. } if code == RESOURCE_ALREADY_EXISTS)
    }
}
