//! Backend client error types.

use thiserror::Error;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur while talking to the attendance backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request timed out")]
    Timeout,

    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Parse(String),

    #[error("no usable subject id in lookup response")]
    MissingSubjectId,

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BackendError {
    /// Returns true if the request hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, BackendError::Timeout)
    }

    /// Returns true if no connection could be established.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, BackendError::Unreachable(_))
    }

    /// Returns the HTTP status code for non-success responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status(code) => Some(*code),
            BackendError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BackendError::Timeout
        } else if e.is_connect() {
            BackendError::Unreachable(e.to_string())
        } else if e.is_decode() {
            BackendError::Parse(e.to_string())
        } else {
            BackendError::Http(e)
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        BackendError::Parse(e.to_string())
    }
}
