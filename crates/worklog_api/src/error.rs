//! Error model used by worklog API client operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Transport-level failures. A well-formed HTTP response is never an error
/// here; non-201 statuses are reported through `WorklogOutcome::Failure`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for ApiError {
    /// Converts reqwest send failures into semantic ApiError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_connect() {
            ApiError::Network(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidConfig(err.to_string())
        } else {
            ApiError::Other(err.to_string())
        }
    }
}
