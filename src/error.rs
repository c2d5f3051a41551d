//! API Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("empty response where a ticket was expected")]
    EmptyBody,

    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
