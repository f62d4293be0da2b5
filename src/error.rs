use std::result;

use thiserror::Error;

/// Error types for search, fetch and export operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// CSV serialization failed
    #[error("CSV write failed: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error for file operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Query rejected by the search service
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// API rate limit exceeded
    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    /// Non-success response from E-utilities
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
}

pub type Result<T> = result::Result<T, PubMedError>;

impl PubMedError {
    /// Build an `ApiError` from an HTTP status
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        PubMedError::ApiError {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        }
    }
}
