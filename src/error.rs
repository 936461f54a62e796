//! Fetch error types
//!
//! Everything that can go wrong between issuing a weekly-visits request and
//! turning its body into a chart series. None of these are fatal: the panel
//! reports them through a diagnostic sink and keeps its last good data.

use thiserror::Error;

/// Errors that can occur while loading weekly visits
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request could not complete (connection refused, DNS, aborted, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    /// Body did not match the expected `{ "visits": [...] }` shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Body was well-formed but carried no visits
    #[error("No visits to render")]
    EmptyVisits,
}

/// Coarse classification of a [`FetchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-success status
    Network,
    /// Body shape mismatch or empty visit list
    MalformedResponse,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network(_) | FetchError::HttpStatus(_) => ErrorKind::Network,
            FetchError::Malformed(_) | FetchError::EmptyVisits => ErrorKind::MalformedResponse,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
