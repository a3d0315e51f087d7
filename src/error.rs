//! Fetch Errors
//!
//! Failures surfaced by the API client to the pages.

use thiserror::Error;

/// Error produced while talking to the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("network request failed: {0}")]
    Network(String),
    /// Non-success status other than 404
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("not found: {0}")]
    NotFound(String),
    /// Body was not the JSON shape we expected
    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }

    /// A 404 on a linked resource is an upstream fault, not a missing item
    pub fn linked(self) -> Self {
        match self {
            FetchError::NotFound(url) => FetchError::Status { status: 404, url },
            other => other,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
