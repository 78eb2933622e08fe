//! Error type shared by all API calls.

use thiserror::Error;

/// Failure of a single API request.
///
/// `Status` carries the HTTP status and the backend's `detail` message so
/// forms can surface it verbatim. Everything else collapses to transport or
/// decode failures; callers handle a 401 and a dropped connection the same
/// way.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("API requests are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of the failure, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
