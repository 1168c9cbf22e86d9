//! Error types for catalog retrieval
//!
//! Every retrieval operation fails with one of two kinds: [`Error::Transport`]
//! when the request could not be completed or returned a non-success status, and
//! [`Error::Decode`] when the response body does not have the expected shape.
//! Neither kind is retried.

use fakku_core::DecodeError;

/// Network or HTTP failure
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Main error type for the client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        body: String,
        #[source]
        source: DecodeError,
    },
}

impl Error {
    /// Response body received before the failure, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Transport(TransportError::Status { body, .. }) | Error::Decode { body, .. } => {
                Some(body.as_str())
            }
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
