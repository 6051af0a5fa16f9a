//! Transport error types

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur in transport operations
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP protocol error (malformed request, unsupported method, body read failure)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The remote host could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// The exchange did not complete within the configured timeout
    #[error("Timeout")]
    Timeout,

    /// Generic transport error
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Whether the failure means the network itself was unreachable
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // The URL may carry userinfo; it never goes into the message.
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}
