//! Error types for the Courier client
//!
//! Every failure of a client call surfaces as one [`ClientError`]. The
//! taxonomy is deliberately small: connectivity, invalid data, unauthorized,
//! bad URL, and a catch-all, plus the status-range failure raised when the
//! server answers outside `200..=299`.

use courier_transport::TransportError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

const GENERIC_DESCRIPTION: &str = "Something went wrong, please try again later";

/// Main error type for client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The network was unreachable or the exchange timed out.
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// A body could not be encoded or the response could not be decoded.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The session is no longer authorized.
    ///
    /// Reserved for 401-style flows; no status code is mapped to it
    /// automatically.
    #[error("Unauthorized")]
    Unauthorized,

    /// The URL string could not be parsed as an absolute URL.
    #[error("Invalid URL: {0}")]
    NotValidUrl(String),

    /// The server answered with a status outside `200..=299`.
    #[error("Bad server response (status {status})")]
    BadServerResponse {
        /// HTTP status code
        status: u16,
    },

    /// Any other failure.
    #[error("Undefined error: {0}")]
    Undefined(String),
}

impl ClientError {
    /// Human-readable description suitable for showing to an end user.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Connectivity(_) => "Please check your internet connection",
            Self::Unauthorized => "You have been logged out, please try to login again",
            _ => GENERIC_DESCRIPTION,
        }
    }

    /// HTTP status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadServerResponse { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        if err.is_connectivity() {
            Self::Connectivity(err.to_string())
        } else {
            Self::Undefined(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidData(err.to_string())
    }
}
