//! Shared Error Types
//!
//! Errors produced by the remote clients when talking to the groups backend.
//! Every transport, HTTP and envelope failure is converted into a
//! [`ClientError`] at the call site so nothing above the client layer has to
//! know about `reqwest` or `serde_json`.
//!
//! # Error Categories
//!
//! - `Network` / `Timeout` - the request never produced a response
//! - `Unauthorized` / `NotFound` / `Status` - the backend rejected the request
//! - `Decode` - the response body was not the JSON we expected
//! - `Unsuccessful` - the envelope arrived but carried `isSuccess: false`
//! - `AuthenticationRequired` - a mutation was attempted without a credential
//!
//! # Usage
//!
//! ```rust
//! use moim::shared::error::ClientError;
//!
//! let error = ClientError::unsuccessful(Some("group not found".to_string()));
//! assert!(!error.is_transport());
//! ```
use thiserror::Error;

/// Errors returned by the remote group, geocoding and post clients
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request could not be sent or the connection dropped
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The backend answered 401 or 403
    #[error("Unauthorized ({status})")]
    Unauthorized {
        /// HTTP status code
        status: u16,
    },

    /// The backend answered 404
    #[error("Not found")]
    NotFound,

    /// Any other non-2xx answer
    #[error("Request failed: {status} - {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The response body could not be decoded
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// The envelope reported `isSuccess: false`
    #[error("Backend reported failure: {}", message.as_deref().unwrap_or("no message"))]
    Unsuccessful {
        /// Message carried by the envelope, if any
        message: Option<String>,
    },

    /// No credential was available for an authenticated call
    #[error("Not authenticated")]
    AuthenticationRequired,
}

impl ClientError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new envelope failure
    pub fn unsuccessful(message: Option<String>) -> Self {
        Self::Unsuccessful { message }
    }

    /// Map a non-2xx status and its body to the matching variant
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized { status },
            404 => Self::NotFound,
            _ => Self::Status {
                status,
                message: body.into(),
            },
        }
    }

    /// True when no response was received (network failure or timeout)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status.as_u16(), err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}
