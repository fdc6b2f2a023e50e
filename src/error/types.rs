//! Error type definitions
//!
//! Defines the main error type surfaced by every client operation.

use thiserror::Error;

/// Main error type for the Instagram client
#[derive(Error, Debug)]
pub enum Error {
    /// A privileged operation was attempted without a session
    #[error("Session is missing. Please log in.")]
    NotAuthenticated,

    /// Transport or client configuration was rejected
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// An operation parameter failed local validation
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },

    /// The device identity provider could not produce an identity
    #[error("Device identity build failed: {reason}")]
    IdentityBuild { reason: String },

    /// Connection, timeout or request construction errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status returned by the remote API
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Malformed response payload
    #[error("Decoding error: {0}")]
    Decoding(#[from] serde_json::Error),

    /// Well-formed payload reporting a failed status
    #[error("API error: {message}")]
    Api { message: String },

    /// Configuration file or environment errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an identity build error
    pub fn identity_build(reason: impl Into<String>) -> Self {
        Self::IdentityBuild {
            reason: reason.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True for failures raised at the transport boundary
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }

    /// True when the caller has to provide a session first
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }
}
