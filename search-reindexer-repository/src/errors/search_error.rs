//! Search error types.
//!
//! This module defines the error types that can occur while talking to the
//! search engine.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The configured wire format is not supported.
    #[error("Unsupported output format: {0:?} (only \"json\" is supported)")]
    UnsupportedFormat(String),

    /// The request never produced a response (connect failure, timeout, redirect limit).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The engine answered with a non-success HTTP status.
    #[error("HTTP status {status}: {body}")]
    StatusError { status: u16, body: String },

    /// Failed to decode a response body.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Failed to encode a request body.
    #[error("Encode error: {0}")]
    EncodeError(String),

    /// The configured endpoint does not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client configuration is unusable.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SearchError {
    /// Create an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create an HTTP status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::StatusError {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }

    /// Create an encode error.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::EncodeError(msg.into())
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Whether the failure happened at the network level rather than in
    /// encoding, decoding or configuration.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportError(_) | Self::StatusError { .. })
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::status(status.as_u16(), err.to_string()),
            None => Self::transport(err.to_string()),
        }
    }
}

impl From<url::ParseError> for SearchError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
