//! HTTP transport trait definition.
//!
//! The transport only moves bytes: it applies the connection policy
//! (timeouts, redirects, TLS) and reports non-success HTTP statuses as
//! errors. Decoding the engine's envelopes is the codec's job.

use async_trait::async_trait;
use url::Url;

use crate::errors::SearchError;

/// Body of a POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    /// Value of the `Content-Type` header.
    pub content_type: &'static str,
    /// Raw payload.
    pub bytes: Vec<u8>,
}

impl RequestBody {
    /// A JSON payload.
    pub fn json(bytes: Vec<u8>) -> Self {
        Self {
            content_type: "application/json",
            bytes,
        }
    }
}

/// Capability to perform HTTP GET and POST requests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a client can be shared behind an
/// `Arc`.
///
/// # Error Handling
///
/// Both methods return the response body on a 2xx status. Connection
/// failures and timeouts map to `SearchError::TransportError`; any other
/// status maps to `SearchError::StatusError`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request and return the response body.
    async fn get(&self, url: &Url) -> Result<String, SearchError>;

    /// Perform a POST request with an optional body and return the response body.
    async fn post(&self, url: &Url, body: Option<RequestBody>) -> Result<String, SearchError>;
}
