//! `reqwest`-backed HTTP transport.

use async_trait::async_trait;
use reqwest::redirect::Policy;
use tracing::{debug, info};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::{HttpTransport, RequestBody};
use crate::solr::config::SolrConfig;

/// HTTP transport built from a `SolrConfig`'s connection policy.
///
/// Applies the configured connect/total timeout (unless zero), follows at
/// most `max_redirects` redirects, and skips certificate verification when
/// `accept_invalid_certs` is set.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport for the given configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(ReqwestTransport)` - A ready transport
    /// * `Err(SearchError)` - If the underlying HTTP client cannot be built
    pub fn new(config: &SolrConfig) -> Result<Self, SearchError> {
        // reqwest counts the original URL as a hop.
        let mut builder = reqwest::Client::builder()
            .redirect(Policy::limited(config.max_redirects.saturating_add(1)))
            .danger_accept_invalid_certs(config.accept_invalid_certs);

        if !config.timeout.is_zero() {
            builder = builder
                .connect_timeout(config.timeout)
                .timeout(config.timeout);
        }

        let client = builder
            .build()
            .map_err(|e| SearchError::config(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            timeout_secs = config.timeout.as_secs(),
            max_redirects = config.max_redirects,
            accept_invalid_certs = config.accept_invalid_certs,
            "Created HTTP transport"
        );

        Ok(Self { client })
    }

    async fn read_body(response: reqwest::Response) -> Result<String, SearchError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::status(status.as_u16(), body));
        }

        Ok(body)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<String, SearchError> {
        debug!(url = %url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        Self::read_body(response).await
    }

    async fn post(&self, url: &Url, body: Option<RequestBody>) -> Result<String, SearchError> {
        debug!(url = %url, "POST");
        let mut request = self.client.post(url.clone());
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, body.content_type)
                .body(body.bytes);
        }
        let response = request.send().await?;
        Self::read_body(response).await
    }
}
