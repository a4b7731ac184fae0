//! Solr client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! on top of an `HttpTransport` and a `ResponseCodec`.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::{EmptyRead, HttpTransport, ReadOutcome, RequestBody, SearchEngineClient};
use crate::solr::codec::{codec_for, ResponseCodec};
use crate::solr::config::{SolrConfig, WireFormat};
use crate::solr::endpoints;
use crate::solr::transport::ReqwestTransport;
use search_reindexer_shared::{Document, PageResult, QueryState, ResponseCode};

/// Solr client.
///
/// Reads pages through the select handler and writes batches through the
/// JSON update handler of a single core.
///
/// # Example
///
/// ```ignore
/// let client = SolrClient::new(SolrConfig::new("http://localhost", 8983, "books"))?;
/// let query = QueryState::new("*:*", 0, 20);
/// if let ReadOutcome::Page(page) = client.read(&query).await {
///     let code = client.write_batch(&page.documents).await?;
///     assert!(code.is_success());
/// }
/// ```
pub struct SolrClient<T: HttpTransport = ReqwestTransport> {
    transport: T,
    codec: Box<dyn ResponseCodec>,
    config: SolrConfig,
    base_url: Url,
}

impl SolrClient<ReqwestTransport> {
    /// Create a client that talks HTTP with `reqwest`.
    ///
    /// # Returns
    ///
    /// * `Ok(SolrClient)` - A new client instance
    /// * `Err(SearchError::UnsupportedFormat)` - If the wire format is not JSON
    /// * `Err(SearchError)` - If the URL or the HTTP client cannot be built
    pub fn new(config: SolrConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> SolrClient<T> {
    /// Create a client on top of an arbitrary transport.
    pub fn with_transport(config: SolrConfig, transport: T) -> Result<Self, SearchError> {
        let format = config.validate()?;
        let base_url = config.base_url()?;

        debug!(base_url = %base_url, format = %format, "Created Solr client");

        Ok(Self {
            transport,
            codec: codec_for(format),
            config,
            base_url,
        })
    }

    /// Base URL of the configured core.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn format(&self) -> WireFormat {
        self.codec.format()
    }

    /// One select request, without any retry.
    async fn read_once(&self, query: &QueryState) -> Result<PageResult, SearchError> {
        let url = endpoints::select_url(&self.base_url, query, self.format())?;
        let body = self.transport.get(&url).await?;
        self.codec.decode_page(&body)
    }

    async fn post_for_status(
        &self,
        url: &Url,
        body: Option<RequestBody>,
    ) -> Result<ResponseCode, SearchError> {
        let response = self.transport.post(url, body).await?;
        self.codec.decode_status(&response)
    }
}

#[async_trait]
impl<T: HttpTransport> SearchEngineClient for SolrClient<T> {
    #[instrument(skip(self), fields(start = query.start, rows = query.rows))]
    async fn read(&self, query: &QueryState) -> ReadOutcome {
        let attempts = self.config.empty_read_retries.saturating_add(1);
        let mut last = EmptyRead::NoDocuments;

        for attempt in 1..=attempts {
            if attempt > 1 {
                warn!(
                    attempt = attempt,
                    backoff_ms = self.config.empty_read_backoff.as_millis() as u64,
                    "Empty read, retrying after backoff"
                );
                tokio::time::sleep(self.config.empty_read_backoff).await;
            }

            match self.read_once(query).await {
                Ok(page) if !page.is_empty() => {
                    debug!(
                        docs = page.documents.len(),
                        total_found = page.total_found,
                        "Read page"
                    );
                    return ReadOutcome::Page(page);
                }
                Ok(page) => {
                    debug!(total_found = page.total_found, "Read returned no documents");
                    last = EmptyRead::NoDocuments;
                }
                Err(e) => {
                    warn!(error = %e, transport = e.is_transport(), "Read failed");
                    last = EmptyRead::Failed(e);
                }
            }
        }

        ReadOutcome::Empty(last)
    }

    #[instrument(skip(self, documents), fields(docs = documents.len()))]
    async fn write_batch(&self, documents: &[Document]) -> Result<ResponseCode, SearchError> {
        let url = endpoints::update_url(&self.base_url, self.format())?;
        let payload = self.codec.encode_batch(documents)?;
        self.post_for_status(&url, Some(RequestBody::json(payload)))
            .await
    }

    #[instrument(skip(self))]
    async fn commit(&self) -> Result<ResponseCode, SearchError> {
        let url = endpoints::commit_url(&self.base_url, self.format())?;
        self.post_for_status(&url, None).await
    }

    #[instrument(skip(self))]
    async fn optimize(&self) -> Result<ResponseCode, SearchError> {
        let url = endpoints::optimize_url(&self.base_url, self.format())?;
        self.post_for_status(&url, None).await
    }
}
