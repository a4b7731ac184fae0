//! Dependency initialization and wiring for the re-indexer.

use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::ReindexError;
use search_reindexer_pipeline::Reindexer;
use search_reindexer_repository::SolrClient;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured re-indexer ready to run.
    pub reindexer: Reindexer,
}

impl Dependencies {
    /// Initialize all dependencies from the resolved settings.
    ///
    /// No request is sent here; an unreachable Solr shows up as a failed
    /// first read.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(ReindexError)` - If the settings are unusable, including an
    ///   unsupported wire format
    pub fn new(settings: &Settings) -> Result<Self, ReindexError> {
        let solr_config = settings.solr_config();
        let reindex_config = settings.reindex_config()?;

        info!(
            host = %solr_config.host,
            port = solr_config.port,
            core = %solr_config.core,
            wire_format = %solr_config.wire_format,
            "Initializing dependencies"
        );

        let client = SolrClient::new(solr_config)?;
        info!(base_url = %client.base_url(), "Solr client created");

        let reindexer = Reindexer::new(Arc::new(client), reindex_config)?;

        Ok(Self { reindexer })
    }
}
