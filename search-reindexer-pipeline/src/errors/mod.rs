//! Error types for the search re-indexer pipeline.

use search_reindexer_repository::SearchError;
use thiserror::Error;

/// Errors that can occur while setting up or running the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The run configuration is unusable.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from the search engine client.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),
}

impl PipelineError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
