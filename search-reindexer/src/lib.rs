//! # Search Re-indexer
//!
//! Main library for the Solr search re-indexer.
//!
//! This crate provides the configuration surface and dependency wiring for
//! running a re-index pass over one Solr core.

pub mod config;

pub use config::{Dependencies, LogFormat, Settings};

use thiserror::Error;

/// Errors that can occur during re-indexer initialization.
#[derive(Error, Debug)]
pub enum ReindexError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] search_reindexer_pipeline::PipelineError),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] search_reindexer_repository::SearchError),
}

impl ReindexError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
