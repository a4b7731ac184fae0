//! Loader module for the search re-indexer pipeline.
//!
//! Writes processed pages back into the search index and commits them.
//! Failures are logged and reported to the caller; nothing is retried.

use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::progress::ProgressReport;
use search_reindexer_repository::SearchEngineClient;
use search_reindexer_shared::Document;

/// Placeholder for documents without an `id` field in diagnostics.
const UNKNOWN_ID: &str = "<unknown>";

/// Loader that submits batches and commits them.
pub struct BatchLoader {
    client: Arc<dyn SearchEngineClient>,
}

impl BatchLoader {
    /// Create a new loader with the given client.
    pub fn new(client: Arc<dyn SearchEngineClient>) -> Self {
        Self { client }
    }

    /// Submit one batch. Returns whether the engine accepted it.
    ///
    /// On failure every document id in the batch is logged, since the
    /// engine's response does not say which document was rejected.
    #[instrument(skip(self, batch), fields(doc_count = batch.len()))]
    pub async fn submit(&self, batch: &[Document]) -> bool {
        if batch.is_empty() {
            return true;
        }

        match self.client.write_batch(batch).await {
            Ok(code) if code.is_success() => {
                debug!("Batch written");
                true
            }
            Ok(code) => {
                error!(
                    response = %code,
                    ids = ?batch_ids(batch),
                    "Error processing documents"
                );
                false
            }
            Err(e) => {
                error!(
                    error = %e,
                    ids = ?batch_ids(batch),
                    "Error processing documents"
                );
                false
            }
        }
    }

    /// Commit pending writes.
    ///
    /// Returns a progress report for a successful commit, `None` otherwise.
    #[instrument(skip(self))]
    pub async fn commit(&self, position: u64, total_found: u64) -> Option<ProgressReport> {
        match self.client.commit().await {
            Ok(code) if code.is_success() => {
                let report = ProgressReport::now(position, total_found);
                info!(
                    position = position,
                    total_found = total_found,
                    percent = report.percent(),
                    "{}",
                    report
                );
                Some(report)
            }
            Ok(code) => {
                error!(response = %code, "Error committing data");
                None
            }
            Err(e) => {
                error!(error = %e, "Error committing data");
                None
            }
        }
    }

    /// Optimize the index. Returns whether the engine reported success.
    #[instrument(skip(self))]
    pub async fn optimize(&self) -> bool {
        match self.client.optimize().await {
            Ok(code) if code.is_success() => {
                info!("Index optimized");
                true
            }
            Ok(code) => {
                error!(response = %code, "Error optimizing index");
                false
            }
            Err(e) => {
                error!(error = %e, "Error optimizing index");
                false
            }
        }
    }
}

/// Ids of every document in a batch, in batch order.
pub fn batch_ids(batch: &[Document]) -> Vec<String> {
    batch
        .iter()
        .map(|doc| doc.id().unwrap_or_else(|| UNKNOWN_ID.to_string()))
        .collect()
}
