//! Orchestrator module for the search re-indexer pipeline.
//!
//! Coordinates the client, processor, and loader components: reads a page,
//! applies the field policy, writes the page back, and commits every
//! `commit_frequency` pages.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::errors::PipelineError;
use crate::loader::BatchLoader;
use crate::processor::DocumentProcessor;
use crate::progress::ProgressReport;
use search_reindexer_repository::{EmptyRead, ReadOutcome, SearchEngineClient, SearchError};
use search_reindexer_shared::{FieldPolicy, QueryState};

/// Configuration for a re-index run.
#[derive(Debug, Clone)]
pub struct ReindexConfig {
    /// Query selecting the documents to re-index.
    pub query: String,
    /// Offset of the first document to read.
    pub start_index: u64,
    /// Absolute position at which to stop; 0 means no boundary.
    pub end_index: u64,
    /// Documents per page.
    pub page_size: u64,
    /// Commit after this many pages.
    pub commit_frequency: u64,
    /// Fields to blank or drop before writing.
    pub field_policy: FieldPolicy,
    /// Optimize the index once the loop ends.
    pub optimize_on_finish: bool,
}

impl Default for ReindexConfig {
    fn default() -> Self {
        Self {
            query: "*:*".to_string(),
            start_index: 0,
            end_index: 0,
            page_size: 20,
            commit_frequency: 100,
            field_policy: FieldPolicy::default(),
            optimize_on_finish: false,
        }
    }
}

impl ReindexConfig {
    /// Check that the configuration describes a run that can make progress.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.page_size == 0 {
            return Err(PipelineError::config("page size must be greater than 0"));
        }
        if self.commit_frequency == 0 {
            return Err(PipelineError::config(
                "commit frequency must be greater than 0",
            ));
        }
        if self.end_index > 0 && self.end_index <= self.start_index {
            return Err(PipelineError::config(format!(
                "end index {} must be greater than start index {}",
                self.end_index, self.start_index
            )));
        }
        Ok(())
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// A read returned no documents, even after retrying.
    Exhausted,
    /// The last read attempt failed.
    ReadFailed(SearchError),
    /// The configured end index was reached.
    EndBoundary,
}

/// Counters and outcome of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReindexSummary {
    pub start_index: u64,
    /// Absolute position of the last document processed.
    pub position: u64,
    /// Documents processed by this run.
    pub documents_processed: u64,
    pub pages_processed: u64,
    /// Total reported by the last successful read.
    pub total_found: u64,
    pub commits_attempted: u64,
    pub write_failures: u64,
    pub commit_failures: u64,
    /// One report per successful commit, in order.
    pub progress: Vec<ProgressReport>,
    pub termination: Termination,
    /// Cursor value the next read would have used.
    pub next_start: u64,
}

/// Drives a re-index run from the configured start to the end of the results.
///
/// The run is strictly sequential: one page is read, written and possibly
/// committed before the next read is issued. Write and commit failures are
/// logged and counted but never stop the run.
pub struct Reindexer {
    client: Arc<dyn SearchEngineClient>,
    processor: DocumentProcessor,
    loader: BatchLoader,
    config: ReindexConfig,
}

impl Reindexer {
    /// Create a new re-indexer.
    ///
    /// # Returns
    ///
    /// * `Ok(Reindexer)` - Ready to run
    /// * `Err(PipelineError::ConfigError)` - If the configuration is invalid
    pub fn new(
        client: Arc<dyn SearchEngineClient>,
        config: ReindexConfig,
    ) -> Result<Self, PipelineError> {
        config.validate()?;

        Ok(Self {
            processor: DocumentProcessor::new(config.field_policy.clone()),
            loader: BatchLoader::new(client.clone()),
            client,
            config,
        })
    }

    /// The run configuration.
    pub fn config(&self) -> &ReindexConfig {
        &self.config
    }

    /// Run the loop until the results are exhausted or the end index is hit.
    #[instrument(skip(self), fields(query = %self.config.query, start = self.config.start_index))]
    pub async fn run(&self) -> ReindexSummary {
        info!(
            page_size = self.config.page_size,
            commit_frequency = self.config.commit_frequency,
            end_index = self.config.end_index,
            policy = %self.config.field_policy,
            "Starting re-index"
        );

        let mut query = QueryState::new(
            self.config.query.clone(),
            self.config.start_index,
            self.config.page_size,
        );
        let mut summary = ReindexSummary {
            start_index: self.config.start_index,
            position: self.config.start_index,
            documents_processed: 0,
            pages_processed: 0,
            total_found: 0,
            commits_attempted: 0,
            write_failures: 0,
            commit_failures: 0,
            progress: Vec::new(),
            termination: Termination::Exhausted,
            next_start: self.config.start_index,
        };

        loop {
            let page = match self.client.read(&query).await {
                ReadOutcome::Page(page) => page,
                ReadOutcome::Empty(EmptyRead::NoDocuments) => {
                    info!(start = query.start, "No more documents");
                    summary.termination = Termination::Exhausted;
                    break;
                }
                ReadOutcome::Empty(EmptyRead::Failed(e)) => {
                    warn!(start = query.start, error = %e, "Read failed, stopping");
                    summary.termination = Termination::ReadFailed(e);
                    break;
                }
            };

            summary.total_found = page.total_found;

            let mut end_of_index = false;
            let mut batch = Vec::with_capacity(page.documents.len());
            for document in page.documents {
                summary.position += 1;
                summary.documents_processed += 1;
                end_of_index =
                    self.config.end_index > 0 && summary.position == self.config.end_index;

                batch.push(self.processor.process(document));

                if end_of_index {
                    query.jump_to(summary.total_found);
                    break;
                }
            }

            if !self.loader.submit(&batch).await {
                summary.write_failures += 1;
            }

            summary.pages_processed += 1;
            if summary.pages_processed % self.config.commit_frequency == 0 || end_of_index {
                summary.commits_attempted += 1;
                match self
                    .loader
                    .commit(summary.position, summary.total_found)
                    .await
                {
                    Some(report) => summary.progress.push(report),
                    None => summary.commit_failures += 1,
                }
            }

            if end_of_index {
                info!(end_index = self.config.end_index, "End index reached");
                summary.termination = Termination::EndBoundary;
                break;
            }

            query.advance();
        }

        summary.next_start = query.start;

        if self.config.optimize_on_finish && summary.pages_processed > 0 {
            self.loader.optimize().await;
        }

        info!(
            documents = summary.documents_processed,
            pages = summary.pages_processed,
            write_failures = summary.write_failures,
            commit_failures = summary.commit_failures,
            "Re-index finished"
        );

        summary
    }
}
