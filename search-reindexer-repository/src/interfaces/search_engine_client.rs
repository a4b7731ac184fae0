//! Search engine client trait definition.
//!
//! This module defines the abstract interface the re-index driver talks to,
//! allowing for different backend implementations (Solr over HTTP, mocks).

use async_trait::async_trait;

use crate::errors::SearchError;
use search_reindexer_shared::{Document, PageResult, QueryState, ResponseCode};

/// Why a read produced no documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyRead {
    /// The engine answered with zero documents.
    NoDocuments,
    /// The last attempt failed before any documents could be decoded.
    Failed(SearchError),
}

/// Result of reading one page, after the empty-read retry policy has run.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// A page with at least one document.
    Page(PageResult),
    /// No documents, even after retrying.
    Empty(EmptyRead),
}

impl ReadOutcome {
    /// Whether the read produced no page.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// The page, if any.
    pub fn into_page(self) -> Option<PageResult> {
        match self {
            Self::Page(page) => Some(page),
            Self::Empty(_) => None,
        }
    }
}

/// Abstract interface for the operations a re-index run needs.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// `read` never fails outright: transport and decode failures are retried and
/// then surface as `ReadOutcome::Empty(EmptyRead::Failed(_))`. The write
/// operations return the engine's response code; an `Err` means no code
/// could be obtained at all.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Read the page described by `query`.
    ///
    /// An empty or failed read is retried after a fixed backoff before
    /// giving up.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let query = QueryState::new("*:*", 0, 20);
    /// if let ReadOutcome::Page(page) = client.read(&query).await {
    ///     println!("{} of {}", page.documents.len(), page.total_found);
    /// }
    /// ```
    async fn read(&self, query: &QueryState) -> ReadOutcome;

    /// Submit a batch of documents for (re-)indexing.
    ///
    /// Documents replace any stored document with the same unique key.
    async fn write_batch(&self, documents: &[Document]) -> Result<ResponseCode, SearchError>;

    /// Make all submitted writes visible to readers.
    async fn commit(&self) -> Result<ResponseCode, SearchError>;

    /// Merge index segments. Also commits pending writes.
    async fn optimize(&self) -> Result<ResponseCode, SearchError>;
}
