//! Error types for the search re-indexer repository.

mod search_error;

pub use search_error::SearchError;
