//! # Search Re-indexer Shared
//!
//! Plain data types passed between the search engine client and the
//! re-index pipeline: documents, pages, query state, response codes and
//! the field-transformation policy.

mod document;
mod policy;
mod query;

pub use document::{Document, PageResult, ResponseCode, ID_FIELD};
pub use policy::{FieldOperation, FieldPolicy, PolicyParseError};
pub use query::QueryState;
