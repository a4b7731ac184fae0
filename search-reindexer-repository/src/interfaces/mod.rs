//! Interface definitions for the search engine client.
//!
//! This module defines the abstract `SearchEngineClient` trait used by the
//! re-index pipeline and the `HttpTransport` trait the Solr client is built
//! on, so both layers can be swapped for fakes in tests.

mod http_transport;
mod search_engine_client;

pub use http_transport::{HttpTransport, RequestBody};
pub use search_engine_client::{EmptyRead, ReadOutcome, SearchEngineClient};
