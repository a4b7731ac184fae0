//! # Search Re-indexer Repository
//!
//! This crate provides traits and implementations for talking to the search
//! engine. It includes definitions for errors, the transport and client
//! interfaces, and a concrete implementation for Solr's HTTP API.

pub mod errors;
pub mod interfaces;
pub mod solr;

pub use errors::SearchError;
pub use interfaces::{EmptyRead, HttpTransport, ReadOutcome, SearchEngineClient};
pub use solr::{JsonCodec, ReqwestTransport, ResponseCodec, SolrClient, SolrConfig, WireFormat};
