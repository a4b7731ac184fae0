//! Solr implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! that talks to a Solr core over its HTTP API.

mod client;
mod codec;
mod config;
mod endpoints;
mod transport;

pub use client::SolrClient;
pub use codec::{codec_for, JsonCodec, ResponseCodec};
pub use config::{
    SolrConfig, WireFormat, DEFAULT_CORE, DEFAULT_EMPTY_READ_BACKOFF, DEFAULT_HOST, DEFAULT_PATH,
    DEFAULT_PORT, DEFAULT_TIMEOUT,
};
pub use transport::ReqwestTransport;
