//! # Search Re-indexer Pipeline
//!
//! This crate provides the pipeline that pages through documents already
//! stored in the search engine and writes them back.
//!
//! ## Architecture
//!
//! 1. **Processor**: Applies the field-transformation policy to each document
//! 2. **Loader**: Submits batches and commits, reporting failures and progress
//! 3. **Orchestrator**: Owns the cursor and counters and drives the loop

pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod processor;
pub mod progress;

pub use errors::PipelineError;
pub use orchestrator::{ReindexConfig, ReindexSummary, Reindexer, Termination};
pub use progress::ProgressReport;
