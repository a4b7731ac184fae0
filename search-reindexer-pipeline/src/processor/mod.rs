//! Processor module for the search re-indexer pipeline.
//!
//! Applies the field-transformation policy to documents before re-submission.

mod document_processor;

pub use document_processor::DocumentProcessor;
