//! Configuration and dependency wiring for the re-indexer binary.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{LogFormat, Settings};
