//! Command-line and environment settings.
//!
//! Every setting can be given as a flag or through its environment variable
//! (a `.env` file is loaded first); flags win over the environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::ReindexError;
use search_reindexer_pipeline::ReindexConfig;
use search_reindexer_repository::solr::{
    DEFAULT_CORE, DEFAULT_HOST, DEFAULT_PATH, DEFAULT_PORT,
};
use search_reindexer_repository::SolrConfig;
use search_reindexer_shared::FieldPolicy;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Settings for one re-index run.
#[derive(Debug, Clone, Parser)]
#[command(name = "search-reindexer")]
#[command(about = "Re-index every document of a Solr core in place", long_about = None)]
pub struct Settings {
    /// Solr host, with or without scheme
    #[arg(long, env = "SOLR_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Solr port
    #[arg(long, env = "SOLR_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path prefix in front of the core name
    #[arg(long, env = "SOLR_PATH", default_value = DEFAULT_PATH)]
    pub path: String,

    /// Core (collection) to re-index
    #[arg(long, env = "SOLR_CORE", default_value = DEFAULT_CORE)]
    pub core: String,

    /// Response format requested from Solr
    #[arg(long = "wire-format", env = "SOLR_WRITER_TYPE", default_value = "json")]
    pub wire_format: String,

    /// Documents per page
    #[arg(long, env = "PAGINATE_ROWS", default_value_t = 20)]
    pub page_size: u64,

    /// Commit after this many pages
    #[arg(long, env = "COMMIT_FREQUENCY", default_value_t = 100)]
    pub commit_frequency: u64,

    /// Request timeout in seconds, 0 for none
    #[arg(long = "timeout", env = "REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Query selecting the documents to re-index
    #[arg(long, env = "REINDEX_QUERY", default_value = "*:*")]
    pub query: String,

    /// Offset of the first document
    #[arg(long, env = "START_INDEX", default_value_t = 0)]
    pub start_index: u64,

    /// Stop after this absolute document position, 0 for no limit
    #[arg(long, env = "END_INDEX", default_value_t = 0)]
    pub end_index: u64,

    /// Field rules, e.g. `body=blank,_version_=drop`
    #[arg(long, env = "FIELD_POLICY")]
    pub field_policy: Option<String>,

    /// Optimize the index after the run
    #[arg(long, env = "OPTIMIZE_ON_FINISH", default_value_t = false)]
    pub optimize_on_finish: bool,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Settings {
    /// Client configuration for these settings.
    pub fn solr_config(&self) -> SolrConfig {
        SolrConfig {
            path: self.path.clone(),
            wire_format: self.wire_format.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..SolrConfig::new(self.host.clone(), self.port, self.core.clone())
        }
    }

    /// Driver configuration for these settings.
    pub fn reindex_config(&self) -> Result<ReindexConfig, ReindexError> {
        let field_policy = match &self.field_policy {
            Some(raw) => raw
                .parse::<FieldPolicy>()
                .map_err(|e| ReindexError::config(format!("Invalid field policy: {}", e)))?,
            None => FieldPolicy::default(),
        };

        Ok(ReindexConfig {
            query: self.query.clone(),
            start_index: self.start_index,
            end_index: self.end_index,
            page_size: self.page_size,
            commit_frequency: self.commit_frequency,
            field_policy,
            optimize_on_finish: self.optimize_on_finish,
        })
    }
}

/// Environment variables `Settings` falls back to.
#[cfg(test)]
pub(crate) const SETTINGS_ENV: &[&str] = &[
    "SOLR_HOST",
    "SOLR_PORT",
    "SOLR_PATH",
    "SOLR_CORE",
    "SOLR_WRITER_TYPE",
    "PAGINATE_ROWS",
    "COMMIT_FREQUENCY",
    "REQUEST_TIMEOUT_SECS",
    "REINDEX_QUERY",
    "START_INDEX",
    "END_INDEX",
    "FIELD_POLICY",
    "OPTIMIZE_ON_FINISH",
    "LOG_FORMAT",
];

/// Parse `args` with every settings variable removed from the environment,
/// so only flags and defaults apply.
#[cfg(test)]
pub(crate) fn parse_without_env(args: &[&str]) -> Result<Settings, clap::Error> {
    for name in SETTINGS_ENV {
        std::env::remove_var(name);
    }
    let mut argv = vec!["search-reindexer"];
    argv.extend_from_slice(args);
    Settings::try_parse_from(argv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_reindexer_shared::FieldOperation;

    fn parse(args: &[&str]) -> Settings {
        parse_without_env(args).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let settings = parse(&[]);

        let solr = settings.solr_config();
        assert_eq!(solr.host, DEFAULT_HOST);
        assert_eq!(solr.port, DEFAULT_PORT);
        assert_eq!(solr.core, DEFAULT_CORE);
        assert_eq!(solr.wire_format, "json");
        assert_eq!(solr.timeout, Duration::from_secs(60));
        assert_eq!(settings.log_format, LogFormat::Text);

        let reindex = settings.reindex_config().unwrap();
        assert_eq!(reindex.query, "*:*");
        assert_eq!(reindex.page_size, 20);
        assert_eq!(reindex.commit_frequency, 100);
        assert!(reindex.field_policy.is_empty());
        assert!(!reindex.optimize_on_finish);
    }

    #[test]
    fn test_flags_override_defaults() {
        let settings = parse(&[
            "--host",
            "solr.internal",
            "--port",
            "8080",
            "--core",
            "books",
            "--page-size",
            "50",
            "--commit-frequency",
            "5",
            "--timeout",
            "0",
            "--start-index",
            "100",
            "--end-index",
            "500",
            "--field-policy",
            "body=empty,_version_=ignore",
            "--optimize-on-finish",
            "--log-format",
            "json",
        ]);

        let solr = settings.solr_config();
        assert_eq!(solr.host, "solr.internal");
        assert_eq!(solr.port, 8080);
        assert_eq!(solr.core, "books");
        assert_eq!(solr.timeout, Duration::ZERO);
        assert_eq!(settings.log_format, LogFormat::Json);

        let reindex = settings.reindex_config().unwrap();
        assert_eq!(reindex.page_size, 50);
        assert_eq!(reindex.commit_frequency, 5);
        assert_eq!(reindex.start_index, 100);
        assert_eq!(reindex.end_index, 500);
        assert!(reindex.optimize_on_finish);
        let rules: Vec<_> = reindex.field_policy.rules().collect();
        assert_eq!(
            rules,
            vec![
                ("_version_", FieldOperation::Drop),
                ("body", FieldOperation::Blank)
            ]
        );
    }

    #[test]
    fn test_invalid_field_policy_is_config_error() {
        let settings = parse(&["--field-policy", "body=shred"]);
        assert!(matches!(
            settings.reindex_config(),
            Err(ReindexError::ConfigError(_))
        ));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        assert!(parse_without_env(&["--log-format", "xml"]).is_err());
    }
}
