//! Solr connection configuration.
//!
//! This module defines where the engine lives and how requests to it behave.
//! A `SolrConfig` is immutable once handed to a client.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::errors::SearchError;

/// Default Solr host, including the scheme.
pub const DEFAULT_HOST: &str = "http://0.0.0.0";

/// Default Solr port.
pub const DEFAULT_PORT: u16 = 8983;

/// Default path prefix in front of the core name.
pub const DEFAULT_PATH: &str = "/solr/";

/// Default core (collection) name.
pub const DEFAULT_CORE: &str = "my_core";

/// Default connect and total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Delay before retrying a read that came back empty.
pub const DEFAULT_EMPTY_READ_BACKOFF: Duration = Duration::from_secs(5);

/// Response encodings the client can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// Solr's JSON response writer (`wt=json`).
    Json,
}

impl WireFormat {
    /// Value sent as the `wt` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
        }
    }
}

impl FromStr for WireFormat {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            _ => Err(SearchError::unsupported_format(s)),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the Solr client.
#[derive(Debug, Clone)]
pub struct SolrConfig {
    /// Host with scheme, e.g. `http://localhost`. A bare host gets `http://`.
    pub host: String,
    /// Port the engine listens on.
    pub port: u16,
    /// Path prefix in front of the core name, usually `/solr/`.
    pub path: String,
    /// Core or collection to read from and write to.
    pub core: String,
    /// Requested response format. Validated when the client is built.
    pub wire_format: String,
    /// Connect and total transfer timeout. Zero disables both.
    pub timeout: Duration,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
    /// Skip TLS certificate verification.
    ///
    /// On by default so self-signed engines work out of the box. This also
    /// means the engine's identity is never checked.
    pub accept_invalid_certs: bool,
    /// Delay before retrying an empty or failed read.
    pub empty_read_backoff: Duration,
    /// How many times an empty or failed read is retried.
    pub empty_read_retries: u32,
}

impl Default for SolrConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            core: DEFAULT_CORE.to_string(),
            wire_format: WireFormat::Json.as_str().to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_redirects: 2,
            accept_invalid_certs: true,
            empty_read_backoff: DEFAULT_EMPTY_READ_BACKOFF,
            empty_read_retries: 1,
        }
    }
}

impl SolrConfig {
    /// Create a config for `core` on `host:port`, other settings at their defaults.
    pub fn new(host: impl Into<String>, port: u16, core: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            core: core.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration and return the parsed wire format.
    ///
    /// Fails with `SearchError::UnsupportedFormat` for any format other than
    /// JSON, and with `SearchError::InvalidUrl` if no base URL can be built.
    pub fn validate(&self) -> Result<WireFormat, SearchError> {
        let format = self.wire_format.parse::<WireFormat>()?;
        if self.core.trim_matches('/').is_empty() {
            return Err(SearchError::config("core name must not be empty"));
        }
        self.base_url()?;
        Ok(format)
    }

    /// Base URL of the core, always ending in `/`.
    ///
    /// Built as `{host}:{port}{path}{core}/` with duplicate slashes removed.
    pub fn base_url(&self) -> Result<Url, SearchError> {
        let host = if self.host.contains("://") {
            self.host.clone()
        } else {
            format!("http://{}", self.host)
        };

        let mut url = Url::parse(&host)?;
        url.set_port(Some(self.port))
            .map_err(|_| SearchError::invalid_url(format!("cannot set a port on {}", host)))?;

        let mut path = String::from("/");
        for segment in self
            .path
            .split('/')
            .chain(self.core.split('/'))
            .filter(|s| !s.is_empty())
        {
            path.push_str(segment);
            path.push('/');
        }
        url.set_path(&path);
        url.set_query(None);

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolrConfig::default();
        assert_eq!(config.port, 8983);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_redirects, 2);
        assert_eq!(config.empty_read_backoff, Duration::from_secs(5));
        assert_eq!(config.empty_read_retries, 1);
    }

    #[test]
    fn test_default_skips_tls_peer_verification() {
        // Self-signed engines work by default, at the cost of never checking
        // the server's identity. Turning this off must be a visible change.
        assert!(SolrConfig::default().accept_invalid_certs);
    }

    #[test]
    fn test_base_url() {
        let config = SolrConfig::default();
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "http://0.0.0.0:8983/solr/my_core/"
        );
    }

    #[test]
    fn test_base_url_normalises_slashes() {
        let config = SolrConfig {
            path: "solr".to_string(),
            core: "/products/".to_string(),
            ..SolrConfig::new("https://search.internal/", 443, "")
        };
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://search.internal/solr/products/"
        );
    }

    #[test]
    fn test_base_url_without_scheme() {
        let config = SolrConfig::new("localhost", 8984, "books");
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "http://localhost:8984/solr/books/"
        );
    }

    #[test]
    fn test_wire_format_parse() {
        assert_eq!("json".parse::<WireFormat>().unwrap(), WireFormat::Json);
        assert_eq!("JSON".parse::<WireFormat>().unwrap(), WireFormat::Json);
        assert_eq!(
            "xml".parse::<WireFormat>(),
            Err(SearchError::UnsupportedFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_validate() {
        assert_eq!(SolrConfig::default().validate().unwrap(), WireFormat::Json);

        let config = SolrConfig {
            wire_format: "php".to_string(),
            ..SolrConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SearchError::UnsupportedFormat(_))
        ));

        let config = SolrConfig::new("http://localhost", 8983, "/");
        assert!(matches!(config.validate(), Err(SearchError::ConfigError(_))));
    }
}
