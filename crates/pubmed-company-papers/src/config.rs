//! Configuration for the PubMed company-papers pipeline.

use std::time::Duration;

/// NCBI E-utilities constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the E-utilities suite.
    pub const BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// Paginated ID search endpoint.
    pub const ESEARCH_URL: &str =
        "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

    /// Batch record-fetch endpoint.
    pub const EFETCH_URL: &str =
        "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Fixed pause between consecutive efetch batches (NCBI asks for
    /// at most 3 req/s without an API key).
    pub const FETCH_DELAY: Duration = Duration::from_millis(500);

    /// Tool name sent with every request, per NCBI usage guidelines.
    pub const TOOL_NAME: &str = "pubmed-company-papers";

    /// Contact email sent with every request, per NCBI usage guidelines.
    pub const CONTACT_EMAIL: &str = "user@example.com";
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// NCBI API key (optional, raises the rate limit NCBI grants us).
    pub api_key: Option<String>,

    /// Tool name for NCBI request identification.
    pub tool: String,

    /// Contact email for NCBI request identification.
    pub email: String,

    /// esearch endpoint URL (overridable for tests against mock servers).
    pub esearch_url: String,

    /// efetch endpoint URL (overridable for tests against mock servers).
    pub efetch_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Pause inserted between efetch batches.
    pub fetch_delay: Duration,
}

impl Config {
    /// Create a configuration with an optional NCBI API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            tool: api::TOOL_NAME.to_string(),
            email: api::CONTACT_EMAIL.to_string(),
            esearch_url: api::ESEARCH_URL.to_string(),
            efetch_url: api::EFETCH_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            fetch_delay: api::FETCH_DELAY,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            tool: api::TOOL_NAME.to_string(),
            email: api::CONTACT_EMAIL.to_string(),
            esearch_url: format!("{base_url}/esearch.fcgi"),
            efetch_url: format!("{base_url}/efetch.fcgi"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            fetch_delay: Duration::from_millis(0), // No delay in tests
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("NCBI_API_KEY").ok();
        Ok(Self::new(api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.esearch_url, api::ESEARCH_URL);
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.esearch_url, "http://127.0.0.1:9999/esearch.fcgi");
        assert_eq!(config.efetch_url, "http://127.0.0.1:9999/efetch.fcgi");
        assert!(config.fetch_delay.is_zero());
    }
}
