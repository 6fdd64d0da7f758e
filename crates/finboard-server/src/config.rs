//! Server configuration
//!
//! Built once at start-up from a key lookup (Shuttle secrets in production)
//! and injected into the adapters. Nothing reads the environment per request.

use std::time::Duration;

pub const FIRECRAWL_API_KEY: &str = "FIRECRAWL_API_KEY";
pub const FIRECRAWL_BASE_URL: &str = "FIRECRAWL_BASE_URL";
pub const FIRECRAWL_TIMEOUT_SECS: &str = "FIRECRAWL_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Firecrawl search provider
#[derive(Debug, Clone)]
pub struct FirecrawlConfig {
    /// Bearer credential. `None` makes every search fail with a configuration error.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Budget for the whole upstream call, including the body
    pub timeout: Duration,
}

impl FirecrawlConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FirecrawlConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub firecrawl: FirecrawlConfig,
}

impl ServerConfig {
    /// Build from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut firecrawl = FirecrawlConfig {
            api_key: get(FIRECRAWL_API_KEY),
            ..FirecrawlConfig::default()
        };

        if let Some(base_url) = get(FIRECRAWL_BASE_URL) {
            firecrawl = firecrawl.with_base_url(base_url);
        }

        if let Some(raw) = get(FIRECRAWL_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    firecrawl = firecrawl.with_timeout(Duration::from_secs(secs));
                }
                _ => tracing::warn!(
                    "⚠️  Invalid {}={:?} - using {}s",
                    FIRECRAWL_TIMEOUT_SECS,
                    raw,
                    DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        Self { firecrawl }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config.firecrawl.api_key, None);
        assert_eq!(config.firecrawl.base_url, "https://api.firecrawl.dev");
        assert_eq!(config.firecrawl.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (FIRECRAWL_API_KEY, "fc-test"),
            (FIRECRAWL_BASE_URL, "http://localhost:3002/"),
            (FIRECRAWL_TIMEOUT_SECS, "5"),
        ]));
        assert_eq!(config.firecrawl.api_key.as_deref(), Some("fc-test"));
        assert_eq!(config.firecrawl.base_url, "http://localhost:3002");
        assert_eq!(config.firecrawl.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_key_and_bad_timeout_ignored() {
        let config = ServerConfig::from_lookup(lookup(&[
            (FIRECRAWL_API_KEY, "  "),
            (FIRECRAWL_TIMEOUT_SECS, "soon"),
        ]));
        assert_eq!(config.firecrawl.api_key, None);
        assert_eq!(config.firecrawl.timeout, Duration::from_secs(10));
    }
}
