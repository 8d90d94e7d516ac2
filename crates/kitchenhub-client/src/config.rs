//! KitchenHub API client configuration.
//!
//! Configures the base URL and request timeout. The default points at a
//! local development backend. Override via environment variables or
//! explicit construction for staging/testing.

use url::Url;

/// Configuration for connecting to the KitchenHub backend.
#[derive(Debug, Clone)]
pub struct HubApiConfig {
    /// Base URL of the REST API, including any context path.
    /// Default: <http://localhost:8080/api>
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl HubApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `KITCHENHUB_API_URL` (default: `http://localhost:8080/api`)
    /// - `KITCHENHUB_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("KITCHENHUB_API_URL", "http://localhost:8080/api")?,
            timeout_secs: std::env::var("KITCHENHUB_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be
    /// parsed (should not occur for valid port numbers, but avoids
    /// `expect()`).
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(&format!("http://127.0.0.1:{port}"))
                .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?,
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = HubApiConfig::local_mock(9000).unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("NONEXISTENT_VAR_67890", "https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn env_url_rejects_invalid_url() {
        std::env::set_var("TEST_BAD_URL_KH", "not a url");
        let result = env_url("TEST_BAD_URL_KH", "https://example.com");
        std::env::remove_var("TEST_BAD_URL_KH");
        assert!(result.is_err());
    }
}
