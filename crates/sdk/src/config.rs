//! SDK configuration
//!
//! This module provides configuration options for the SDK client.

use crate::error::{SdkError, SdkResult};
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API, without the `/api` prefix
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Log request and response bodies
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("variant-eval-sdk/{}", crate::VERSION),
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - `VARIANT_EVAL_API_URL`: Base URL for the API
    /// - `VARIANT_EVAL_TIMEOUT`: Request timeout in seconds
    /// - `VARIANT_EVAL_DEBUG`: Enable body logging
    pub fn from_env() -> SdkResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("VARIANT_EVAL_API_URL") {
            config.base_url = url;
        }

        if let Ok(timeout) = std::env::var("VARIANT_EVAL_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| SdkError::ConfigError {
                message: format!("Invalid timeout value: {}", timeout),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if std::env::var("VARIANT_EVAL_DEBUG").is_ok() {
            config.debug = true;
        }

        Ok(config)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> SdkResult<()> {
        if self.base_url.is_empty() {
            return Err(SdkError::ConfigError {
                message: "Base URL cannot be empty".to_string(),
            });
        }

        url::Url::parse(&self.base_url).map_err(|e| SdkError::ConfigError {
            message: format!("Invalid base URL: {}", e),
        })?;

        Ok(())
    }

    /// Join the base URL and an API path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, crate::DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("variant-eval-sdk/"));
        assert!(!config.debug);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("https://eval.example.com")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("tests")
            .with_debug(true);

        assert_eq!(config.base_url, "https://eval.example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "tests");
        assert!(config.debug);
    }

    #[test]
    fn test_config_validation() {
        let config = ClientConfig::new();
        assert!(config.validate().is_ok());

        let config = ClientConfig::new().with_base_url("");
        assert!(config.validate().is_err());

        let config = ClientConfig::new().with_base_url("not-a-url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_url_for_strips_trailing_slash() {
        let config = ClientConfig::new().with_base_url("http://localhost:8000/");
        assert_eq!(
            config.url_for("/api/evaluators/"),
            "http://localhost:8000/api/evaluators/"
        );
    }
}
