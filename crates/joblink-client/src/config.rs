//! API client configuration.

use std::time::Duration;

/// Configuration for the JobLink API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the JobLink backend
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: std::env::var("JOBLINK_API_URL").unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(
                std::env::var("JOBLINK_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            connect_timeout: Duration::from_secs(
                std::env::var("JOBLINK_API_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }

    /// Config pointing at a specific backend, with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_config_reads_env() {
        std::env::set_var("JOBLINK_API_URL", "https://api.joblink.example");
        std::env::set_var("JOBLINK_API_TIMEOUT_SECS", "10");
        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, "https://api.joblink.example");
        assert_eq!(config.timeout, Duration::from_secs(10));
        std::env::remove_var("JOBLINK_API_URL");
        std::env::remove_var("JOBLINK_API_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_config_handles_invalid_env_values() {
        std::env::set_var("JOBLINK_API_TIMEOUT_SECS", "not-a-number");
        let config = ApiConfig::from_env();
        assert_eq!(config.timeout, Duration::from_secs(30));
        std::env::remove_var("JOBLINK_API_TIMEOUT_SECS");
    }
}
