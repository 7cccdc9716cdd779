//! Panel configuration
//!
//! Backend location, poll cadence and display settings. The backend origin
//! is fixed at build time through `FORWARDER_BACKEND_URL`; the CLI can still
//! override it per invocation, and the remaining fields are read from flags
//! or their environment variables (`POLL_INTERVAL`, `VIEWPORT_LINES`,
//! `SINGLE_FLIGHT`).

use std::time::Duration;

use forwarder_core::domain::view::DEFAULT_VIEWPORT;

/// Backend origin baked in at compile time
pub const DEFAULT_BACKEND_URL: &str = match option_env!("FORWARDER_BACKEND_URL") {
    Some(url) => url,
    None => "https://forwarder-bot-1.onrender.com",
};

/// Default delay between two log fetches
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Panel configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL (e.g., "https://forwarder-bot-1.onrender.com")
    pub backend_url: String,

    /// How often the poller fetches logs
    pub poll_interval: Duration,

    /// Number of log lines rendered at once
    pub viewport_lines: usize,

    /// Skip a poll tick while the previous fetch is still outstanding
    pub single_flight: bool,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(backend_url: String) -> Self {
        Self {
            backend_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
            viewport_lines: DEFAULT_VIEWPORT,
            single_flight: false,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend_url.is_empty() {
            anyhow::bail!("backend_url cannot be empty");
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            anyhow::bail!("backend_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.viewport_lines == 0 {
            anyhow::bail!("viewport_lines must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.viewport_lines, DEFAULT_VIEWPORT);
        assert!(!config.single_flight);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.backend_url = String::new();
        assert!(config.validate().is_err());

        config.backend_url = "forwarder-bot-1.onrender.com".to_string();
        assert!(config.validate().is_err());

        config.backend_url = "http://localhost:5000".to_string();
        assert!(config.validate().is_ok());

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());

        config.poll_interval = Duration::from_secs(1);
        config.viewport_lines = 0;
        assert!(config.validate().is_err());
    }
}
