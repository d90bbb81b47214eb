use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Client configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, then `MOIM_CONFIG`, then environment overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self { app: AppConfig::load()? })
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout
    }

    pub fn preview_len(&self) -> usize {
        self.app.preview_len
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.server_url(), "http://localhost:8080");
        assert_eq!(config.preview_len(), 3);
    }

    #[test]
    fn test_api_url() {
        let config = Config::new();
        let url = config.api_url("/api/v1/groups/42");
        assert_eq!(url, "http://localhost:8080/api/v1/groups/42");
    }

    #[test]
    fn test_with_builder() {
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url("http://127.0.0.1:3000/")
                .request_timeout(Duration::from_secs(1)),
        )
        .unwrap();
        assert_eq!(config.api_url("/x"), "http://127.0.0.1:3000/x");
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }
}
