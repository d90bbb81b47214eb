//! Application configuration module
//!
//! Provides configuration types for the application. Values are layered:
//! built-in defaults, then an optional TOML file named by `MOIM_CONFIG`,
//! then environment overrides (`CLIENT_API_URL`, `MOIM_REQUEST_TIMEOUT_SECS`).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of board posts shown on the detail page
pub const DEFAULT_PREVIEW_LEN: usize = 3;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Server URL, without a trailing slash
    pub server_url: String,
    /// Upper bound on every remote call
    pub request_timeout: Duration,
    /// How many posts the board preview keeps
    pub preview_len: usize,
    /// Where the session token is persisted; `None` uses the platform data dir
    pub session_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            preview_len: DEFAULT_PREVIEW_LEN,
            session_path: None,
        }
    }
}

/// On-disk representation; every field is optional
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    server_url: Option<String>,
    request_timeout_secs: Option<u64>,
    preview_len: Option<usize>,
    session_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load defaults, the `MOIM_CONFIG` file if set, then environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = match std::env::var("MOIM_CONFIG") {
            Ok(path) => AppConfigBuilder::from_toml_file(Path::new(&path))?,
            Err(_) => AppConfigBuilder::default(),
        };

        if let Ok(url) = std::env::var("CLIENT_API_URL") {
            builder = builder.server_url(url);
        }
        if let Ok(secs) = std::env::var("MOIM_REQUEST_TIMEOUT_SECS") {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue("MOIM_REQUEST_TIMEOUT_SECS", secs.clone()))?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.server_url.clone()));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue("request_timeout", "0".to_string()));
        }
        if self.preview_len == 0 {
            return Err(ConfigError::InvalidValue("preview_len", "0".to_string()));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    request_timeout: Option<Duration>,
    preview_len: Option<usize>,
    session_path: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Seed a builder from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
        Self::from_toml_str(&raw)
    }

    /// Seed a builder from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self {
            server_url: file.server_url,
            request_timeout: file.request_timeout_secs.map(Duration::from_secs),
            preview_len: file.preview_len,
            session_path: file.session_path,
        })
    }

    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the board preview length
    pub fn preview_len(mut self, len: usize) -> Self {
        self.preview_len = Some(len);
        self
    }

    /// Set the session file location
    pub fn session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let server_url = self
            .server_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.server_url);

        let config = AppConfig {
            server_url,
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            preview_len: self.preview_len.unwrap_or(defaults.preview_len),
            session_path: self.session_path,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("failed to read {0}: {1}")]
    Io(String, String),
    #[error("failed to parse config: {0}")]
    Parse(String),
}
