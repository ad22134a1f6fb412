//! Application configuration module
//!
//! Provides the validated configuration for the client. Values come from
//! defaults, an optional TOML file and the environment; the layering lives in
//! `egui_app::config`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::query::DEFAULT_PAGE_SIZE;

/// Default API base URL
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Default search debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the movie/auth API
    pub server_url: String,
    /// Movies per page
    pub page_size: u32,
    /// Quiescence window before a search is sent
    pub debounce_ms: u64,
    /// Where the auth cookie is persisted
    pub token_path: Option<PathBuf>,
    /// Per-request timeout; unset keeps the HTTP client default
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            token_path: None,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Continue building from this configuration
    pub fn into_builder(self) -> AppConfigBuilder {
        AppConfigBuilder { inner: self }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.server_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) || url.len() <= "https://".len() {
            return Err(ConfigError::InvalidUrl(self.server_url.clone()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size",
                value: self.page_size.to_string(),
            });
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    inner: AppConfig,
}

impl AppConfigBuilder {
    /// Set the API base URL; a trailing slash is dropped
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.inner.server_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.inner.page_size = page_size;
        self
    }

    pub fn debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.inner.debounce_ms = debounce_ms;
        self
    }

    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.inner.token_path = Some(path.into());
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.inner.request_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
