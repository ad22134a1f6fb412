use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Directory name under the platform config dir
const APP_DIR: &str = "movie_catalog";

/// Cookie file name
const TOKEN_FILE: &str = "auth_token.toml";

/// Environment variable names
pub const ENV_CONFIG_FILE: &str = "MOVIES_CONFIG";
pub const ENV_API_URL: &str = "MOVIES_API_URL";
pub const ENV_PAGE_SIZE: &str = "MOVIES_PAGE_SIZE";
pub const ENV_DEBOUNCE_MS: &str = "MOVIES_DEBOUNCE_MS";
pub const ENV_TOKEN_PATH: &str = "MOVIES_TOKEN_PATH";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "MOVIES_REQUEST_TIMEOUT_SECS";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self { app: AppConfig::default() }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve defaults, then the config file, then environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var(ENV_CONFIG_FILE)
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml")));

        let base = match file {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "loading config file");
                AppConfig::from_file(&path)?
            }
            _ => AppConfig::default(),
        };

        let builder = apply_env(base.into_builder(), |key| std::env::var(key).ok())?;
        Self::with_builder(builder)
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.trim_end_matches('/')
    }

    pub fn page_size(&self) -> u32 {
        self.app.page_size
    }

    /// Search debounce window
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.app.debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.app.request_timeout_secs.map(Duration::from_secs)
    }

    /// Location of the persisted auth cookie
    pub fn token_path(&self) -> PathBuf {
        if let Some(ref path) = self.app.token_path {
            return path.clone();
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(TOKEN_FILE))
            .unwrap_or_else(|| Path::new(".").join(format!(".{}", TOKEN_FILE)))
    }
}

/// Overlay environment variables on a builder.
///
/// `lookup` is `std::env::var` in production.
pub fn apply_env<F>(mut builder: AppConfigBuilder, lookup: F) -> Result<AppConfigBuilder, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL) {
        builder = builder.server_url(url);
    }
    if let Some(value) = lookup(ENV_PAGE_SIZE) {
        builder = builder.page_size(parse_number(ENV_PAGE_SIZE, &value)?);
    }
    if let Some(value) = lookup(ENV_DEBOUNCE_MS) {
        builder = builder.debounce_ms(parse_number(ENV_DEBOUNCE_MS, &value)?);
    }
    if let Some(path) = lookup(ENV_TOKEN_PATH) {
        builder = builder.token_path(path);
    }
    if let Some(value) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
        builder = builder.request_timeout_secs(parse_number(ENV_REQUEST_TIMEOUT_SECS, &value)?);
    }
    Ok(builder)
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.server_url(), "http://localhost:5000");
        assert_eq!(config.page_size(), 10);
        assert_eq!(config.debounce(), Duration::from_millis(500));
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_api_url() {
        let config = Config::new();
        assert_eq!(config.api_url("/movies/list"), "http://localhost:5000/movies/list");
    }

    #[test]
    fn test_apply_env_overrides() {
        let builder = apply_env(
            AppConfig::builder(),
            env(&[
                (ENV_API_URL, "https://movies.example.com/"),
                (ENV_PAGE_SIZE, "20"),
                (ENV_DEBOUNCE_MS, "150"),
                (ENV_TOKEN_PATH, "/tmp/token.toml"),
            ]),
        )
        .unwrap();
        let config = Config::with_builder(builder).unwrap();

        assert_eq!(config.server_url(), "https://movies.example.com");
        assert_eq!(config.page_size(), 20);
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.token_path(), PathBuf::from("/tmp/token.toml"));
    }

    #[test]
    fn test_apply_env_rejects_garbage_number() {
        let result = apply_env(AppConfig::builder(), env(&[(ENV_PAGE_SIZE, "many")]));
        assert_matches!(result, Err(ConfigError::InvalidValue { key: ENV_PAGE_SIZE, .. }));
    }

    #[test]
    fn test_default_token_path_is_file() {
        let config = Config::new();
        assert!(config.token_path().to_string_lossy().contains(TOKEN_FILE));
    }
}
