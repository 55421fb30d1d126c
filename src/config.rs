//! Runtime configuration.
//!
//! Layers, lowest precedence first: built-in defaults, a `.env` file,
//! process environment, then command-line flags.

use std::env;
use std::path::PathBuf;

use reqwest::Url;

use crate::error::ConfigError;

/// Backend address when nothing else is configured (the Flask default port).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Log directive used when neither `GREENLENS_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "greenlens=info";

pub const ENV_API_URL: &str = "GREENLENS_API_URL";
pub const ENV_LOG: &str = "GREENLENS_LOG";
pub const ENV_LOG_FILE: &str = "GREENLENS_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without a trailing slash, e.g. `http://localhost:5000`
    pub api_base_url: String,
    /// Explicit log file; `None` means the per-user data directory
    pub log_file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend URL, validating and normalising it.
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(url)?;
        Ok(self)
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Load from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Some(url) = non_empty_var(ENV_API_URL) {
            config = config.with_api_base_url(&url)?;
        }
        if let Some(filter) = non_empty_var(ENV_LOG).or_else(|| non_empty_var("RUST_LOG")) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = non_empty_var(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        Ok(config)
    }

    /// Apply the `--api-url` flag on top of the environment.
    pub fn with_cli(self, api_url: Option<&str>) -> Result<Self, ConfigError> {
        match api_url {
            Some(url) => self.with_api_base_url(url),
            None => Ok(self),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accept only absolute http(s) URLs and drop trailing slashes so endpoint
/// paths can be appended directly.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(ENV_API_URL);
        env::remove_var(ENV_LOG);
        env::remove_var(ENV_LOG_FILE);
        env::remove_var("RUST_LOG");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.log_filter, "greenlens=info");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_api_base_url("https://api.greenlens.example/")
            .unwrap()
            .with_log_file("/tmp/gl.log")
            .with_log_filter("greenlens=debug");
        assert_eq!(config.api_base_url, "https://api.greenlens.example");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/gl.log")));
        assert_eq!(config.log_filter, "greenlens=debug");
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        assert!(matches!(
            normalize_base_url("localhost:5000"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_trailing_slashes_removed() {
        assert_eq!(
            normalize_base_url(" http://127.0.0.1:5000// ").unwrap(),
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        env::set_var(ENV_API_URL, "http://10.0.0.2:5000/");
        env::set_var(ENV_LOG, "greenlens=trace");
        env::set_var(ENV_LOG_FILE, "/tmp/greenlens-test.log");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:5000");
        assert_eq!(config.log_filter, "greenlens=trace");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/greenlens-test.log")));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_rust_log_is_fallback_filter() {
        clear_env();
        env::set_var("RUST_LOG", "debug");
        assert_eq!(AppConfig::from_env().unwrap().log_filter, "debug");

        env::set_var(ENV_LOG, "greenlens=warn");
        assert_eq!(AppConfig::from_env().unwrap().log_filter, "greenlens=warn");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_url_is_an_error() {
        clear_env();
        env::set_var(ENV_API_URL, "nope");
        assert!(AppConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        clear_env();
        env::set_var(ENV_API_URL, "http://from-env:5000");
        let config = AppConfig::from_env()
            .unwrap()
            .with_cli(Some("http://from-cli:5000/"))
            .unwrap();
        assert_eq!(config.api_base_url, "http://from-cli:5000");

        let unchanged = AppConfig::from_env().unwrap().with_cli(None).unwrap();
        assert_eq!(unchanged.api_base_url, "http://from-env:5000");
        clear_env();
    }
}
