//! File-backed `tracing` setup.
//!
//! The TUI owns stdout, so log lines go to a file instead:
//! `GREENLENS_LOG_FILE` when set, else `<data_local_dir>/greenlens/greenlens.log`.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};
use crate::error::ConfigError;

const LOG_FILE_NAME: &str = "greenlens.log";

/// Where logs go when no file is configured.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("greenlens").join(LOG_FILE_NAME))
}

/// Build the filter, falling back to the default directive when the
/// configured one does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn open_log_file(config: &AppConfig) -> Result<(PathBuf, File), ConfigError> {
    let path = match &config.log_file {
        Some(path) => path.clone(),
        None => default_log_path().ok_or(ConfigError::NoLogDirectory)?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::LogFile {
            path: path.clone(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ConfigError::LogFile {
            path: path.clone(),
            source,
        })?;
    Ok((path, file))
}

/// Install the global subscriber.
///
/// Returns the log path on success. Callers treat an error as "run without
/// logs"; nothing else depends on logging being up.
pub fn init_logging(config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let (path, file) = open_log_file(config)?;

    let format = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(format)
        .try_init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api = %config.api_base_url,
        "greenlens starting"
    );
    Ok(path)
}
