//! Configuration for the feed viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/lb-feed/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::feed::FeedOptions;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

mod observability;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogRotation, LoggingConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_API_URL: &str = "https://api.listenbrainz.org/1";
const DEFAULT_THEME: &str = "auto";
const DEFAULT_ALERT_TIMEOUT_MS: u64 = 15_000;
const DEFAULT_EVENTS_PER_PAGE: usize = 25;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, used when the mount props do not carry one
    pub api_url: String,

    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Whether to run the TUI (false prints the feed and exits)
    pub enable_tui: bool,

    /// How long each alert toast stays on screen
    pub alert_timeout_ms: u64,

    /// Page size for older/newer page queries
    pub events_per_page: usize,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    api_url: Option<String>,
    theme: Option<String>,
    alert_timeout_ms: Option<u64>,
    events_per_page: Option<usize>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/lb-feed/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("lb-feed").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# lb-feed configuration

# API base URL used when the mount props carry none
api_url = "{api_url}"

# Theme: auto, dracula, nord, gruvbox
theme = "{theme}"

# How long alerts stay on screen (milliseconds)
alert_timeout_ms = {alert_timeout}

# Events requested per page when loading older/newer events
events_per_page = {per_page}

# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            api_url = self.api_url,
            theme = self.theme,
            alert_timeout = self.alert_timeout_ms,
            per_page = self.events_per_page,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file config with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = env("LB_FEED_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let theme = env("LB_FEED_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("LB_FEED_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Zero would expire every alert on the first tick
        let alert_timeout_ms = env("LB_FEED_ALERT_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .filter(|ms| *ms > 0)
            .or(file.alert_timeout_ms.filter(|ms| *ms > 0))
            .unwrap_or(DEFAULT_ALERT_TIMEOUT_MS);

        // Zero would make every page query empty
        let events_per_page = file
            .events_per_page
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_EVENTS_PER_PAGE);

        Self {
            api_url,
            theme,
            enable_tui,
            alert_timeout_ms,
            events_per_page,
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_millis(self.alert_timeout_ms)
    }

    pub fn feed_options(&self) -> FeedOptions {
        FeedOptions {
            fallback_api_url: self.api_url.clone(),
            events_per_page: self.events_per_page,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme: DEFAULT_THEME.to_string(),
            enable_tui: true,
            alert_timeout_ms: DEFAULT_ALERT_TIMEOUT_MS,
            events_per_page: DEFAULT_EVENTS_PER_PAGE,
            logging: LoggingConfig::default(),
        }
    }
}
