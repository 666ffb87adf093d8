//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub feeds: FeedsConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Local store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("daydash").to_string_lossy().to_string())
        .unwrap_or_else(|| "./daydash_data".to_string())
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Feed source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedsConfig {
    #[serde(default = "default_weather_feed")]
    pub weather: String,

    #[serde(default = "default_quotes_feed")]
    pub quotes: String,

    /// No timeout when unset: a hung fetch leaves its panel loading
    pub request_timeout_ms: Option<u64>,
}

fn default_weather_feed() -> String {
    "data/weather.json".to_string()
}

fn default_quotes_feed() -> String {
    "data/quotes.json".to_string()
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            weather: default_weather_feed(),
            quotes: default_quotes_feed(),
            request_timeout_ms: None,
        }
    }
}

/// Clock configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_clock_interval")]
    pub interval_ms: u64,
}

fn default_clock_interval() -> u64 {
    1000
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_clock_interval(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("daydash").join("config.toml")),
            Some(PathBuf::from("/etc/daydash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Store overrides
        if let Ok(data_dir) = std::env::var("DAYDASH_DATA_DIR") {
            self.store.data_dir = data_dir;
        }

        // Feed overrides
        if let Ok(weather) = std::env::var("DAYDASH_WEATHER_FEED") {
            self.feeds.weather = weather;
        }
        if let Ok(quotes) = std::env::var("DAYDASH_QUOTES_FEED") {
            self.feeds.quotes = quotes;
        }

        // Clock overrides
        if let Ok(interval) = std::env::var("DAYDASH_CLOCK_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.clock.interval_ms = ms;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("DAYDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DAYDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            feeds: FeedsConfig::default(),
            clock: ClockConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Daydash Configuration
#
# Environment variables override these settings:
# - DAYDASH_DATA_DIR
# - DAYDASH_WEATHER_FEED
# - DAYDASH_QUOTES_FEED
# - DAYDASH_CLOCK_INTERVAL_MS
# - DAYDASH_LOG_LEVEL
# - DAYDASH_LOG_FORMAT

[store]
# Directory for persisted dashboard state (tasks, theme)
data_dir = "~/.local/share/daydash"

[feeds]
# Weather document: an http(s) URL or a file path
weather = "data/weather.json"

# Quotes array: an http(s) URL or a file path
quotes = "data/quotes.json"

# Timeout for URL fetches (ms); omit for no timeout
# request_timeout_ms = 5000

[clock]
# How often the clock line refreshes (ms)
interval_ms = 1000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path; defaults to daydash.log in the data directory
# file = "/var/log/daydash/daydash.log"
"#
    .to_string()
}
