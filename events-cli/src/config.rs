//! Configuration loading for vet-events.
//!
//! Configuration is loaded from a TOML file (default: `events.toml` in the
//! platform config directory). Every section and field is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration for vet-events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Simulated host configuration.
    #[serde(default)]
    pub host: HostConfig,
    /// Simulated network configuration.
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
    /// Placeholder sync job configuration.
    #[serde(default)]
    pub job: JobConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulated host configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    /// Platform API level (default: 34).
    #[serde(default = "default_api_level")]
    pub api_level: u32,
}

/// Simulated network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectivityConfig {
    /// Whether an internet-capable network is active (default: true).
    #[serde(default = "default_online")]
    pub online: bool,
}

/// Placeholder sync job configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JobConfig {
    /// Heartbeat interval in milliseconds (default: 1000).
    #[serde(default = "default_heartbeat_ms")]
    pub heartbeat_ms: u64,
    /// Grace period for a stopped job before it is aborted, in milliseconds
    /// (default: 5000).
    #[serde(default = "default_stop_timeout_ms")]
    pub stop_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG` (default: "info").
    #[serde(default = "default_filter")]
    pub filter: String,
}

// Default value functions
fn default_api_level() -> u32 {
    34
}

fn default_online() -> bool {
    true
}

fn default_heartbeat_ms() -> u64 {
    1000
}

fn default_stop_timeout_ms() -> u64 {
    5000
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            api_level: default_api_level(),
        }
    }
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            online: default_online(),
        }
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            heartbeat_ms: default_heartbeat_ms(),
            stop_timeout_ms: default_stop_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to parse configuration file.
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.host.api_level, 34);
        assert!(config.connectivity.online);
        assert_eq!(config.job.heartbeat_ms, 1000);
        assert_eq!(config.job.stop_timeout_ms, 5000);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn config_from_toml_string() {
        let toml = r#"
[host]
api_level = 22

[connectivity]
online = false

[job]
heartbeat_ms = 250
stop_timeout_ms = 100

[logging]
filter = "debug"
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.host.api_level, 22);
        assert!(!config.connectivity.online);
        assert_eq!(config.job.heartbeat_ms, 250);
        assert_eq!(config.job.stop_timeout_ms, 100);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn config_missing_sections_use_defaults() {
        let config: Config = toml::from_str("[host]\napi_level = 25\n").unwrap();
        assert_eq!(config.host.api_level, 25);
        assert!(config.connectivity.online);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.host.api_level, 34);
    }

    #[test]
    fn missing_file_is_an_error_when_required() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.toml");
        std::fs::write(&path, "[host]\napi_level = \"high\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
