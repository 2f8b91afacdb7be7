//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dashboard data source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    /// CSV file replacing the built-in dataset
    pub data_file: Option<String>,
}

/// Page-view telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Analytics endpoint receiving page-view events
    pub url: Option<String>,

    #[serde(default = "default_telemetry_timeout")]
    pub timeout_ms: u64,
}

fn default_telemetry_timeout() -> u64 {
    2000
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: None,
            timeout_ms: default_telemetry_timeout(),
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

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
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
    ///
    /// Nothing is logged here: this runs before the subscriber exists, so
    /// the outcome is returned for the caller to report once logging is up.
    pub fn load_default() -> ConfigLoad {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("arenaboard").join("config.toml")),
            Some(PathBuf::from("/etc/arenaboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, |key| std::env::var(key).ok())
    }

    /// First candidate that exists and parses, then `lookup` overrides
    fn load_first(
        candidates: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigLoad {
        let mut errors = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    config.apply_overrides(&lookup);
                    return ConfigLoad {
                        config,
                        source: Some(path.clone()),
                        errors,
                    };
                }
                Err(e) => errors.push(e),
            }
        }

        let mut config = Config::default();
        config.apply_overrides(&lookup);
        ConfigLoad {
            config,
            source: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (environment in production)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("ARENABOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ARENABOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Dashboard overrides
        if let Some(path) = lookup("ARENABOARD_DATA_FILE") {
            self.dashboard.data_file = Some(path);
        }

        // Telemetry overrides; setting a URL turns telemetry on
        if let Some(url) = lookup("ARENABOARD_TELEMETRY_URL") {
            self.telemetry.url = Some(url);
            self.telemetry.enabled = true;
        }
        if let Some(enabled) = lookup("ARENABOARD_TELEMETRY_ENABLED") {
            self.telemetry.enabled = enabled.to_lowercase() != "false" && enabled != "0";
        }

        // Logging overrides
        if let Some(level) = lookup("ARENABOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ARENABOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of `Config::load_default`
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Candidate files that exist but could not be loaded
    pub errors: Vec<ConfigError>,
}

impl ConfigLoad {
    /// Report where the config came from and every file that was rejected
    pub fn log(&self) {
        for error in &self.errors {
            tracing::warn!("Ignoring config file: {}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
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
    r#"# Arenaboard Configuration
#
# Environment variables override these settings:
# - ARENABOARD_HOST
# - ARENABOARD_PORT
# - ARENABOARD_DATA_FILE
# - ARENABOARD_TELEMETRY_URL
# - ARENABOARD_TELEMETRY_ENABLED
# - ARENABOARD_LOG_LEVEL
# - ARENABOARD_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 3000

[dashboard]
# CSV file (date,Google,OpenAI,...) replacing the built-in dataset
# data_file = "./lmarena_top_scores_by_provider.csv"

[telemetry]
# Send a page-view event per dashboard load
enabled = false

# Analytics endpoint receiving JSON page-view events
# url = "http://localhost:9000/collect"

# Request timeout in milliseconds
timeout_ms = 2000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
