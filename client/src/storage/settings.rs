//! Settings file management

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::errors::ClientError;
use crate::logs::LogLevel;

/// Client settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Backend configuration
    #[serde(default)]
    pub backend: BackendSettings,

    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Check values that cannot be expressed through serde defaults.
    /// The base URL is left to `AppOptions::resolve`, since a command-line
    /// override may replace it.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.backend.timeout_secs == 0 {
            return Err(ClientError::ConfigError(
                "backend.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL for the backend API
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Send passwords as a SHA-256 digest rather than in clear
    #[serde(default = "default_true")]
    pub hash_passwords: bool,
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_true() -> bool {
    true
}

fn default_backend_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
            hash_passwords: true,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Emit JSON lines instead of plain text
    #[serde(default)]
    pub json_format: bool,

    /// Also write daily log files into this directory
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}
