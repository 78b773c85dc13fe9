//! Application configuration options

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ClientError;
use crate::http::client::normalize_base_url;
use crate::storage::layout::StorageLayout;
use crate::storage::settings::Settings;

/// Effective options after merging settings.json with command-line flags
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Backend API base URL
    pub backend_base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// Send passwords as a SHA-256 digest
    pub hash_passwords: bool,

    /// Storage layout paths
    pub layout: StorageLayout,
}

impl AppOptions {
    /// Build options from settings, letting an explicit base URL win.
    /// Only the effective base URL is validated.
    pub fn resolve(
        settings: &Settings,
        layout: StorageLayout,
        base_url_override: Option<&str>,
    ) -> Result<Self, ClientError> {
        settings.validate()?;
        let backend_base_url = base_url_override
            .map(str::to_string)
            .unwrap_or_else(|| settings.backend.base_url.clone());
        normalize_base_url(&backend_base_url)?;

        Ok(Self {
            backend_base_url,
            timeout: settings.backend.timeout(),
            hash_passwords: settings.backend.hash_passwords,
            layout,
        })
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            backend_base_url: settings.backend.base_url.clone(),
            timeout: settings.backend.timeout(),
            hash_passwords: settings.backend.hash_passwords,
            layout: StorageLayout::default(),
        }
    }
}

/// Resolve the data directory, defaulting to `~/.riversong`
pub fn storage_layout(data_dir: Option<PathBuf>) -> StorageLayout {
    data_dir.map(StorageLayout::new).unwrap_or_default()
}
