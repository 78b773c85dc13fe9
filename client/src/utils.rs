//! Utility functions

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Version information for the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
}

/// Get version information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: option_env!("GIT_HASH").unwrap_or("unknown").to_string(),
        build_time: option_env!("BUILD_TIME").unwrap_or("unknown").to_string(),
    }
}

/// Encode raw media for the analysis endpoints
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Render a timestamp in local time, or a dash when unknown
pub fn format_timestamp(at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(at) => at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}
