//! API models

pub mod ai;
pub mod auth;
pub mod device;
pub mod user;

pub use ai::{AudioProcessRequest, AudioProcessResponse, ImageAnalyzeRequest, ImageAnalyzeResponse};
pub use auth::{LoginRequest, RegisterRequest};
pub use device::{Device, DeviceControlRequest};
pub use user::{User, UserRole};

use chrono::{DateTime, Utc};

/// Convert a Unix timestamp in milliseconds to a UTC datetime
pub fn from_unix_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

