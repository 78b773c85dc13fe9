//! Smart-home device models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::from_unix_millis;

/// A smart-home device as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique device ID
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Device type (e.g. "light", "thermostat", "camera", "sensor")
    #[serde(rename = "type")]
    pub device_type: String,

    /// Operational status (e.g. "online", "offline", "on", "off")
    pub status: String,

    /// Room or area the device sits in
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_on: Option<bool>,

    /// Celsius, for thermostats and temperature sensors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// 0-100 for lights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_level: Option<i32>,

    /// Stream URL for cameras
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,

    /// Unix timestamp in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
}

impl Device {
    /// Last update time, if the backend reported one
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated.and_then(from_unix_millis)
    }
}

/// Command sent to a device through the control endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceControlRequest {
    /// e.g. "turn_on", "turn_off", "set_temperature", "set_brightness"
    pub command: String,

    /// Command argument, if any (bool, number, string...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl DeviceControlRequest {
    pub fn new(command: impl Into<String>, value: Option<serde_json::Value>) -> Self {
        Self {
            command: command.into(),
            value,
        }
    }
}
