//! Device control commands

use std::fmt;

use openapi_client::DeviceControlRequest;
use serde_json::Value;

use crate::constants::{MAX_BRIGHTNESS_PERCENT, MIN_BRIGHTNESS_PERCENT};
use crate::errors::ClientError;

/// Commands the backend understands
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    TurnOn,
    TurnOff,
    SetTemperature(f32),
    SetBrightness(i32),
    /// Anything else, passed through verbatim
    Custom {
        command: String,
        value: Option<Value>,
    },
}

impl DeviceCommand {
    /// Brightness command, clamped to the valid percentage range
    pub fn brightness(level: i32) -> Self {
        DeviceCommand::SetBrightness(level.clamp(MIN_BRIGHTNESS_PERCENT, MAX_BRIGHTNESS_PERCENT))
    }

    /// Temperature command; the value must be a finite number
    pub fn temperature(celsius: f32) -> Result<Self, ClientError> {
        if !celsius.is_finite() {
            return Err(ClientError::ValidationError(format!(
                "Invalid temperature: {}",
                celsius
            )));
        }
        Ok(DeviceCommand::SetTemperature(celsius))
    }

    /// Build a command from its wire name and an optional raw argument.
    ///
    /// The argument is parsed as JSON when possible (`true`, `22.5`), else
    /// sent as a plain string.
    pub fn parse(command: &str, value: Option<&str>) -> Result<Self, ClientError> {
        let command = command.trim();
        if command.is_empty() {
            return Err(ClientError::ValidationError(
                "Command must not be empty".to_string(),
            ));
        }

        let value = value.map(parse_value);
        match (command, value) {
            ("turn_on", None) => Ok(DeviceCommand::TurnOn),
            ("turn_off", None) => Ok(DeviceCommand::TurnOff),
            ("set_temperature", Some(v)) => match v.as_f64() {
                Some(t) => DeviceCommand::temperature(t as f32),
                None => Err(invalid_value(command, &v)),
            },
            ("set_brightness", Some(v)) => v
                .as_i64()
                .map(|b| DeviceCommand::brightness(b.clamp(i32::MIN as i64, i32::MAX as i64) as i32))
                .ok_or_else(|| invalid_value(command, &v)),
            ("set_temperature" | "set_brightness", None) => Err(ClientError::ValidationError(
                format!("Command '{}' requires a value", command),
            )),
            (command, value) => Ok(DeviceCommand::Custom {
                command: command.to_string(),
                value,
            }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DeviceCommand::TurnOn => "turn_on",
            DeviceCommand::TurnOff => "turn_off",
            DeviceCommand::SetTemperature(_) => "set_temperature",
            DeviceCommand::SetBrightness(_) => "set_brightness",
            DeviceCommand::Custom { command, .. } => command,
        }
    }

    pub fn to_request(&self) -> DeviceControlRequest {
        let value = match self {
            DeviceCommand::TurnOn => Some(Value::Bool(true)),
            DeviceCommand::TurnOff => Some(Value::Bool(false)),
            DeviceCommand::SetTemperature(t) => Some(Value::from(*t as f64)),
            DeviceCommand::SetBrightness(b) => Some(Value::from(*b)),
            DeviceCommand::Custom { value, .. } => value.clone(),
        };
        DeviceControlRequest::new(self.name(), value)
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_request().value {
            Some(value) => write!(f, "{} ({})", self.name(), value),
            None => f.write_str(self.name()),
        }
    }
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn invalid_value(command: &str, value: &Value) -> ClientError {
    ClientError::ValidationError(format!("Invalid value for '{}': {}", command, value))
}
