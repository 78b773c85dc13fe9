//! Shared test fixtures

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use openapi_client::{
    AudioProcessRequest, AudioProcessResponse, Device, DeviceControlRequest, ImageAnalyzeRequest,
    ImageAnalyzeResponse, LoginRequest, RegisterRequest, User,
};
use riversong::errors::ClientError;
use riversong::http::{ApiResponse, ApiService};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

pub fn user_json() -> Value {
    json!({
        "id": "u-1",
        "username": "river",
        "email": "river@example.com",
        "firstName": "River",
        "lastName": "Song",
        "role": "PARENT",
        "isActive": true,
        "lastLogin": 1700000000000i64
    })
}

pub fn device_json(id: &str, is_on: bool) -> Value {
    json!({
        "id": id,
        "name": format!("Device {}", id),
        "type": "light",
        "status": if is_on { "online" } else { "offline" },
        "location": "Living Room",
        "isOn": is_on,
        "brightness": 60
    })
}

/// What the fake backend answers with
pub enum Reply {
    Status {
        status: u16,
        body: Option<Value>,
        error_body: Option<String>,
    },
    /// The call itself fails, as when the network is down
    Fail(std::io::ErrorKind),
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Reply::Status {
            status: 200,
            body: Some(body),
            error_body: None,
        }
    }

    pub fn error(status: u16, error_body: &str) -> Self {
        Reply::Status {
            status,
            body: None,
            error_body: Some(error_body.to_string()),
        }
    }

    pub fn empty(status: u16) -> Self {
        Reply::Status {
            status,
            body: None,
            error_body: None,
        }
    }
}

/// An [`ApiService`] answering every call with the same reply
pub struct FakeApi {
    reply: Reply,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T: DeserializeOwned>(&self, call: String) -> Result<ApiResponse<T>, ClientError> {
        self.calls.lock().unwrap().push(call);
        match &self.reply {
            Reply::Status {
                status,
                body,
                error_body,
            } => Ok(ApiResponse {
                status: *status,
                body: body
                    .clone()
                    .map(|b| serde_json::from_value(b).unwrap()),
                error_body: error_body.clone(),
            }),
            Reply::Fail(kind) => Err(ClientError::IoError(std::io::Error::new(
                *kind,
                "simulated failure",
            ))),
        }
    }
}

#[async_trait]
impl ApiService for FakeApi {
    async fn login_user(&self, request: &LoginRequest) -> Result<ApiResponse<User>, ClientError> {
        self.answer(format!("login {}", request.username))
    }

    async fn register_user(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<User>, ClientError> {
        self.answer(format!("register {}", request.username))
    }

    async fn get_current_user(
        &self,
        token: &SecretString,
    ) -> Result<ApiResponse<User>, ClientError> {
        self.answer(format!("me {}", token.expose_secret()))
    }

    async fn get_all_devices(
        &self,
        token: &SecretString,
    ) -> Result<ApiResponse<Vec<Device>>, ClientError> {
        self.answer(format!("devices {}", token.expose_secret()))
    }

    async fn get_device_by_id(
        &self,
        token: &SecretString,
        device_id: &str,
    ) -> Result<ApiResponse<Device>, ClientError> {
        self.answer(format!("device {} {}", device_id, token.expose_secret()))
    }

    async fn control_device(
        &self,
        token: &SecretString,
        device_id: &str,
        request: &DeviceControlRequest,
    ) -> Result<ApiResponse<Device>, ClientError> {
        self.answer(format!(
            "control {} {} {}",
            device_id,
            request.command,
            token.expose_secret()
        ))
    }

    async fn process_audio(
        &self,
        token: &SecretString,
        request: &AudioProcessRequest,
    ) -> Result<ApiResponse<AudioProcessResponse>, ClientError> {
        self.answer(format!("audio {} {}", request.kind, token.expose_secret()))
    }

    async fn analyze_image(
        &self,
        token: &SecretString,
        request: &ImageAnalyzeRequest,
    ) -> Result<ApiResponse<ImageAnalyzeResponse>, ClientError> {
        self.answer(format!(
            "image {} {}",
            request.analysis_type,
            token.expose_secret()
        ))
    }
}

pub fn token(raw: &str) -> SecretString {
    SecretString::from(raw.to_string())
}

/// A fresh, empty directory under the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "riversong-test-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
