//! Repository unit tests

mod common;

use std::sync::Arc;

use common::{device_json, token, user_json, FakeApi, Reply};
use openapi_client::{
    AudioProcessRequest, Device, ImageAnalyzeRequest, LoginRequest, User, UserRole,
};
use riversong::errors::{friendly_message, ClientError, FailureKind};
use riversong::home::control::DeviceCommand;
use riversong::repository::{AiRepository, SmartHomeRepository, UserRepository};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

fn login_request() -> LoginRequest {
    LoginRequest {
        username: "river".to_string(),
        password_hash: "hash".to_string(),
    }
}

#[tokio::test]
async fn test_login_success_returns_body_unchanged() {
    let api = Arc::new(FakeApi::new(Reply::ok(user_json())));
    let repo = UserRepository::new(api.clone());

    let user = assert_ok!(repo.login_user(&login_request()).await);
    let expected: User = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user, expected);
    assert_eq!(user.role, UserRole::Parent);
    assert_eq!(api.calls(), vec!["login river"]);
}

#[tokio::test]
async fn test_login_failure_includes_status_and_body() {
    let api = Arc::new(FakeApi::new(Reply::error(401, "invalid credentials")));
    let repo = UserRepository::new(api);

    let err = assert_err!(repo.login_user(&login_request()).await);
    assert_eq!(err.to_string(), "Login failed: 401 - invalid credentials");
    assert_eq!(err.kind(), FailureKind::Unauthorized);
    assert_eq!(
        friendly_message(&err),
        "Authentication failed. Please log in again."
    );
}

#[tokio::test]
async fn test_success_without_body_is_failure() {
    let api = Arc::new(FakeApi::new(Reply::empty(200)));
    let repo = UserRepository::new(api);

    let err = assert_err!(repo.get_current_user(&token("tok")).await);
    assert_eq!(
        err.to_string(),
        "Failed to fetch user profile: 200 - Unknown error"
    );
    assert_eq!(err.status_code(), Some(200));
}

#[tokio::test]
async fn test_transport_failure_is_wrapped_unchanged() {
    let api = Arc::new(FakeApi::new(Reply::Fail(std::io::ErrorKind::ConnectionRefused)));
    let repo = SmartHomeRepository::new(api);

    let err = assert_err!(repo.get_all_devices(&token("tok")).await);
    match &err {
        ClientError::IoError(e) => {
            assert_eq!(e.kind(), std::io::ErrorKind::ConnectionRefused);
            assert_eq!(e.to_string(), "simulated failure");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        friendly_message(&err),
        "Network unavailable. Please check your connection."
    );
}

#[tokio::test]
async fn test_register_failure_context() {
    let api = Arc::new(FakeApi::new(Reply::error(409, "username taken")));
    let repo = UserRepository::new(api);

    let request = openapi_client::RegisterRequest {
        username: "river".to_string(),
        email: "river@example.com".to_string(),
        password_hash: "hash".to_string(),
        first_name: None,
        last_name: None,
        role: UserRole::Child,
    };
    let err = assert_err!(repo.register_user(&request).await);
    assert_eq!(err.to_string(), "Registration failed: 409 - username taken");
    assert_eq!(
        friendly_message(&err),
        "An unexpected error occurred. Please try again."
    );
}

#[tokio::test]
async fn test_list_devices_passes_token() {
    let body = json!([device_json("a", true), device_json("b", false)]);
    let api = Arc::new(FakeApi::new(Reply::ok(body)));
    let repo = SmartHomeRepository::new(api.clone());

    let devices: Vec<Device> = assert_ok!(repo.get_all_devices(&token("tok-9")).await);
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[1].is_on, Some(false));
    assert_eq!(api.calls(), vec!["devices tok-9"]);
}

#[tokio::test]
async fn test_device_failure_names_device() {
    let api = Arc::new(FakeApi::new(Reply::error(404, "no such device")));
    let repo = SmartHomeRepository::new(api);

    let err = assert_err!(repo.get_device_by_id(&token("tok"), "lamp-7").await);
    assert_eq!(
        err.to_string(),
        "Failed to fetch device lamp-7: 404 - no such device"
    );
    assert_eq!(friendly_message(&err), "Resource not found.");
}

#[tokio::test]
async fn test_control_device() {
    let api = Arc::new(FakeApi::new(Reply::ok(device_json("lamp-1", true))));
    let repo = SmartHomeRepository::new(api.clone());

    let request = DeviceCommand::TurnOn.to_request();
    let device = assert_ok!(repo.control_device(&token("tok"), "lamp-1", &request).await);
    assert_eq!(device.id, "lamp-1");
    assert_eq!(api.calls(), vec!["control lamp-1 turn_on tok"]);

    let api = Arc::new(FakeApi::new(Reply::error(500, "relay offline")));
    let repo = SmartHomeRepository::new(api);
    let err = assert_err!(repo.control_device(&token("tok"), "lamp-1", &request).await);
    assert_eq!(
        err.to_string(),
        "Failed to control device lamp-1: 500 - relay offline"
    );
    assert_eq!(friendly_message(&err), "Server error. Please try again later.");
}

#[tokio::test]
async fn test_ai_repository() {
    let api = Arc::new(FakeApi::new(Reply::ok(json!({
        "success": true,
        "message": "processed",
        "recognizedText": "turn on the lights"
    }))));
    let repo = AiRepository::new(api.clone());

    let response = assert_ok!(
        repo.process_audio(&token("tok"), &AudioProcessRequest::new("AAAA".to_string()))
            .await
    );
    assert_eq!(response.recognized_text.as_deref(), Some("turn on the lights"));
    assert_eq!(api.calls(), vec!["audio voice_command tok"]);

    let api = Arc::new(FakeApi::new(Reply::error(403, "")));
    let repo = AiRepository::new(api);
    let err = assert_err!(
        repo.analyze_image(&token("tok"), &ImageAnalyzeRequest::new("AAAA".to_string()))
            .await
    );
    assert_eq!(err.to_string(), "Image analysis failed: 403 - Unknown error");
    assert_eq!(
        friendly_message(&err),
        "You don't have permission to perform this action."
    );
}
