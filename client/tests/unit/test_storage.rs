//! Local state and command flow tests

mod common;

use std::sync::Arc;

use common::{device_json, temp_dir, user_json, FakeApi, Reply};
use openapi_client::UserRole;
use riversong::app::cli::{Command, DevicesCommand};
use riversong::app::commands::execute;
use riversong::app::context::AppContext;
use riversong::app::options::AppOptions;
use riversong::errors::ClientError;
use riversong::storage::layout::StorageLayout;
use riversong::storage::session::{load_session, save_session, Session};
use riversong::storage::settings::Settings;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

fn context(name: &str, reply: Reply) -> (AppContext, Arc<FakeApi>) {
    let layout = StorageLayout::new(temp_dir(name));
    let options = AppOptions::resolve(&Settings::default(), layout, None).unwrap();
    let api = Arc::new(FakeApi::new(reply));
    (AppContext::with_api(options, api.clone(), None), api)
}

#[tokio::test]
async fn test_settings_file_defaults_when_missing() {
    let layout = StorageLayout::new(temp_dir("settings-missing"));
    let settings: Settings = assert_ok!(layout.settings_file().read_json_or_default().await);
    assert_eq!(settings.backend.base_url, "http://localhost:5000/");
    assert_ok!(settings.validate());
}

#[tokio::test]
async fn test_settings_file_is_read() {
    let dir = temp_dir("settings-read");
    std::fs::write(
        dir.join("settings.json"),
        r#"{"log_level": "debug", "backend": {"base_url": "https://hub.local:8443", "timeout_secs": 5}}"#,
    )
    .unwrap();

    let settings: Settings = assert_ok!(
        StorageLayout::new(&dir)
            .settings_file()
            .read_json_or_default()
            .await
    );
    assert_eq!(settings.backend.base_url, "https://hub.local:8443");
    assert_eq!(settings.backend.timeout_secs, 5);
    assert_eq!(settings.log_level.to_filter_string(), "debug");
}

#[tokio::test]
async fn test_session_persists_and_is_private() {
    let layout = StorageLayout::new(temp_dir("session"));
    let file = layout.session_file();

    let mut session = Session::default();
    session.set_auth_token("tok-1");
    assert_ok!(save_session(&file, &session).await);

    let loaded = assert_ok!(load_session(&file).await);
    assert_eq!(loaded, session);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(file.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[tokio::test]
async fn test_login_command_stores_user() {
    let (ctx, api) = context("login", Reply::ok(user_json()));

    let output = assert_ok!(
        execute(
            &ctx,
            Command::Login {
                username: "river".to_string(),
                password: Some("secret".to_string()),
                save_token: Some("tok-7".to_string()),
            },
            false,
        )
        .await
    );
    assert_eq!(output, "Welcome, river!");
    assert_eq!(api.calls(), vec!["login river"]);

    let session = assert_ok!(ctx.session().await);
    assert_eq!(session.username(), Some("river"));
    assert_eq!(session.user_role(), Some(UserRole::Parent));
    assert_eq!(assert_ok!(ctx.token().await).expose_secret(), "tok-7");

    let output = assert_ok!(execute(&ctx, Command::Logout, false).await);
    assert_eq!(output, "Logged out.");
    assert!(assert_ok!(ctx.session().await).username().is_none());
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let (ctx, api) = context("login-empty", Reply::ok(user_json()));

    let err = assert_err!(
        execute(
            &ctx,
            Command::Login {
                username: String::new(),
                password: None,
                save_token: None,
            },
            false,
        )
        .await
    );
    assert!(matches!(err, ClientError::ValidationError(ref m) if m == "Please enter username and password."));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_authenticated_command_without_token() {
    let (ctx, api) = context("no-token", Reply::ok(json!([])));

    let err = assert_err!(execute(&ctx, Command::Devices(DevicesCommand::List), false).await);
    assert!(matches!(err, ClientError::NotLoggedIn(_)));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_set_token_then_list_devices() {
    let (ctx, api) = context(
        "set-token",
        Reply::ok(json!([device_json("lamp-1", true)])),
    );

    assert_ok!(
        execute(
            &ctx,
            Command::SetToken {
                bearer: "tok-42".to_string(),
            },
            false,
        )
        .await
    );

    let output = assert_ok!(execute(&ctx, Command::Devices(DevicesCommand::List), true).await);
    let devices: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(devices[0]["id"], "lamp-1");
    assert_eq!(devices[0]["isOn"], true);
    assert_eq!(api.calls(), vec!["devices tok-42"]);
}

#[tokio::test]
async fn test_token_override_wins() {
    let layout = StorageLayout::new(temp_dir("override"));
    let options = AppOptions::resolve(&Settings::default(), layout, None).unwrap();
    let api = Arc::new(FakeApi::new(Reply::ok(device_json("fan-2", false))));
    let ctx = AppContext::with_api(
        options,
        api.clone(),
        Some(SecretString::from("cli-token".to_string())),
    );

    assert_ok!(
        execute(
            &ctx,
            Command::Devices(DevicesCommand::Brightness {
                device_id: "fan-2".to_string(),
                level: 30,
            }),
            false,
        )
        .await
    );
    assert_eq!(api.calls(), vec!["control fan-2 set_brightness cli-token"]);
}

#[tokio::test]
async fn test_non_finite_temperature_is_not_sent() {
    let layout = StorageLayout::new(temp_dir("temperature-nan"));
    let options = AppOptions::resolve(&Settings::default(), layout, None).unwrap();
    let api = Arc::new(FakeApi::new(Reply::ok(device_json("heater", true))));
    let ctx = AppContext::with_api(
        options,
        api.clone(),
        Some(SecretString::from("cli-token".to_string())),
    );

    for celsius in [f32::NAN, f32::INFINITY] {
        let err = assert_err!(
            execute(
                &ctx,
                Command::Devices(DevicesCommand::Temperature {
                    device_id: "heater".to_string(),
                    celsius,
                }),
                false,
            )
            .await
        );
        assert!(matches!(err, ClientError::ValidationError(_)));
    }
    assert!(api.calls().is_empty());
}
