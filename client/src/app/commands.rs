//! Command execution
//!
//! Each command drives one or two repository calls and renders the result.

use openapi_client::{AudioProcessRequest, ImageAnalyzeRequest, LoginRequest, RegisterRequest};
use secrecy::SecretString;
use serde::Serialize;
use tracing::{debug, info};

use crate::app::cli::{AiCommand, Command, DevicesCommand};
use crate::app::context::AppContext;
use crate::app::render;
use crate::authn::credentials::Credentials;
use crate::errors::ClientError;
use crate::filesys::file::File;
use crate::home::control::DeviceCommand;
use crate::home::summary::DeviceSummary;
use crate::storage::session::{clear_session, save_session};
use crate::utils::{encode_base64, version_info};

/// Run a command and return what should be printed on stdout
pub async fn execute(ctx: &AppContext, command: Command, json: bool) -> Result<String, ClientError> {
    match command {
        Command::Login {
            username,
            password,
            save_token,
        } => login(ctx, &username, password, save_token, json).await,
        Command::Register {
            username,
            email,
            password,
            first_name,
            last_name,
            role,
        } => {
            let credentials = Credentials::new(&username, secret(password))?;
            let request = RegisterRequest {
                username: credentials.username.clone(),
                email: email.trim().to_string(),
                password_hash: credentials.password_hash(ctx.options.hash_passwords),
                first_name,
                last_name,
                role,
            };
            let user = ctx.users.register_user(&request).await?;
            info!("Registered user: {}", user.username);
            output(json, &user, |u| {
                format!("Account created for {}.\n{}", u.username, render::user(u))
            })
        }
        Command::Logout => {
            clear_session(&ctx.session_file).await?;
            info!("Session cleared");
            Ok("Logged out.".to_string())
        }
        Command::SetToken { bearer } => {
            let mut session = ctx.session().await?;
            session.set_auth_token(&bearer);
            if session.auth_token().is_none() {
                return Err(ClientError::ValidationError(
                    "Token must not be empty".to_string(),
                ));
            }
            save_session(&ctx.session_file, &session).await?;
            Ok("Token saved.".to_string())
        }
        Command::Me => {
            let token = ctx.token().await?;
            let user = ctx.users.get_current_user(&token).await?;
            output(json, &user, render::user)
        }
        Command::Dashboard => dashboard(ctx, json).await,
        Command::Devices(command) => devices(ctx, command, json).await,
        Command::Ai(command) => ai(ctx, command, json).await,
        Command::Version => {
            let version = version_info();
            output(json, &version, |v| {
                format!("riversong {} ({}, built {})", v.version, v.git_hash, v.build_time)
            })
        }
    }
}

async fn login(
    ctx: &AppContext,
    username: &str,
    password: Option<String>,
    save_token: Option<String>,
    json: bool,
) -> Result<String, ClientError> {
    let credentials = Credentials::new(username, secret(password))?;
    debug!("Attempting login for user: {}", credentials.username);

    let request = LoginRequest {
        username: credentials.username.clone(),
        password_hash: credentials.password_hash(ctx.options.hash_passwords),
    };
    let user = ctx.users.login_user(&request).await?;

    let mut session = ctx.session().await?;
    session.set_user(&user);
    if let Some(token) = save_token.as_deref() {
        session.set_auth_token(token);
    }
    save_session(&ctx.session_file, &session).await?;
    info!("Login successful for user: {}", user.username);

    output(json, &user, |u| format!("Welcome, {}!", u.username))
}

#[derive(Serialize)]
struct Dashboard<'a> {
    user: &'a openapi_client::User,
    summary: &'a DeviceSummary,
}

async fn dashboard(ctx: &AppContext, json: bool) -> Result<String, ClientError> {
    let token = ctx.token().await?;
    let user = ctx.users.get_current_user(&token).await?;
    let devices = ctx.smart_home.get_all_devices(&token).await?;
    let summary = DeviceSummary::from_devices(&devices);
    debug!("Smart home summary: {} active devices", summary.active);

    let view = Dashboard {
        user: &user,
        summary: &summary,
    };
    output(json, &view, |v| {
        format!("{}\n\n{}", render::user(v.user), render::summary(v.summary))
    })
}

async fn devices(
    ctx: &AppContext,
    command: DevicesCommand,
    json: bool,
) -> Result<String, ClientError> {
    let token = ctx.token().await?;

    let (device_id, control) = match command {
        DevicesCommand::List => {
            let devices = ctx.smart_home.get_all_devices(&token).await?;
            debug!("Devices list updated. Total: {}", devices.len());
            return output(json, &devices, |d| render::devices(d));
        }
        DevicesCommand::Get { device_id } => {
            let device = ctx.smart_home.get_device_by_id(&token, &device_id).await?;
            return output(json, &device, render::device);
        }
        DevicesCommand::Control {
            device_id,
            command,
            value,
        } => {
            let control = DeviceCommand::parse(&command, value.as_deref())?;
            (device_id, control)
        }
        DevicesCommand::On { device_id } => (device_id, DeviceCommand::TurnOn),
        DevicesCommand::Off { device_id } => (device_id, DeviceCommand::TurnOff),
        DevicesCommand::Brightness { device_id, level } => {
            (device_id, DeviceCommand::brightness(level))
        }
        DevicesCommand::Temperature { device_id, celsius } => {
            (device_id, DeviceCommand::temperature(celsius)?)
        }
    };

    info!("Sending command '{}' to device: {}", control, device_id);
    let device = ctx
        .smart_home
        .control_device(&token, &device_id, &control.to_request())
        .await?;
    output(json, &device, render::device)
}

async fn ai(ctx: &AppContext, command: AiCommand, json: bool) -> Result<String, ClientError> {
    let token = ctx.token().await?;

    match command {
        AiCommand::Audio { file, format, kind } => {
            let data = File::new(file).read_bytes().await?;
            let mut request = AudioProcessRequest::new(encode_base64(&data));
            request.format = format;
            request.kind = kind;

            let response = ctx.ai.process_audio(&token, &request).await?;
            output(json, &response, render::audio)
        }
        AiCommand::Image { file, analysis } => {
            let data = File::new(file).read_bytes().await?;
            let mut request = ImageAnalyzeRequest::new(encode_base64(&data));
            request.analysis_type = analysis;

            let response = ctx.ai.analyze_image(&token, &request).await?;
            if json {
                render::to_json(&response)
            } else {
                render::image(&response)
            }
        }
    }
}

fn secret(password: Option<String>) -> SecretString {
    SecretString::from(password.unwrap_or_default())
}

fn output<T: Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String, ClientError> {
    if json {
        render::to_json(value)
    } else {
        Ok(text(value))
    }
}
