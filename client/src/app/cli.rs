//! Command-line interface definitions and parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use openapi_client::UserRole;

use crate::constants::DEFAULT_TEMPERATURE_CELSIUS;

#[derive(Parser, Debug)]
#[command(name = "riversong", author, version, about = "River Song smart-home client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Data directory holding settings.json and session.json
    #[arg(short, long, global = true, env = "RIVERSONG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Backend base URL, overriding settings.json
    #[arg(long, global = true, env = "RIVERSONG_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token, overriding the stored session
    #[arg(long, global = true, env = "RIVERSONG_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and remember the user
    Login {
        #[arg(short, long, default_value = "")]
        username: String,

        #[arg(short, long, env = "RIVERSONG_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Bearer token to store alongside the user
        #[arg(long = "save-token")]
        save_token: Option<String>,
    },
    /// Create a new account
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "RIVERSONG_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// ADMIN, PARENT, CHILD or GUEST
        #[arg(long, default_value = "CHILD", value_parser = parse_register_role)]
        role: UserRole,
    },
    /// Forget the stored session
    Logout,
    /// Store a bearer token for later calls
    SetToken {
        #[arg(value_name = "TOKEN")]
        bearer: String,
    },
    /// Show the logged-in user's profile
    Me,
    /// Profile and device overview
    Dashboard,
    /// List and control devices
    #[command(subcommand)]
    Devices(DevicesCommand),
    /// Audio and image analysis
    #[command(subcommand)]
    Ai(AiCommand),
    /// Print version information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum DevicesCommand {
    /// List all devices
    List,
    /// Show one device
    Get { device_id: String },
    /// Send an arbitrary command, e.g. `control lamp-1 set_brightness 40`
    Control {
        device_id: String,
        command: String,
        value: Option<String>,
    },
    /// Turn a device on
    On { device_id: String },
    /// Turn a device off
    Off { device_id: String },
    /// Set brightness (0-100)
    Brightness {
        device_id: String,
        #[arg(allow_negative_numbers = true)]
        level: i32,
    },
    /// Set target temperature in Celsius
    Temperature {
        device_id: String,
        #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_TEMPERATURE_CELSIUS)]
        celsius: f32,
    },
}

#[derive(Subcommand, Debug)]
pub enum AiCommand {
    /// Send an audio clip for processing
    Audio {
        file: PathBuf,

        #[arg(long, default_value = openapi_client::models::ai::DEFAULT_AUDIO_FORMAT)]
        format: String,

        /// voice_command or sound_classification
        #[arg(long, default_value = openapi_client::models::ai::DEFAULT_AUDIO_KIND)]
        kind: String,
    },
    /// Send an image for analysis
    Image {
        file: PathBuf,

        /// object_detection, facial_recognition or activity_recognition
        #[arg(long, default_value = openapi_client::models::ai::DEFAULT_ANALYSIS_TYPE)]
        analysis: String,
    },
}

/// Roles a new account may be created with
fn parse_register_role(raw: &str) -> Result<UserRole, String> {
    match raw.parse::<UserRole>()? {
        UserRole::Unknown => Err(format!("Invalid user role: {}", raw)),
        role => Ok(role),
    }
}
