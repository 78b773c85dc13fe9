//! River Song - Entry Point
//!
//! Command-line client for the River Song smart-home backend.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use secrecy::SecretString;
use tracing::{debug, error};

use riversong::app::cli::Cli;
use riversong::app::commands::execute;
use riversong::app::context::AppContext;
use riversong::app::options::{storage_layout, AppOptions};
use riversong::errors::{friendly_message, log_exception, ClientError};
use riversong::logs::{init_logging, LogLevel, LogOptions};
use riversong::storage::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Retrieve the settings file
    let layout = storage_layout(cli.data_dir.clone());
    let settings = match layout.settings_file().read_json_or_default::<Settings>().await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Unable to read settings file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let log_options = LogOptions {
        log_level: if cli.verbose {
            LogLevel::Debug
        } else {
            settings.log_level
        },
        json_format: settings.logging.json_format,
        log_dir: settings.logging.log_dir.clone(),
    };
    let _log_guard = match init_logging(log_options) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };
    install_panic_hook();

    match run(cli, settings, layout).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_exception(&e, Some("Command failed"));
            eprintln!("{}", user_message(&e).red());
            ExitCode::FAILURE
        }
    }
}

async fn run(
    cli: Cli,
    settings: Settings,
    layout: riversong::storage::layout::StorageLayout,
) -> Result<String, ClientError> {
    let options = AppOptions::resolve(&settings, layout, cli.base_url.as_deref())?;
    debug!("Running with options: {:?}", options);

    let token = cli.token.map(SecretString::from);
    let ctx = AppContext::init(options, token)?;
    execute(&ctx, cli.command, cli.json).await
}

/// Input, configuration and local file problems are shown verbatim;
/// backend failures get the friendly message.
fn user_message(err: &ClientError) -> String {
    match err {
        ClientError::ValidationError(msg) => msg.clone(),
        ClientError::ConfigError(_) | ClientError::UrlError(_) | ClientError::IoError(_) => {
            err.to_string()
        }
        _ => friendly_message(err).to_string(),
    }
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let thread = std::thread::current();
        error!(
            "Uncaught panic on thread {}: {}",
            thread.name().unwrap_or("<unnamed>"),
            info
        );
        default_hook(info);
    }));
}
