//! Error types for the River Song client

use thiserror::Error;
use tracing::error;

use crate::constants::{
    ERROR_FORBIDDEN, ERROR_GENERIC, ERROR_NETWORK_UNAVAILABLE, ERROR_NOT_FOUND,
    ERROR_SERVER, ERROR_TIMEOUT, ERROR_UNAUTHORIZED,
};

/// Main error type for the client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a failure status, or with no body
    #[error("{context}: {status} - {body}")]
    Status {
        context: String,
        status: u16,
        body: String,
    },

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not logged in: {0}")]
    NotLoggedIn(String),
}

/// Coarse failure classes used to pick a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NetworkUnavailable,
    Timeout,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    Other,
}

impl ClientError {
    /// Build a status failure for the given operation context
    pub fn status(context: impl Into<String>, status: u16, body: Option<String>) -> Self {
        let body = body
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());
        ClientError::Status {
            context: context.into(),
            status,
            body,
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Classify the error by status code or transport failure
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::HttpError(e) if e.is_timeout() => FailureKind::Timeout,
            ClientError::HttpError(e) if e.status().is_none() => {
                if e.is_connect() || e.is_request() || e.is_body() {
                    FailureKind::NetworkUnavailable
                } else {
                    FailureKind::Other
                }
            }
            ClientError::IoError(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                FailureKind::Timeout
            }
            ClientError::IoError(_) => FailureKind::NetworkUnavailable,
            ClientError::NotLoggedIn(_) => FailureKind::Unauthorized,
            _ => match self.status_code() {
                Some(code) => kind_for_status(code),
                None => FailureKind::Other,
            },
        }
    }
}

fn kind_for_status(code: u16) -> FailureKind {
    match code {
        401 => FailureKind::Unauthorized,
        403 => FailureKind::Forbidden,
        404 => FailureKind::NotFound,
        500 => FailureKind::ServerError,
        _ => FailureKind::Other,
    }
}

/// Static user-facing message for a failure class
pub fn message_for(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::NetworkUnavailable => ERROR_NETWORK_UNAVAILABLE,
        FailureKind::Timeout => ERROR_TIMEOUT,
        FailureKind::Unauthorized => ERROR_UNAUTHORIZED,
        FailureKind::Forbidden => ERROR_FORBIDDEN,
        FailureKind::NotFound => ERROR_NOT_FOUND,
        FailureKind::ServerError => ERROR_SERVER,
        FailureKind::Other => ERROR_GENERIC,
    }
}

/// Map an error to a message fit for showing to the user
pub fn friendly_message(err: &ClientError) -> &'static str {
    message_for(err.kind())
}

/// Log an error with an optional message
pub fn log_exception(err: &ClientError, message: Option<&str>) {
    let message = message.unwrap_or("An unexpected error occurred.");
    error!(error = %err, "{}", message);
}
