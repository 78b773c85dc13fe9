//! User repository

use std::sync::Arc;

use openapi_client::{LoginRequest, RegisterRequest, User};
use secrecy::SecretString;
use tracing::debug;

use crate::errors::ClientError;
use crate::http::service::ApiService;
use crate::repository::{into_result, log_call_error};

/// Authentication and profile operations
#[derive(Clone)]
pub struct UserRepository {
    api: Arc<dyn ApiService>,
}

impl UserRepository {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    pub async fn login_user(&self, request: &LoginRequest) -> Result<User, ClientError> {
        let response = self
            .api
            .login_user(request)
            .await
            .map_err(|e| log_call_error("during login", e))?;

        let user = into_result(response, "Login failed")?;
        debug!("User logged in successfully: {}", user.username);
        Ok(user)
    }

    pub async fn register_user(&self, request: &RegisterRequest) -> Result<User, ClientError> {
        let response = self
            .api
            .register_user(request)
            .await
            .map_err(|e| log_call_error("during registration", e))?;

        let user = into_result(response, "Registration failed")?;
        debug!("User registered successfully: {}", user.username);
        Ok(user)
    }

    pub async fn get_current_user(&self, token: &SecretString) -> Result<User, ClientError> {
        let response = self
            .api
            .get_current_user(token)
            .await
            .map_err(|e| log_call_error("fetching current user", e))?;

        let user = into_result(response, "Failed to fetch user profile")?;
        debug!("Successfully fetched current user profile.");
        Ok(user)
    }
}
