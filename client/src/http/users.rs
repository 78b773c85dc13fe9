//! Authentication and user API client

use openapi_client::{LoginRequest, RegisterRequest, User};
use secrecy::SecretString;

use crate::constants::{ENDPOINT_AUTH_LOGIN, ENDPOINT_AUTH_REGISTER, ENDPOINT_USERS_ME};
use crate::errors::ClientError;
use crate::http::client::{ApiResponse, HttpClient};

impl HttpClient {
    /// Log a user in
    pub async fn login_user(&self, request: &LoginRequest) -> Result<ApiResponse<User>, ClientError> {
        let url = self.endpoint(ENDPOINT_AUTH_LOGIN, &[])?;
        self.post(url, None, request).await
    }

    /// Register a new user
    pub async fn register_user(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<User>, ClientError> {
        let url = self.endpoint(ENDPOINT_AUTH_REGISTER, &[])?;
        self.post(url, None, request).await
    }

    /// Get the profile of the user owning the token
    pub async fn get_current_user(
        &self,
        token: &SecretString,
    ) -> Result<ApiResponse<User>, ClientError> {
        let url = self.endpoint(ENDPOINT_USERS_ME, &[])?;
        self.get(url, token).await
    }
}
