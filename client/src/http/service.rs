//! Backend API service seam
//!
//! Repositories talk to the backend through [`ApiService`] so they can be
//! exercised against a fake in tests.

use async_trait::async_trait;
use openapi_client::{
    AudioProcessRequest, AudioProcessResponse, Device, DeviceControlRequest, ImageAnalyzeRequest,
    ImageAnalyzeResponse, LoginRequest, RegisterRequest, User,
};
use secrecy::SecretString;

use crate::errors::ClientError;
use crate::http::client::{ApiResponse, HttpClient};

/// One method per backend endpoint
#[async_trait]
pub trait ApiService: Send + Sync {
    async fn login_user(&self, request: &LoginRequest) -> Result<ApiResponse<User>, ClientError>;

    async fn register_user(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<User>, ClientError>;

    async fn get_current_user(&self, token: &SecretString)
        -> Result<ApiResponse<User>, ClientError>;

    async fn get_all_devices(
        &self,
        token: &SecretString,
    ) -> Result<ApiResponse<Vec<Device>>, ClientError>;

    async fn get_device_by_id(
        &self,
        token: &SecretString,
        device_id: &str,
    ) -> Result<ApiResponse<Device>, ClientError>;

    async fn control_device(
        &self,
        token: &SecretString,
        device_id: &str,
        request: &DeviceControlRequest,
    ) -> Result<ApiResponse<Device>, ClientError>;

    async fn process_audio(
        &self,
        token: &SecretString,
        request: &AudioProcessRequest,
    ) -> Result<ApiResponse<AudioProcessResponse>, ClientError>;

    async fn analyze_image(
        &self,
        token: &SecretString,
        request: &ImageAnalyzeRequest,
    ) -> Result<ApiResponse<ImageAnalyzeResponse>, ClientError>;
}

#[async_trait]
impl ApiService for HttpClient {
    async fn login_user(&self, request: &LoginRequest) -> Result<ApiResponse<User>, ClientError> {
        HttpClient::login_user(self, request).await
    }

    async fn register_user(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<User>, ClientError> {
        HttpClient::register_user(self, request).await
    }

    async fn get_current_user(
        &self,
        token: &SecretString,
    ) -> Result<ApiResponse<User>, ClientError> {
        HttpClient::get_current_user(self, token).await
    }

    async fn get_all_devices(
        &self,
        token: &SecretString,
    ) -> Result<ApiResponse<Vec<Device>>, ClientError> {
        HttpClient::get_all_devices(self, token).await
    }

    async fn get_device_by_id(
        &self,
        token: &SecretString,
        device_id: &str,
    ) -> Result<ApiResponse<Device>, ClientError> {
        HttpClient::get_device_by_id(self, token, device_id).await
    }

    async fn control_device(
        &self,
        token: &SecretString,
        device_id: &str,
        request: &DeviceControlRequest,
    ) -> Result<ApiResponse<Device>, ClientError> {
        HttpClient::control_device(self, token, device_id, request).await
    }

    async fn process_audio(
        &self,
        token: &SecretString,
        request: &AudioProcessRequest,
    ) -> Result<ApiResponse<AudioProcessResponse>, ClientError> {
        HttpClient::process_audio(self, token, request).await
    }

    async fn analyze_image(
        &self,
        token: &SecretString,
        request: &ImageAnalyzeRequest,
    ) -> Result<ApiResponse<ImageAnalyzeResponse>, ClientError> {
        HttpClient::analyze_image(self, token, request).await
    }
}
