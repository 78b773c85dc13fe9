//! Device API client

use openapi_client::{Device, DeviceControlRequest};
use secrecy::SecretString;

use crate::constants::ENDPOINT_DEVICES;
use crate::errors::ClientError;
use crate::http::client::{ApiResponse, HttpClient};

impl HttpClient {
    /// List every device visible to the user
    pub async fn get_all_devices(
        &self,
        token: &SecretString,
    ) -> Result<ApiResponse<Vec<Device>>, ClientError> {
        let url = self.endpoint(ENDPOINT_DEVICES, &[])?;
        self.get(url, token).await
    }

    /// Get a single device
    pub async fn get_device_by_id(
        &self,
        token: &SecretString,
        device_id: &str,
    ) -> Result<ApiResponse<Device>, ClientError> {
        let url = self.endpoint(ENDPOINT_DEVICES, &[device_id])?;
        self.get(url, token).await
    }

    /// Send a control command to a device
    pub async fn control_device(
        &self,
        token: &SecretString,
        device_id: &str,
        request: &DeviceControlRequest,
    ) -> Result<ApiResponse<Device>, ClientError> {
        let url = self.endpoint(ENDPOINT_DEVICES, &[device_id, "control"])?;
        self.put(url, token, request).await
    }
}
