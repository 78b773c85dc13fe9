//! Smart-home device repository

use std::sync::Arc;

use openapi_client::{Device, DeviceControlRequest};
use secrecy::SecretString;
use tracing::debug;

use crate::errors::ClientError;
use crate::http::service::ApiService;
use crate::repository::{into_result, log_call_error};

/// Device listing and control
#[derive(Clone)]
pub struct SmartHomeRepository {
    api: Arc<dyn ApiService>,
}

impl SmartHomeRepository {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    pub async fn get_all_devices(&self, token: &SecretString) -> Result<Vec<Device>, ClientError> {
        let response = self
            .api
            .get_all_devices(token)
            .await
            .map_err(|e| log_call_error("fetching all devices", e))?;

        let devices = into_result(response, "Failed to fetch devices")?;
        debug!("Successfully fetched all devices.");
        Ok(devices)
    }

    pub async fn get_device_by_id(
        &self,
        token: &SecretString,
        device_id: &str,
    ) -> Result<Device, ClientError> {
        let response = self
            .api
            .get_device_by_id(token, device_id)
            .await
            .map_err(|e| log_call_error(&format!("fetching device {}", device_id), e))?;

        let device = into_result(response, &format!("Failed to fetch device {}", device_id))?;
        debug!("Successfully fetched device: {}", device_id);
        Ok(device)
    }

    pub async fn control_device(
        &self,
        token: &SecretString,
        device_id: &str,
        request: &DeviceControlRequest,
    ) -> Result<Device, ClientError> {
        let response = self
            .api
            .control_device(token, device_id, request)
            .await
            .map_err(|e| log_call_error(&format!("controlling device {}", device_id), e))?;

        let device = into_result(response, &format!("Failed to control device {}", device_id))?;
        debug!("Successfully sent control command to device: {}", device_id);
        Ok(device)
    }
}
