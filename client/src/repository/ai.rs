//! Audio and image analysis repository

use std::sync::Arc;

use openapi_client::{
    AudioProcessRequest, AudioProcessResponse, ImageAnalyzeRequest, ImageAnalyzeResponse,
};
use secrecy::SecretString;
use tracing::debug;

use crate::errors::ClientError;
use crate::http::service::ApiService;
use crate::repository::{into_result, log_call_error};

#[derive(Clone)]
pub struct AiRepository {
    api: Arc<dyn ApiService>,
}

impl AiRepository {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    pub async fn process_audio(
        &self,
        token: &SecretString,
        request: &AudioProcessRequest,
    ) -> Result<AudioProcessResponse, ClientError> {
        let response = self
            .api
            .process_audio(token, request)
            .await
            .map_err(|e| log_call_error("processing audio", e))?;

        let result = into_result(response, "Audio processing failed")?;
        debug!("Audio processed: {}", result.message);
        Ok(result)
    }

    pub async fn analyze_image(
        &self,
        token: &SecretString,
        request: &ImageAnalyzeRequest,
    ) -> Result<ImageAnalyzeResponse, ClientError> {
        let response = self
            .api
            .analyze_image(token, request)
            .await
            .map_err(|e| log_call_error("analyzing image", e))?;

        let result = into_result(response, "Image analysis failed")?;
        debug!("Image analyzed ({}): {}", request.analysis_type, result.message);
        Ok(result)
    }
}
