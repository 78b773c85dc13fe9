//! Audio and image analysis API client

use openapi_client::{
    AudioProcessRequest, AudioProcessResponse, ImageAnalyzeRequest, ImageAnalyzeResponse,
};
use secrecy::SecretString;

use crate::constants::{ENDPOINT_AI_AUDIO, ENDPOINT_AI_IMAGE};
use crate::errors::ClientError;
use crate::http::client::{ApiResponse, HttpClient};

impl HttpClient {
    pub async fn process_audio(
        &self,
        token: &SecretString,
        request: &AudioProcessRequest,
    ) -> Result<ApiResponse<AudioProcessResponse>, ClientError> {
        let url = self.endpoint(ENDPOINT_AI_AUDIO, &[])?;
        self.post(url, Some(token), request).await
    }

    pub async fn analyze_image(
        &self,
        token: &SecretString,
        request: &ImageAnalyzeRequest,
    ) -> Result<ApiResponse<ImageAnalyzeResponse>, ClientError> {
        let url = self.endpoint(ENDPOINT_AI_IMAGE, &[])?;
        self.post(url, Some(token), request).await
    }
}
