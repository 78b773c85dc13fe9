//! Audio and image analysis models

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUDIO_FORMAT: &str = "wav";
pub const DEFAULT_AUDIO_KIND: &str = "voice_command";
pub const DEFAULT_ANALYSIS_TYPE: &str = "object_detection";

/// Audio processing request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioProcessRequest {
    /// Base64-encoded audio data
    pub audio_base64: String,

    #[serde(default = "default_audio_format")]
    pub format: String,

    /// e.g. "voice_command", "sound_classification"
    #[serde(rename = "type", default = "default_audio_kind")]
    pub kind: String,
}

impl AudioProcessRequest {
    pub fn new(audio_base64: String) -> Self {
        Self {
            audio_base64,
            format: default_audio_format(),
            kind: default_audio_kind(),
        }
    }
}

fn default_audio_format() -> String {
    DEFAULT_AUDIO_FORMAT.to_string()
}

fn default_audio_kind() -> String {
    DEFAULT_AUDIO_KIND.to_string()
}

/// Audio processing response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioProcessResponse {
    pub success: bool,
    pub message: String,

    #[serde(default)]
    pub recognized_text: Option<String>,

    #[serde(default)]
    pub classification: Option<String>,
}

/// Image analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalyzeRequest {
    /// Base64-encoded image data
    pub image_base64: String,

    /// e.g. "object_detection", "facial_recognition", "activity_recognition"
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

impl ImageAnalyzeRequest {
    pub fn new(image_base64: String) -> Self {
        Self {
            image_base64,
            analysis_type: default_analysis_type(),
        }
    }
}

fn default_analysis_type() -> String {
    DEFAULT_ANALYSIS_TYPE.to_string()
}

/// Image analysis response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalyzeResponse {
    pub success: bool,
    pub message: String,

    /// Free-form analysis output
    #[serde(default)]
    pub analysis_result: Option<serde_json::Map<String, serde_json::Value>>,
}
