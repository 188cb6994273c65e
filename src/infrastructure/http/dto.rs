//! Data Transfer Objects
//!
//! 字段名与 dashboard 调用方保持一致（camelCase）

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// 错误响应
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// voice-stt
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct TranscribeRequest {
    /// 任意 JSON 值，由 handler 按真值规则取出字符串
    #[serde(default)]
    pub audio: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

// ============================================================================
// voice-tts
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    pub audio_content: String,
    pub message: String,
}
