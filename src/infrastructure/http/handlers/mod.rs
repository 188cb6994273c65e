//! HTTP Handlers
//!
//! voice-stt / voice-tts 两个边界端点 + 健康检查

mod ping;
mod synthesis;
mod transcription;

pub use ping::*;
pub use synthesis::*;
pub use transcription::*;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::VoiceError;

/// 读取并解析 JSON 请求体
///
/// 不依赖 Content-Type；空请求体按 `{}` 处理。
/// 读取/解析失败统一转为 validation 错误，保证响应格式一致。
pub(crate) fn read_json<T>(body: Result<Bytes, BytesRejection>) -> Result<T, VoiceError>
where
    T: DeserializeOwned + Default,
{
    let body =
        body.map_err(|e| VoiceError::validation(format!("Invalid request body: {}", e.body_text())))?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(&body)
        .map_err(|e| VoiceError::validation(format!("Invalid request body: {}", e)))
}

/// 取出必填字符串字段
///
/// null、false、0、"" 与缺失等价，返回 `missing`；
/// 其它非字符串值是非法请求体。
pub(crate) fn required_string(
    value: Option<Value>,
    field: &str,
    missing: &'static str,
) -> Result<String, VoiceError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(VoiceError::validation(missing)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(VoiceError::validation(missing)),
        Some(Value::String(s)) if s.is_empty() => Err(VoiceError::validation(missing)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(VoiceError::validation(format!(
            "Invalid request body: {} must be a string",
            field
        ))),
    }
}
