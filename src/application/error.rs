//! 应用层错误定义
//!
//! 语音管道的统一失败类型，在边界处直接序列化为 `{ "error": message }`

use thiserror::Error;

use crate::domain::CodecError;

/// 对外错误文本
pub mod messages {
    pub const NO_AUDIO: &str = "No audio data provided";
    pub const NO_TEXT: &str = "No text provided";
    pub const MISSING_API_KEY: &str = "OPENAI_API_KEY is not configured";
    pub const SPEECH_FAILED: &str = "Failed to generate speech";
    pub const EMPTY_TRANSCRIPT: &str = "Failed to process speech-to-text";
    pub const AUDIO_GENERATED: &str = "Audio generated successfully";
}

/// 失败分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 缺失/非法的必填字段，或缺失配置
    Validation,
    /// 上游服务返回非成功状态或网络失败
    UpstreamFailure,
    /// 未预期的内部错误
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::UpstreamFailure => "upstream-failure",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 语音管道错误
///
/// message 即对外返回的错误文本，不得包含上游服务的原始响应
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VoiceError {
    pub kind: ErrorKind,
    pub message: String,
}

impl VoiceError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// 创建上游失败错误
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamFailure, message)
    }

    /// 创建未知错误
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }
}

impl From<CodecError> for VoiceError {
    fn from(err: CodecError) -> Self {
        Self::validation(err.to_string())
    }
}
