//! Speech Synthesizer Port - 上游语音合成服务抽象
//!
//! 具体实现在 infrastructure/adapters/tts

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::AudioFormat;

/// 合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 上游返回非 2xx，body 为上游原始响应，仅用于日志
    #[error("Service error: HTTP {status}")]
    ServiceError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 上游服务凭证
///
/// Debug 输出不包含密钥内容
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// 空字符串视为未配置
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// 语音参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceConfig {
    /// 合成模型
    pub model: String,
    /// 音色
    pub voice: String,
    /// 输出格式
    pub format: AudioFormat,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            model: "tts-1".to_string(),
            voice: "alloy".to_string(),
            format: AudioFormat::Mp3,
        }
    }
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub api_key: ApiKey,
    pub text: String,
    pub voice: VoiceConfig,
}

/// 合成结果（原始音频字节）
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub audio_data: Vec<u8>,
    /// 上游声明的 Content-Type
    pub content_type: Option<String>,
}

/// Speech Synthesizer Port
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 发送文本到上游服务，返回合成音频
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, SynthesisError>;
}
