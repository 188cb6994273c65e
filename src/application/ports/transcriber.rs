//! Transcriber Port - 语音识别后端抽象

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::AudioPayload;

/// 识别错误
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    #[error("Recognition backend error: {0}")]
    Backend(String),
}

/// Transcriber Port
///
/// 输入已解码的音频负载，返回识别出的原始文本（未 trim）
#[async_trait]
pub trait TranscriberPort: Send + Sync {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscribeError>;
}
