//! Placeholder Transcriber - 演示用语音识别
//!
//! 注意：这里没有真正的语音识别。根据 base64 文本长度确定性地从固定
//! 短语表中选出一句（`index = encoded_len % DEMO_PHRASES.len()`）。
//! 接入真实识别后端时替换本适配器即可，输入输出契约和错误面保持不变。

use async_trait::async_trait;

use crate::application::ports::{TranscribeError, TranscriberPort};
use crate::domain::AudioPayload;

/// 候选短语表
pub const DEMO_PHRASES: [&str; 5] = [
    "Show me my medication schedule for today",
    "What appointments do I have this week",
    "Tell me about patient care notes",
    "How do I add a new caregiver",
    "Show me recent incidents",
];

/// 按编码长度选择短语
pub fn phrase_for_len(encoded_len: usize) -> &'static str {
    DEMO_PHRASES[encoded_len % DEMO_PHRASES.len()]
}

/// Placeholder Transcriber
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTranscriber;

impl PlaceholderTranscriber {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TranscriberPort for PlaceholderTranscriber {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscribeError> {
        tracing::debug!(
            audio_len = audio.encoded_len(),
            audio_bytes = audio.bytes().len(),
            mime_type = audio.mime_type(),
            "Simulating transcription"
        );
        Ok(phrase_for_len(audio.encoded_len()).to_string())
    }
}
