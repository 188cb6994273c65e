//! Transcription Service - 语音转文字用例

use std::sync::Arc;

use crate::application::error::{messages, VoiceError};
use crate::application::ports::{TranscribeError, TranscriberPort};
use crate::domain::AudioPayload;

/// 识别结果
///
/// 不变量: text 已 trim 且非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    text: String,
}

impl TranscriptionResult {
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            None
        } else {
            Some(Self {
                text: text.to_string(),
            })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Transcription Service
pub struct TranscriptionService {
    transcriber: Arc<dyn TranscriberPort>,
}

impl TranscriptionService {
    pub fn new(transcriber: Arc<dyn TranscriberPort>) -> Self {
        Self { transcriber }
    }

    /// 识别已解码的音频负载
    pub async fn transcribe(&self, audio: &AudioPayload) -> Result<TranscriptionResult, VoiceError> {
        let raw = self.transcriber.transcribe(audio).await.map_err(|e| match e {
            TranscribeError::InvalidAudio(msg) => VoiceError::validation(msg),
            TranscribeError::Backend(msg) => VoiceError::upstream(msg),
        })?;

        TranscriptionResult::new(&raw).ok_or_else(|| {
            tracing::warn!(audio_len = audio.encoded_len(), "Transcriber returned empty text");
            VoiceError::unknown(messages::EMPTY_TRANSCRIPT)
        })
    }
}
