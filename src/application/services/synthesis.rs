//! Speech Synthesis Service - 文字转语音用例
//!
//! 凭证和语音参数在构造时注入，不在调用时读取环境变量

use std::sync::Arc;

use crate::application::error::{messages, VoiceError};
use crate::application::ports::{
    ApiKey, SpeechRequest, SpeechSynthesizerPort, SynthesisError, VoiceConfig,
};
use crate::domain::AudioPayload;

/// 合成服务配置
#[derive(Debug, Clone, Default)]
pub struct SynthesisSettings {
    /// 上游凭证，None 表示未配置
    pub api_key: Option<ApiKey>,
    pub voice: VoiceConfig,
}

/// 合成结果
///
/// 不变量: audio 非空
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio: AudioPayload,
    pub message: String,
}

impl SynthesisResult {
    /// base64 音频
    pub fn audio_content(&self) -> &str {
        self.audio.encoded()
    }
}

/// Speech Synthesis Service
pub struct SpeechSynthesisService {
    engine: Arc<dyn SpeechSynthesizerPort>,
    settings: SynthesisSettings,
}

impl SpeechSynthesisService {
    pub fn new(engine: Arc<dyn SpeechSynthesizerPort>, settings: SynthesisSettings) -> Self {
        Self { engine, settings }
    }

    pub fn is_configured(&self) -> bool {
        self.settings.api_key.is_some()
    }

    /// 使用默认语音参数合成
    pub async fn synthesize(&self, text: &str) -> Result<SynthesisResult, VoiceError> {
        self.synthesize_with(text, &self.settings.voice).await
    }

    /// 使用指定语音参数合成
    pub async fn synthesize_with(
        &self,
        text: &str,
        voice: &VoiceConfig,
    ) -> Result<SynthesisResult, VoiceError> {
        if text.is_empty() {
            return Err(VoiceError::validation(messages::NO_TEXT));
        }

        let api_key = self
            .settings
            .api_key
            .clone()
            .ok_or_else(|| VoiceError::validation(messages::MISSING_API_KEY))?;

        let request = SpeechRequest {
            api_key,
            text: text.to_string(),
            voice: voice.clone(),
        };

        let response = self.engine.synthesize(request).await.map_err(|e| {
            match &e {
                SynthesisError::ServiceError { status, body } => {
                    tracing::error!(status = *status, body = %body, "Speech provider returned an error");
                }
                other => {
                    tracing::error!(error = %other, "Speech provider request failed");
                }
            }
            VoiceError::upstream(messages::SPEECH_FAILED)
        })?;

        if response.audio_data.is_empty() {
            tracing::error!("Speech provider returned empty audio");
            return Err(VoiceError::upstream(messages::SPEECH_FAILED));
        }

        let audio = AudioPayload::from_bytes(response.audio_data, voice.format.mime_type());

        tracing::info!(
            text_len = text.len(),
            audio_size = audio.bytes().len(),
            format = %voice.format,
            "Speech synthesis completed"
        );

        Ok(SynthesisResult {
            audio,
            message: messages::AUDIO_GENERATED.to_string(),
        })
    }
}
