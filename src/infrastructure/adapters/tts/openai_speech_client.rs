//! OpenAI Speech Client - 调用 OpenAI 语音合成接口
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 API:
//! POST https://api.openai.com/v1/audio/speech
//! Headers: Authorization: Bearer <key>
//! Request: {"model": "tts-1", "input": "...", "voice": "alloy", "response_format": "mp3"}
//! Response: 音频二进制

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechAudio, SpeechRequest, SpeechSynthesizerPort, SynthesisError};

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SpeechHttpRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

/// OpenAI 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiSpeechClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for OpenAiSpeechClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl OpenAiSpeechClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI 语音合成客户端
pub struct OpenAiSpeechClient {
    client: Client,
    config: OpenAiSpeechClientConfig,
}

impl OpenAiSpeechClient {
    pub fn new(config: OpenAiSpeechClientConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn speech_url(&self) -> String {
        format!("{}/v1/audio/speech", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechSynthesizerPort for OpenAiSpeechClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, SynthesisError> {
        let body = SpeechHttpRequest {
            model: &request.voice.model,
            input: &request.text,
            voice: &request.voice.voice,
            response_format: request.voice.format.as_str(),
        };

        tracing::debug!(
            url = %self.speech_url(),
            text_len = request.text.len(),
            model = %request.voice.model,
            voice = %request.voice.voice,
            "Sending speech request"
        );

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(request.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else if e.is_connect() {
                    SynthesisError::NetworkError(format!("Cannot connect to speech provider: {}", e))
                } else {
                    SynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else {
                    SynthesisError::InvalidResponse(format!("Failed to read audio: {}", e))
                }
            })?
            .to_vec();

        tracing::debug!(
            audio_size = audio_data.len(),
            content_type = ?content_type,
            "Speech provider responded"
        );

        Ok(SpeechAudio {
            audio_data,
            content_type,
        })
    }
}
