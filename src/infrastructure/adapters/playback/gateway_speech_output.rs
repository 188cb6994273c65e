//! Gateway Speech Output - 经由语音合成网关播放
//!
//! POST `{ "text": ... }` 到 voice-tts 端点，解码 `audioContent`，
//! 再把音频写入播放器进程的 stdin。
//! 语速和音调无法通过网关传递，在此路径上忽略。

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::process::Command;

use super::process::run_with_stdin;
use crate::application::ports::{PlaybackError, SpeechOutputPort};
use crate::domain::{AudioCodec, Utterance};

#[derive(Debug, Serialize)]
struct GatewayRequest<'a> {
    text: &'a str,
}

/// 网关响应（成功与失败共用）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GatewayReply {
    audio_content: Option<String>,
    error: Option<String>,
}

/// 网关播放配置
#[derive(Debug, Clone)]
pub struct GatewaySpeechOutputConfig {
    /// voice-tts 端点完整 URL
    pub gateway_url: String,
    /// 播放器程序，音频从 stdin 读入
    pub player_program: String,
    pub player_args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for GatewaySpeechOutputConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://127.0.0.1:5070/functions/v1/voice-tts".to_string(),
            player_program: "mpg123".to_string(),
            player_args: vec!["-q".to_string(), "-".to_string()],
            timeout_secs: 30,
        }
    }
}

/// Gateway Speech Output
pub struct GatewaySpeechOutput {
    client: Client,
    config: GatewaySpeechOutputConfig,
}

impl GatewaySpeechOutput {
    pub fn new(config: GatewaySpeechOutputConfig) -> Result<Self, PlaybackError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PlaybackError::Gateway(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// 请求网关合成，返回解码后的音频
    async fn fetch_audio(&self, text: &str) -> Result<Vec<u8>, PlaybackError> {
        let response = self
            .client
            .post(&self.config.gateway_url)
            .json(&GatewayRequest { text })
            .send()
            .await
            .map_err(|e| PlaybackError::Gateway(e.to_string()))?;

        let status = response.status();
        let reply: GatewayReply = response
            .json()
            .await
            .map_err(|e| PlaybackError::Gateway(format!("Invalid gateway response: {}", e)))?;

        if !status.is_success() {
            let message = reply.error.unwrap_or_else(|| format!("HTTP {}", status));
            return Err(PlaybackError::Gateway(message));
        }

        let encoded = reply
            .audio_content
            .ok_or_else(|| PlaybackError::Gateway("Missing audioContent".to_string()))?;

        AudioCodec::decode(&encoded).map_err(|e| PlaybackError::Gateway(e.to_string()))
    }
}

#[async_trait]
impl SpeechOutputPort for GatewaySpeechOutput {
    async fn speak(&self, utterance: &Utterance) -> Result<(), PlaybackError> {
        let audio = self.fetch_audio(&utterance.text).await?;

        tracing::debug!(
            audio_size = audio.len(),
            player = %self.config.player_program,
            "Playing gateway audio"
        );

        let mut command = Command::new(&self.config.player_program);
        command.args(&self.config.player_args);

        run_with_stdin(
            command,
            &self.config.player_program,
            audio,
            Duration::from_secs(self.config.timeout_secs),
        )
        .await
    }
}
