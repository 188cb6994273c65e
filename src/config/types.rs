//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::sync::Arc;

use crate::application::{ApiKey, PlaybackError, SpeechOutputPort, SynthesisSettings, VoiceConfig};
use crate::domain::AudioFormat;
use crate::infrastructure::adapters::{
    CommandSpeechOutput, CommandSpeechOutputConfig, GatewaySpeechOutput,
    GatewaySpeechOutputConfig, OpenAiSpeechClientConfig,
};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 语音合成配置
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// 提醒播放配置
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// 按错误类型返回 400/502/500，默认关闭（统一 500）
    #[serde(default)]
    pub strict_status_codes: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024 // 10 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            strict_status_codes: false,
        }
    }
}

impl ServerConfig {
    /// 获取监听地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 语音合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// 上游 API Key；未设置时读取 OPENAI_API_KEY
    #[serde(default)]
    pub api_key: Option<String>,

    /// 上游服务基础 URL
    #[serde(default = "default_synthesis_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_voice")]
    pub voice: String,

    #[serde(default)]
    pub format: AudioFormat,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_synthesis_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "tts-1".to_string()
}

fn default_voice() -> String {
    "alloy".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_synthesis_base_url(),
            model: default_model(),
            voice: default_voice(),
            format: AudioFormat::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SynthesisConfig {
    /// 合成服务配置（凭证 + 语音参数）
    pub fn settings(&self) -> SynthesisSettings {
        SynthesisSettings {
            api_key: self.api_key.as_deref().and_then(ApiKey::new),
            voice: VoiceConfig {
                model: self.model.clone(),
                voice: self.voice.clone(),
                format: self.format,
            },
        }
    }

    /// 上游 HTTP 客户端配置
    pub fn client_config(&self) -> OpenAiSpeechClientConfig {
        OpenAiSpeechClientConfig::new(self.base_url.clone()).with_timeout(self.timeout_secs)
    }
}

/// 提醒播放通道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackOutput {
    /// 本地语音合成器
    #[default]
    Local,
    /// 经由 voice-tts 网关
    Gateway,
}

/// 提醒播放配置
#[derive(Debug, Clone, Deserialize)]
pub struct PlaybackConfig {
    #[serde(default)]
    pub output: PlaybackOutput,

    /// 本地合成器命令
    #[serde(default = "default_local_command")]
    pub local_command: String,

    #[serde(default)]
    pub local_args: Vec<String>,

    /// voice-tts 端点 URL
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// 播放器命令（从 stdin 读取音频）
    #[serde(default = "default_player_command")]
    pub player_command: String,

    #[serde(default = "default_player_args")]
    pub player_args: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_local_command() -> String {
    "espeak-ng".to_string()
}

fn default_gateway_url() -> String {
    "http://127.0.0.1:5070/functions/v1/voice-tts".to_string()
}

fn default_player_command() -> String {
    "mpg123".to_string()
}

fn default_player_args() -> Vec<String> {
    vec!["-q".to_string(), "-".to_string()]
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            output: PlaybackOutput::default(),
            local_command: default_local_command(),
            local_args: Vec::new(),
            gateway_url: default_gateway_url(),
            player_command: default_player_command(),
            player_args: default_player_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PlaybackConfig {
    /// 按配置创建播放通道
    pub fn build_output(&self) -> Result<Arc<dyn SpeechOutputPort>, PlaybackError> {
        match self.output {
            PlaybackOutput::Local => Ok(Arc::new(CommandSpeechOutput::new(
                CommandSpeechOutputConfig {
                    program: self.local_command.clone(),
                    args: self.local_args.clone(),
                    timeout_secs: self.timeout_secs,
                },
            ))),
            PlaybackOutput::Gateway => Ok(Arc::new(GatewaySpeechOutput::new(
                GatewaySpeechOutputConfig {
                    gateway_url: self.gateway_url.clone(),
                    player_program: self.player_command.clone(),
                    player_args: self.player_args.clone(),
                    timeout_secs: self.timeout_secs,
                },
            )?)),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
