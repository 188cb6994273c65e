//! Command Speech Output - 本地语音合成器
//!
//! 调用 espeak-ng 风格的命令行合成器，文本通过 stdin 传入:
//! `<program> <args...> -s <words/min> -p <pitch> --stdin`

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

use super::process::run_with_stdin;
use crate::application::ports::{PlaybackError, SpeechOutputPort};
use crate::domain::Utterance;

/// espeak-ng 默认语速（词/分钟）
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// espeak-ng 默认音调（0-99）
const BASE_PITCH: f32 = 50.0;

/// 语速倍率 -> espeak-ng `-s`
pub fn words_per_minute(rate: f32) -> u32 {
    (BASE_WORDS_PER_MINUTE * rate).round().clamp(80.0, 450.0) as u32
}

/// 音调倍率 -> espeak-ng `-p`
pub fn pitch_level(pitch: f32) -> u32 {
    (BASE_PITCH * pitch).round().clamp(0.0, 99.0) as u32
}

/// 本地合成器配置
#[derive(Debug, Clone)]
pub struct CommandSpeechOutputConfig {
    pub program: String,
    /// 追加在语速/音调参数之前的固定参数
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for CommandSpeechOutputConfig {
    fn default() -> Self {
        Self {
            program: "espeak-ng".to_string(),
            args: Vec::new(),
            timeout_secs: 30,
        }
    }
}

/// Command Speech Output
pub struct CommandSpeechOutput {
    config: CommandSpeechOutputConfig,
}

impl CommandSpeechOutput {
    pub fn new(config: CommandSpeechOutputConfig) -> Self {
        Self { config }
    }

    fn build_command(&self, utterance: &Utterance) -> Command {
        let mut command = Command::new(&self.config.program);
        command
            .args(&self.config.args)
            .arg("-s")
            .arg(words_per_minute(utterance.rate).to_string())
            .arg("-p")
            .arg(pitch_level(utterance.pitch).to_string())
            .arg("--stdin");
        command
    }
}

#[async_trait]
impl SpeechOutputPort for CommandSpeechOutput {
    async fn speak(&self, utterance: &Utterance) -> Result<(), PlaybackError> {
        tracing::debug!(
            program = %self.config.program,
            text_len = utterance.text.len(),
            "Speaking with local synthesizer"
        );

        run_with_stdin(
            self.build_command(utterance),
            &self.config.program,
            utterance.text.clone().into_bytes(),
            Duration::from_secs(self.config.timeout_secs),
        )
        .await
    }
}
