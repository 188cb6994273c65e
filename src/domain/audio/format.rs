//! Audio Format - 音频格式与 MIME 类型

use serde::{Deserialize, Serialize};

/// 录音上传的固定 MIME 类型
pub const INPUT_MIME_TYPE: &str = "audio/webm";

/// 合成音频格式
///
/// 与上游语音合成服务的 `response_format` 取值一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 - 默认格式，浏览器通用
    #[default]
    Mp3,
    Opus,
    Aac,
    Flac,
    Wav,
    /// 原始 24kHz 16-bit PCM，无文件头
    Pcm,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Opus => "opus",
            AudioFormat::Aac => "aac",
            AudioFormat::Flac => "flac",
            AudioFormat::Wav => "wav",
            AudioFormat::Pcm => "pcm",
        }
    }

    /// 对应的 MIME 类型
    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Opus => "audio/ogg",
            AudioFormat::Aac => "audio/aac",
            AudioFormat::Flac => "audio/flac",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Pcm => "audio/pcm",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mp3" => Ok(AudioFormat::Mp3),
            "opus" => Ok(AudioFormat::Opus),
            "aac" => Ok(AudioFormat::Aac),
            "flac" => Ok(AudioFormat::Flac),
            "wav" => Ok(AudioFormat::Wav),
            "pcm" => Ok(AudioFormat::Pcm),
            _ => Err(format!("Unsupported audio format: {}", s)),
        }
    }
}
