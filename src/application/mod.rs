//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Transcriber、SpeechSynthesizer、SpeechOutput）
//! - services: 语音识别、语音合成、提醒播放
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod services;

pub use error::{messages, ErrorKind, VoiceError};

pub use ports::{
    ApiKey, PlaybackError, SpeechAudio, SpeechOutputPort, SpeechRequest, SpeechSynthesizerPort,
    SynthesisError, TranscribeError, TranscriberPort, VoiceConfig,
};

pub use services::{
    PlaybackObserver, PlaybackOutcome, ReminderPlaybackClient, SpeechSynthesisService,
    SynthesisResult, SynthesisSettings, TranscriptionResult, TranscriptionService,
};
