//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod speech_output;
mod speech_synthesizer;
mod transcriber;

pub use speech_output::{PlaybackError, SpeechOutputPort};
pub use speech_synthesizer::{
    ApiKey, SpeechAudio, SpeechRequest, SpeechSynthesizerPort, SynthesisError, VoiceConfig,
};
pub use transcriber::{TranscribeError, TranscriberPort};
