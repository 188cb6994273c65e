//! Playback Adapter - 提醒播放通道实现

mod command_speech_output;
mod gateway_speech_output;
mod process;

pub use command_speech_output::{
    pitch_level, words_per_minute, CommandSpeechOutput, CommandSpeechOutputConfig,
};
pub use gateway_speech_output::{GatewaySpeechOutput, GatewaySpeechOutputConfig};
