//! Speech Output Port - 提醒播放通道抽象
//!
//! 本地语音合成器或语音合成网关，二选一

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Utterance;

/// 播放错误
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Failed to start speech output: {0}")]
    Spawn(String),

    #[error("Speech output failed: {0}")]
    Failed(String),

    #[error("Speech output timed out")]
    Timeout,

    #[error("Synthesis gateway error: {0}")]
    Gateway(String),
}

/// Speech Output Port
#[async_trait]
pub trait SpeechOutputPort: Send + Sync {
    /// 播放一句话，播放结束后返回
    async fn speak(&self, utterance: &Utterance) -> Result<(), PlaybackError>;
}
