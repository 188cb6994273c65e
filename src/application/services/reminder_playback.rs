//! Reminder Playback Client - 用药提醒语音播放
//!
//! 播放是 fire-and-forget 的：调用方不等待结果，失败只能通过日志
//! 或注册的观察者回调感知。

use std::sync::Arc;

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::application::ports::SpeechOutputPort;
use crate::domain::{MedicationReminder, Utterance};

/// 单次播放的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Spoken { playback_id: Uuid },
    Failed { playback_id: Uuid, error: String },
}

impl PlaybackOutcome {
    pub fn playback_id(&self) -> Uuid {
        match self {
            PlaybackOutcome::Spoken { playback_id } => *playback_id,
            PlaybackOutcome::Failed { playback_id, .. } => *playback_id,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PlaybackOutcome::Failed { .. })
    }
}

/// 播放结果回调（例如 UI 弹出提示）
pub type PlaybackObserver = Arc<dyn Fn(&PlaybackOutcome) + Send + Sync>;

/// Reminder Playback Client
#[derive(Clone)]
pub struct ReminderPlaybackClient {
    output: Arc<dyn SpeechOutputPort>,
    observer: Option<PlaybackObserver>,
}

impl ReminderPlaybackClient {
    pub fn new(output: Arc<dyn SpeechOutputPort>) -> Self {
        Self {
            output,
            observer: None,
        }
    }

    /// 注册播放结果回调
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&PlaybackOutcome) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// 播报用药提醒
    ///
    /// 必须在 tokio runtime 内调用。返回的 handle 可以直接丢弃。
    pub fn speak(&self, medication: &MedicationReminder) -> JoinHandle<()> {
        self.speak_utterance(medication.utterance())
    }

    /// 播报任意一句话
    pub fn speak_utterance(&self, utterance: Utterance) -> JoinHandle<()> {
        let playback_id = Uuid::new_v4();
        let output = self.output.clone();
        let observer = self.observer.clone();

        tracing::debug!(
            playback_id = %playback_id,
            text_len = utterance.text.len(),
            rate = utterance.rate,
            pitch = utterance.pitch,
            "Reminder playback scheduled"
        );

        tokio::spawn(async move {
            let outcome = match output.speak(&utterance).await {
                Ok(()) => {
                    tracing::info!(playback_id = %playback_id, "Reminder spoken");
                    PlaybackOutcome::Spoken { playback_id }
                }
                Err(e) => {
                    tracing::warn!(playback_id = %playback_id, error = %e, "Reminder playback failed");
                    PlaybackOutcome::Failed {
                        playback_id,
                        error: e.to_string(),
                    }
                }
            };

            if let Some(observer) = observer {
                observer(&outcome);
            }
        })
    }
}
