//! 应用层 - 语音用例

mod reminder_playback;
mod synthesis;
mod transcription;

pub use reminder_playback::{PlaybackObserver, PlaybackOutcome, ReminderPlaybackClient};
pub use synthesis::{SpeechSynthesisService, SynthesisResult, SynthesisSettings};
pub use transcription::{TranscriptionResult, TranscriptionService};
