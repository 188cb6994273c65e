//! STT Adapter - 语音识别实现

mod placeholder_transcriber;

pub use placeholder_transcriber::{phrase_for_len, PlaceholderTranscriber, DEMO_PHRASES};
