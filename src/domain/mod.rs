//! Domain Layer - 领域层
//!
//! - Audio: 音频负载与编解码
//! - Medication: 用药提醒文案

pub mod audio;
pub mod medication;

pub use audio::{AudioCodec, AudioFormat, AudioPayload, CodecError, INPUT_MIME_TYPE};
pub use medication::{MedicationReminder, Utterance, REMINDER_PITCH, REMINDER_RATE};
