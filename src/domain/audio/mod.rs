//! Audio Context - 音频数据与编解码
//!
//! 职责:
//! - 音频字节与 base64 传输文本互转
//! - 单次请求的音频负载
//! - 合成音频格式与 MIME 映射

mod codec;
mod format;
mod payload;

pub use codec::{AudioCodec, CodecError};
pub use format::{AudioFormat, INPUT_MIME_TYPE};
pub use payload::AudioPayload;
