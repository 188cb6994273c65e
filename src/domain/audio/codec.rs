//! Audio Codec - 音频字节与 base64 文本互转
//!
//! 解码行为与浏览器 `atob` 一致：忽略 ASCII 空白，padding 可选，
//! 末尾多余 bit 不报错。编码总是带 padding。

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use thiserror::Error;

/// 宽松解码引擎
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// 编解码错误
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid base64 audio data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// 音频编解码器
///
/// 无状态，所有方法都是纯函数
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioCodec;

impl AudioCodec {
    /// 原始字节 -> base64 文本
    pub fn encode(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    /// base64 文本 -> 原始字节
    pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
        let compact: Vec<u8> = encoded
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        Ok(FORGIVING.decode(compact)?)
    }
}
