//! Audio Payload - 单次请求内的音频数据
//!
//! 不变量:
//! - encoded 与 bytes 始终一一对应（构造时完成编解码）
//! - 构造后不可变

use super::codec::{AudioCodec, CodecError};

/// 音频负载
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    encoded: String,
    bytes: Vec<u8>,
    mime_type: &'static str,
}

impl AudioPayload {
    /// 从 base64 文本构造（会校验并解码）
    pub fn from_base64(encoded: impl Into<String>, mime_type: &'static str) -> Result<Self, CodecError> {
        let encoded = encoded.into();
        let bytes = AudioCodec::decode(&encoded)?;
        Ok(Self {
            encoded,
            bytes,
            mime_type,
        })
    }

    /// 从原始字节构造
    pub fn from_bytes(bytes: Vec<u8>, mime_type: &'static str) -> Self {
        Self {
            encoded: AudioCodec::encode(&bytes),
            bytes,
            mime_type,
        }
    }

    /// base64 文本
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// base64 文本长度（按收到的原文计算，含空白）
    pub fn encoded_len(&self) -> usize {
        self.encoded.len()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_encoded(self) -> String {
        self.encoded
    }
}
