//! Fake Speech Client - 用于测试的语音合成客户端
//!
//! 不访问网络，返回预设音频或预设的上游失败

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{SpeechAudio, SpeechRequest, SpeechSynthesizerPort, SynthesisError};

/// 预设响应
#[derive(Debug, Clone)]
pub enum FakeSpeechReply {
    /// 返回固定音频
    Audio(Vec<u8>),
    /// 模拟上游非 2xx
    Reject { status: u16, body: String },
    /// 模拟上游超时
    Timeout,
}

/// Fake Speech Client
pub struct FakeSpeechClient {
    reply: FakeSpeechReply,
    calls: AtomicUsize,
}

impl FakeSpeechClient {
    pub fn new(reply: FakeSpeechReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    /// 始终返回给定音频
    pub fn with_audio(audio: impl Into<Vec<u8>>) -> Self {
        Self::new(FakeSpeechReply::Audio(audio.into()))
    }

    /// 始终返回上游错误
    pub fn rejecting(status: u16, body: impl Into<String>) -> Self {
        Self::new(FakeSpeechReply::Reject {
            status,
            body: body.into(),
        })
    }

    /// 已收到的请求数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSpeechClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechAudio, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice.voice,
            "FakeSpeechClient: returning scripted reply"
        );

        match &self.reply {
            FakeSpeechReply::Audio(audio) => Ok(SpeechAudio {
                audio_data: audio.clone(),
                content_type: Some(request.voice.format.mime_type().to_string()),
            }),
            FakeSpeechReply::Reject { status, body } => Err(SynthesisError::ServiceError {
                status: *status,
                body: body.clone(),
            }),
            FakeSpeechReply::Timeout => Err(SynthesisError::Timeout),
        }
    }
}
