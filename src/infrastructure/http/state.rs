//! Application State
//!
//! 网关共享的用例服务，本身无可变状态

use std::sync::Arc;

use axum::http::StatusCode;

use crate::application::{
    ErrorKind, SpeechSynthesisService, SpeechSynthesizerPort, SynthesisSettings, TranscriberPort,
    TranscriptionService, VoiceError,
};

use super::error::ApiError;

/// 失败响应的状态码策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// 所有失败统一 500（与现有前端约定一致）
    #[default]
    Uniform,
    /// validation -> 400, upstream-failure -> 502, unknown -> 500
    Strict,
}

impl StatusPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            StatusPolicy::Strict
        } else {
            StatusPolicy::Uniform
        }
    }

    pub fn status_for(&self, kind: ErrorKind) -> StatusCode {
        match (self, kind) {
            (StatusPolicy::Uniform, _) => StatusCode::INTERNAL_SERVER_ERROR,
            (StatusPolicy::Strict, ErrorKind::Validation) => StatusCode::BAD_REQUEST,
            (StatusPolicy::Strict, ErrorKind::UpstreamFailure) => StatusCode::BAD_GATEWAY,
            (StatusPolicy::Strict, ErrorKind::Unknown) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 应用状态
pub struct AppState {
    pub transcription_service: TranscriptionService,
    pub synthesis_service: SpeechSynthesisService,
    pub status_policy: StatusPolicy,
}

impl AppState {
    pub fn new(
        transcriber: Arc<dyn TranscriberPort>,
        speech_engine: Arc<dyn SpeechSynthesizerPort>,
        synthesis: SynthesisSettings,
    ) -> Self {
        Self {
            transcription_service: TranscriptionService::new(transcriber),
            synthesis_service: SpeechSynthesisService::new(speech_engine, synthesis),
            status_policy: StatusPolicy::default(),
        }
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// 将用例错误转换为边界响应
    pub fn reject(&self, err: VoiceError) -> ApiError {
        ApiError::new(self.status_policy.status_for(err.kind), err)
    }
}
