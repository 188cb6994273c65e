//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::application::{ErrorKind, VoiceError};

/// API 错误
///
/// 响应体固定为 `{ "error": message }`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: VoiceError,
}

impl ApiError {
    pub fn new(status: StatusCode, error: VoiceError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.error.kind {
            ErrorKind::Validation => {
                tracing::warn!(kind = %self.error.kind, error = %self.error.message, "Request rejected");
            }
            ErrorKind::UpstreamFailure | ErrorKind::Unknown => {
                tracing::error!(kind = %self.error.kind, error = %self.error.message, "Request failed");
            }
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.error.message,
            }),
        )
            .into_response()
    }
}
