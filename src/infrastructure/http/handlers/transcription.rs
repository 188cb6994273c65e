//! voice-stt - 语音转文字端点

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use std::sync::Arc;

use super::{read_json, required_string};
use crate::application::{messages, VoiceError};
use crate::domain::{AudioPayload, INPUT_MIME_TYPE};
use crate::infrastructure::http::dto::{TranscribeRequest, TranscribeResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /functions/v1/voice-stt
///
/// Request: `{ "audio": "<base64>" }`
/// Response: `{ "text": "..." }`
pub async fn transcribe(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TranscribeResponse>, ApiError> {
    handle_transcription(&state, body)
        .await
        .map(Json)
        .map_err(|e| state.reject(e))
}

async fn handle_transcription(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> Result<TranscribeResponse, VoiceError> {
    let request: TranscribeRequest = read_json(body)?;

    let audio = required_string(request.audio, "audio", messages::NO_AUDIO)?;

    tracing::info!(audio_len = audio.len(), "Received audio data");

    let payload = AudioPayload::from_base64(audio, INPUT_MIME_TYPE)?;
    let result = state.transcription_service.transcribe(&payload).await?;

    tracing::info!(text = %result.text(), "Transcription result");

    Ok(TranscribeResponse {
        text: result.into_text(),
    })
}
