//! voice-tts - 文字转语音端点

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use std::sync::Arc;

use super::{read_json, required_string};
use crate::application::{messages, VoiceError};
use crate::infrastructure::http::dto::{SynthesizeRequest, SynthesizeResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /functions/v1/voice-tts
///
/// Request: `{ "text": "..." }`
/// Response: `{ "audioContent": "<base64>", "message": "Audio generated successfully" }`
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SynthesizeResponse>, ApiError> {
    handle_synthesis(&state, body)
        .await
        .map(Json)
        .map_err(|e| state.reject(e))
}

async fn handle_synthesis(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> Result<SynthesizeResponse, VoiceError> {
    let request: SynthesizeRequest = read_json(body)?;

    let text = required_string(request.text, "text", messages::NO_TEXT)?;

    tracing::info!(text_len = text.len(), "Converting text to speech");

    let result = state.synthesis_service.synthesize(&text).await?;

    Ok(SynthesizeResponse {
        audio_content: result.audio.into_encoded(),
        message: result.message,
    })
}
