use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use carevoice::application::{ApiKey, SynthesisSettings, VoiceConfig};
use carevoice::domain::AudioCodec;
use carevoice::infrastructure::adapters::{
    phrase_for_len, FakeSpeechClient, FakeSpeechReply, PlaceholderTranscriber,
};
use carevoice::infrastructure::http::{
    AppState, HttpServer, ServerConfig, StatusPolicy, CORS_ALLOW_HEADERS, CORS_ALLOW_ORIGIN,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const STT: &str = "/functions/v1/voice-stt";
const TTS: &str = "/functions/v1/voice-tts";

fn setup_app(engine: Arc<FakeSpeechClient>, api_key: Option<&str>, policy: StatusPolicy) -> Router {
    setup_app_with(engine, api_key, policy, ServerConfig::default())
}

fn setup_app_with(
    engine: Arc<FakeSpeechClient>,
    api_key: Option<&str>,
    policy: StatusPolicy,
    server: ServerConfig,
) -> Router {
    let settings = SynthesisSettings {
        api_key: api_key.and_then(ApiKey::new),
        voice: VoiceConfig::default(),
    };
    let state = AppState::new(Arc::new(PlaceholderTranscriber::new()), engine, settings)
        .with_status_policy(policy);
    HttpServer::new(server, state).build_router()
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    post(uri, body.to_string())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, headers, body)
}

async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn assert_cors(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], CORS_ALLOW_ORIGIN);
    assert_eq!(headers["access-control-allow-headers"], CORS_ALLOW_HEADERS);
}

#[tokio::test]
async fn test_stt_returns_demo_phrase() {
    let app = setup_app(
        Arc::new(FakeSpeechClient::with_audio(b"unused".to_vec())),
        None,
        StatusPolicy::Uniform,
    );
    let audio = "GkXfo59ChoEBQveBAULygQRC84EIQoKEd2VibUKHgQJChYECGFOAZwH/////";

    let (status, body) = send_json(app, post_json(STT, json!({ "audio": audio }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], phrase_for_len(audio.len()));
}

#[tokio::test]
async fn test_stt_phrase_depends_only_on_length() {
    let engine = Arc::new(FakeSpeechClient::with_audio(b"unused".to_vec()));

    let (_, first) = send_json(
        setup_app(engine.clone(), None, StatusPolicy::Uniform),
        post_json(STT, json!({ "audio": "AAAA" })),
    )
    .await;
    let (_, second) = send_json(
        setup_app(engine, None, StatusPolicy::Uniform),
        post_json(STT, json!({ "audio": "////" })),
    )
    .await;

    assert_eq!(first["text"], second["text"]);
    assert_eq!(first["text"], phrase_for_len(4));
}

#[tokio::test]
async fn test_stt_missing_audio() {
    let engine = Arc::new(FakeSpeechClient::with_audio(b"unused".to_vec()));

    for body in [
        json!({}),
        json!({ "audio": "" }),
        json!({ "audio": null }),
        json!({ "audio": false }),
        json!({ "audio": 0 }),
    ] {
        let app = setup_app(engine.clone(), None, StatusPolicy::Uniform);
        let (status, body) = send_json(app, post_json(STT, body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "No audio data provided" }));
    }
}

#[tokio::test]
async fn test_stt_empty_body_is_missing_audio() {
    let app = setup_app(
        Arc::new(FakeSpeechClient::with_audio(b"unused".to_vec())),
        None,
        StatusPolicy::Uniform,
    );

    let (status, body) = send_json(app, post(STT, "")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "No audio data provided");
}

#[tokio::test]
async fn test_stt_invalid_base64() {
    let app = setup_app(
        Arc::new(FakeSpeechClient::with_audio(b"unused".to_vec())),
        None,
        StatusPolicy::Uniform,
    );

    let (status, body) = send_json(app, post_json(STT, json!({ "audio": "not*base64!" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid base64 audio data"));
}

#[tokio::test]
async fn test_tts_returns_encoded_audio() {
    let audio = b"ID3\x04\x00fake-mp3-frames".to_vec();
    let engine = Arc::new(FakeSpeechClient::with_audio(audio.clone()));
    let app = setup_app(engine.clone(), Some("sk-test"), StatusPolicy::Uniform);

    let (status, body) = send_json(app, post_json(TTS, json!({ "text": "Hello" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Audio generated successfully");
    let encoded = body["audioContent"].as_str().unwrap();
    assert_eq!(encoded, AudioCodec::encode(&audio));
    assert_eq!(AudioCodec::decode(encoded).unwrap(), audio);
    assert_eq!(engine.calls(), 1);
}

#[tokio::test]
async fn test_tts_missing_text() {
    let engine = Arc::new(FakeSpeechClient::with_audio(b"audio".to_vec()));

    for body in [
        json!({}),
        json!({ "text": "" }),
        json!({ "text": 0 }),
        json!({ "text": false }),
    ] {
        let app = setup_app(engine.clone(), Some("sk-test"), StatusPolicy::Uniform);
        let (status, body) = send_json(app, post_json(TTS, body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "No text provided" }));
    }
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_tts_missing_api_key() {
    let engine = Arc::new(FakeSpeechClient::with_audio(b"audio".to_vec()));
    let app = setup_app(engine.clone(), None, StatusPolicy::Uniform);

    let (status, body) = send_json(app, post_json(TTS, json!({ "text": "Hello" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "OPENAI_API_KEY is not configured" }));
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_tts_upstream_failure_hides_provider_body() {
    let engine = Arc::new(FakeSpeechClient::rejecting(
        429,
        r#"{"error":{"message":"Rate limit reached for org-secret"}}"#,
    ));
    let app = setup_app(engine.clone(), Some("sk-test"), StatusPolicy::Uniform);

    let (status, _, raw) = send(app, post_json(TTS, json!({ "text": "Hello" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(body, json!({ "error": "Failed to generate speech" }));
    assert!(!String::from_utf8_lossy(&raw).contains("org-secret"));
    assert_eq!(engine.calls(), 1);
}

#[tokio::test]
async fn test_tts_empty_provider_audio_is_failure() {
    let engine = Arc::new(FakeSpeechClient::with_audio(Vec::new()));
    let app = setup_app(engine, Some("sk-test"), StatusPolicy::Uniform);

    let (status, body) = send_json(app, post_json(TTS, json!({ "text": "Hello" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate speech");
}

#[tokio::test]
async fn test_non_string_field_is_invalid_body() {
    let engine = Arc::new(FakeSpeechClient::with_audio(b"audio".to_vec()));

    let (status, body) = send_json(
        setup_app(engine.clone(), Some("sk-test"), StatusPolicy::Uniform),
        post_json(STT, json!({ "audio": true })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Invalid request body: audio must be a string");

    let (status, body) = send_json(
        setup_app(engine.clone(), Some("sk-test"), StatusPolicy::Uniform),
        post_json(TTS, json!({ "text": { "value": "Hello" } })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Invalid request body: text must be a string");
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_tts_provider_timeout_is_failure() {
    let engine = Arc::new(FakeSpeechClient::new(FakeSpeechReply::Timeout));

    let (status, body) = send_json(
        setup_app(engine.clone(), Some("sk-test"), StatusPolicy::Uniform),
        post_json(TTS, json!({ "text": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to generate speech" }));

    let (status, _) = send_json(
        setup_app(engine.clone(), Some("sk-test"), StatusPolicy::Strict),
        post_json(TTS, json!({ "text": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(engine.calls(), 2);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = setup_app(
        Arc::new(FakeSpeechClient::with_audio(b"audio".to_vec())),
        Some("sk-test"),
        StatusPolicy::Uniform,
    );

    let (status, body) = send_json(app, post(TTS, "{\"text\": ")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_body_over_limit_is_rejected() {
    let app = setup_app_with(
        Arc::new(FakeSpeechClient::with_audio(b"audio".to_vec())),
        None,
        StatusPolicy::Uniform,
        ServerConfig::new("127.0.0.1", 0).with_max_body_bytes(64),
    );
    let audio = "A".repeat(1024);

    let (status, headers, raw) = send(app, post_json(STT, json!({ "audio": audio }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&headers);
    let body: Value = serde_json::from_slice(&raw).unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_strict_status_codes() {
    let ok_engine = Arc::new(FakeSpeechClient::with_audio(b"audio".to_vec()));
    let failing_engine = Arc::new(FakeSpeechClient::rejecting(500, "boom"));

    let (status, _) = send_json(
        setup_app(ok_engine.clone(), Some("sk-test"), StatusPolicy::Strict),
        post_json(TTS, json!({ "text": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send_json(
        setup_app(failing_engine, Some("sk-test"), StatusPolicy::Strict),
        post_json(TTS, json!({ "text": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to generate speech");

    let (status, _) = send_json(
        setup_app(ok_engine, Some("sk-test"), StatusPolicy::Strict),
        post_json(TTS, json!({ "text": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cors_headers_on_every_response() {
    let engine = Arc::new(FakeSpeechClient::with_audio(b"audio".to_vec()));

    let (status, headers, _) = send(
        setup_app(engine.clone(), Some("sk-test"), StatusPolicy::Uniform),
        post_json(TTS, json!({ "text": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);

    let (status, headers, _) = send(
        setup_app(engine.clone(), None, StatusPolicy::Uniform),
        post_json(TTS, json!({ "text": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&headers);

    let (status, headers, _) = send(
        setup_app(engine, None, StatusPolicy::Uniform),
        post_json(STT, json!({ "audio": "AAAA" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);
}

#[tokio::test]
async fn test_preflight_on_both_endpoints() {
    let engine = Arc::new(FakeSpeechClient::with_audio(b"audio".to_vec()));

    for uri in [STT, TTS] {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let (status, headers, body) =
            send(setup_app(engine.clone(), None, StatusPolicy::Uniform), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_cors(&headers);
        assert!(body.is_empty());
    }
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_ping() {
    let app = setup_app(
        Arc::new(FakeSpeechClient::with_audio(b"audio".to_vec())),
        Some("sk-test"),
        StatusPolicy::Uniform,
    );
    let request = Request::builder()
        .uri("/ping")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send_json(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["synthesis_configured"], true);
}
