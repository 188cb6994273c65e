//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                       GET   健康检查
//! - /functions/v1/voice-stt     POST  语音转文字
//! - /functions/v1/voice-tts     POST  文字转语音
//!
//! 所有路径的 OPTIONS 预检由 CORS 中间件直接应答

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/functions/v1", function_routes())
}

/// Edge function 路由
fn function_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/voice-stt", post(handlers::transcribe))
        .route("/voice-tts", post(handlers::synthesize))
}
