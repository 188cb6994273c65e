//! carevoice - 患者护理语音网关
//!
//! 提供 voice-stt / voice-tts 两个 JSON 端点:
//! - Domain: audio/, medication
//! - Application: ports, services
//! - Infrastructure: http, adapters

use std::sync::Arc;

use carevoice::config::{load_config, print_config};
use carevoice::infrastructure::adapters::{OpenAiSpeechClient, PlaceholderTranscriber};
use carevoice::infrastructure::http::{AppState, HttpServer, ServerConfig, StatusPolicy};
use carevoice::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    init_logging(&config.log);

    tracing::info!("carevoice - voice gateway");
    print_config(&config);

    if config.synthesis.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not configured, voice-tts requests will fail");
    }

    // 创建上游语音合成客户端
    let speech_engine = Arc::new(OpenAiSpeechClient::new(config.synthesis.client_config())?);

    // 演示用识别器，尚未接入真实 STT 引擎
    let transcriber = Arc::new(PlaceholderTranscriber::new());

    // 创建 HTTP 服务器
    let state = AppState::new(transcriber, speech_engine, config.synthesis.settings())
        .with_status_policy(StatusPolicy::from_strict(config.server.strict_status_codes));
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
