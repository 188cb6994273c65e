//! 日志初始化
//!
//! `RUST_LOG` 优先，否则使用配置中的级别

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// 默认过滤规则
pub fn default_filter(config: &LogConfig) -> String {
    format!(
        "{},carevoice={},tower_http=debug",
        config.level, config.level
    )
}

/// 按配置构建 subscriber（文本或 JSON 格式）
pub fn build_subscriber<W>(
    config: &LogConfig,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    if config.json {
        Box::new(builder.json().finish())
    } else {
        Box::new(builder.finish())
    }
}

/// 初始化全局 tracing subscriber
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    let subscriber = build_subscriber(config, filter, std::io::stdout);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }
}
