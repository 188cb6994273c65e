//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 上游凭证的进程级环境变量
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `CAREVOICE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// `synthesis.api_key` 未设置时使用 `OPENAI_API_KEY`。
///
/// # 环境变量示例
/// - `CAREVOICE_SERVER__PORT=8080`
/// - `CAREVOICE_SERVER__STRICT_STATUS_CODES=true`
/// - `CAREVOICE_SYNTHESIS__TIMEOUT_SECS=10`
/// - `CAREVOICE_PLAYBACK__OUTPUT=gateway`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5070)?
        .set_default("server.max_body_bytes", 10 * 1024 * 1024)?
        .set_default("server.strict_status_codes", false)?
        .set_default("synthesis.base_url", "https://api.openai.com")?
        .set_default("synthesis.model", "tts-1")?
        .set_default("synthesis.voice", "alloy")?
        .set_default("synthesis.format", "mp3")?
        .set_default("synthesis.timeout_secs", 30)?
        .set_default("playback.output", "local")?
        .set_default("playback.timeout_secs", 30)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: CAREVOICE_SYNTHESIS__BASE_URL=http://localhost:9000
    builder = builder.add_source(
        Environment::with_prefix("CAREVOICE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    app_config.synthesis.api_key = fallback_api_key(
        app_config.synthesis.api_key.take(),
        std::env::var(API_KEY_ENV).ok(),
    );

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 配置文件中的 key 优先，空白值视为未设置
fn fallback_api_key(configured: Option<String>, from_env: Option<String>) -> Option<String> {
    configured
        .filter(|key| !key.trim().is_empty())
        .or_else(|| from_env.filter(|key| !key.trim().is_empty()))
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    if config.synthesis.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Synthesis base URL cannot be empty".to_string(),
        ));
    }

    if config.synthesis.model.is_empty() || config.synthesis.voice.is_empty() {
        return Err(ConfigError::ValidationError(
            "Synthesis model and voice cannot be empty".to_string(),
        ));
    }

    if config.synthesis.timeout_secs == 0 || config.playback.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    let key_state = if config.synthesis.api_key.is_some() {
        "configured"
    } else {
        "missing"
    };

    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("Strict Status Codes: {}", config.server.strict_status_codes);
    tracing::info!("Synthesis URL: {}", config.synthesis.base_url);
    tracing::info!(
        "Synthesis Voice: model={} voice={} format={}",
        config.synthesis.model,
        config.synthesis.voice,
        config.synthesis.format
    );
    tracing::info!("Synthesis Timeout: {}s", config.synthesis.timeout_secs);
    tracing::info!("Synthesis API Key: {}", key_state);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::PlaybackOutput;
    use crate::domain::AudioFormat;
    use std::io::Write;
    use std::sync::Mutex;

    /// 读取环境变量的测试串行执行
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// 设置环境变量，返回原值用于恢复
    fn set_env(vars: &[(&str, Option<&str>)]) -> Vec<(String, Option<String>)> {
        vars.iter()
            .map(|(name, value)| {
                let original = std::env::var(name).ok();
                match value {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
                (name.to_string(), original)
            })
            .collect()
    }

    fn restore_env(saved: Vec<(String, Option<String>)>) {
        for (name, value) in saved {
            match value {
                Some(value) => std::env::set_var(&name, value),
                None => std::env::remove_var(&name),
            }
        }
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = AppConfig::default();
        config.synthesis.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.synthesis.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_fallback_api_key() {
        assert_eq!(
            fallback_api_key(Some("sk-file".into()), Some("sk-env".into())),
            Some("sk-file".to_string())
        );
        assert_eq!(
            fallback_api_key(Some("  ".into()), Some("sk-env".into())),
            Some("sk-env".to_string())
        );
        assert_eq!(fallback_api_key(None, Some(String::new())), None);
        assert_eq!(fallback_api_key(None, None), None);
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved = set_env(&[("CAREVOICE_SERVER__PORT", None), (API_KEY_ENV, None)]);
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[server]
port = 9090
strict_status_codes = true

[synthesis]
api_key = "sk-from-file"
voice = "nova"
format = "opus"

[playback]
output = "gateway"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9090);
        assert!(config.server.strict_status_codes);
        assert_eq!(config.synthesis.api_key.as_deref(), Some("sk-from-file"));
        assert_eq!(config.synthesis.voice, "nova");
        assert_eq!(config.synthesis.model, "tts-1");
        assert_eq!(config.synthesis.format, AudioFormat::Opus);
        assert_eq!(config.playback.output, PlaybackOutput::Gateway);
        assert_eq!(config.playback.player_command, "mpg123");
        restore_env(saved);
    }

    #[test]
    fn test_env_overrides_file_and_fills_api_key() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved = set_env(&[
            ("CAREVOICE_SERVER__PORT", Some("7001")),
            ("CAREVOICE_SYNTHESIS__VOICE", Some("shimmer")),
            (API_KEY_ENV, Some("sk-from-env")),
        ]);

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[server]\nport = 9090\n\n[synthesis]\nvoice = \"nova\"\n").unwrap();
        let result = load_config_from_path(Some(file.path()));
        restore_env(saved);

        let config = result.unwrap();
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.synthesis.voice, "shimmer");
        assert_eq!(config.synthesis.api_key.as_deref(), Some("sk-from-env"));
        assert_eq!(config.synthesis.model, "tts-1");
    }

    #[test]
    fn test_file_api_key_wins_over_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved = set_env(&[("CAREVOICE_SERVER__PORT", None), (API_KEY_ENV, Some("sk-from-env"))]);

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[synthesis]\napi_key = \"sk-from-file\"\n").unwrap();
        let result = load_config_from_path(Some(file.path()));
        restore_env(saved);

        assert_eq!(
            result.unwrap().synthesis.api_key.as_deref(),
            Some("sk-from-file")
        );
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved = set_env(&[("CAREVOICE_SERVER__PORT", None)]);
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[server]\nport = 0\n").unwrap();
        assert!(matches!(
            load_config_from_path(Some(file.path())),
            Err(ConfigError::ValidationError(_))
        ));
        restore_env(saved);
    }
}
