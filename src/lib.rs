//! carevoice - 患者护理仪表盘的语音 I/O 网关
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Audio: 音频负载、base64 编解码、格式与 MIME
//! - Medication: 用药提醒文案
//!
//! 应用层 (application/):
//! - Ports: Transcriber, SpeechSynthesizer, SpeechOutput
//! - Services: TranscriptionService, SpeechSynthesisService, ReminderPlaybackClient
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: voice-stt / voice-tts 网关
//! - Adapters: 演示识别器、OpenAI 合成客户端、本地/网关播放通道

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::{load_config, AppConfig};
