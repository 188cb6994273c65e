//! 基础设施层
//!
//! - adapters: 语音识别、语音合成、提醒播放的端口实现
//! - http: 语音网关 HTTP 边界

pub mod adapters;
pub mod http;
