//! HTTP Layer - 语音网关边界
//!
//! 解析请求、校验负载、分发到用例服务，并把结果映射为 JSON 响应

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{CORS_ALLOW_HEADERS, CORS_ALLOW_ORIGIN};
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::{AppState, StatusPolicy};
