//! HTTP Middleware
//!
//! - CORS：所有响应（成功、失败、预检）都带同一组跨域头
//! - HTTP 状态码错误日志

use std::time::Duration;

use axum::{
    extract::Request,
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// 允许的来源
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// 允许的请求头（与 dashboard 客户端发送的一致）
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// CORS 配置 - 允许所有来源的跨域请求
///
/// 所有 OPTIONS 请求都按预检处理，直接返回空 200，不进入路由。
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
        .max_age(Duration::from_secs(3600))
}

/// 所有响应（不只是预检）都带 Allow-Headers
pub fn allow_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    )
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
/// 注意：错误原因在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
