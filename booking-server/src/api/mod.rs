//! API 路由模块
//!
//! # 结构
//!
//! - [`availability`] - 档期查询接口
//! - [`health`] - 健康检查
//! - [`reservations`] - 预订提交和查询接口

pub mod availability;
pub mod health;
pub mod reservations;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use shared::error::{AppError, AppResult};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(availability::router())
        .merge(reservations::router())
        .merge(health::router())
}

/// Build the fully configured application (middleware included, no state)
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging - one access log line per request
        .layer(middleware::from_fn(log_request))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}
