//! 应用层

pub mod product;

use axum::{middleware, response::Json, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

use crate::core::{middleware::request_logging_middleware, response::HealthResponse};
use product::AppState;

/// 健康检查
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// 组装完整应用：商品路由、健康检查和公共中间件
///
/// `timeout` 为 `None` 时不加超时层。
pub fn router(state: AppState, timeout: Option<Duration>) -> Router {
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(product::routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(middleware::from_fn(request_logging_middleware)),
        );

    match timeout {
        Some(duration) => app.layer(TimeoutLayer::new(duration)),
        None => app,
    }
}
