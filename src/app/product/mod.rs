//! 商品资源：模型、服务与 HTTP 处理器

pub mod handler;
pub mod model;
#[cfg(feature = "database")]
pub mod postgres;
pub mod service;

use axum::{routing::get, Router};

pub use handler::AppState;
pub use model::{Product, ProductError};
#[cfg(feature = "database")]
pub use postgres::PgProductService;
pub use service::{InMemoryProductService, ProductService};

/// 注册 `/api/products` 路由
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/api/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .with_state(state)
}
