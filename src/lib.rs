//! # 猫粮商店商品 API
//!
//! 基于 Axum 的商品 CRUD 接口，按分层结构组织：
//! - `app`: 路由与商品处理器、服务
//! - `core`: 统一错误、响应结构和中间件
//! - `infrastructure`: 配置、日志和数据库连接

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::product::{AppState, InMemoryProductService, Product, ProductError, ProductService};
pub use app::router;
pub use infrastructure::config::AppConfig;
