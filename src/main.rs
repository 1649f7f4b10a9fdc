use anyhow::Result;
use catfood_store::{
    infrastructure::logger::Logger, router, AppConfig, AppState, InMemoryProductService,
    ProductService,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    let _log_guard = Logger::init(&config.logging)?;

    info!("启动猫粮商店商品服务...");

    let service = build_service(&config).await?;
    let app = router(AppState::new(service), config.http.timeout());

    let addr = config.http.socket_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /api/products      - 获取所有商品");
    info!("   POST   /api/products      - 创建商品");
    info!("   GET    /api/products/:id  - 获取商品");
    info!("   PUT    /api/products/:id  - 更新商品");
    info!("   DELETE /api/products/:id  - 删除商品");
    info!("   GET    /health            - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

#[cfg(feature = "database")]
async fn build_service(config: &AppConfig) -> Result<Arc<dyn ProductService>> {
    use catfood_store::{app::product::PgProductService, infrastructure::database::DatabaseManager};

    match &config.database.url {
        Some(url) => {
            let db = DatabaseManager::connect(url, &config.database).await?;
            let service = PgProductService::new(db.get_pool().clone());
            service.ensure_schema().await?;
            info!("使用 PostgreSQL 存储");
            Ok(Arc::new(service))
        }
        None => {
            info!("未配置数据库，使用内存存储");
            Ok(Arc::new(InMemoryProductService::new()))
        }
    }
}

#[cfg(not(feature = "database"))]
async fn build_service(config: &AppConfig) -> Result<Arc<dyn ProductService>> {
    if config.database.url.is_some() {
        warn!("未启用 database 特性，忽略数据库配置");
    }
    Ok(Arc::new(InMemoryProductService::new()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C 信号: {}", e);
    }
    info!("收到退出信号，正在关闭...");
}
