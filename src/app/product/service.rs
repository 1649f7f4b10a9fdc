//! 商品业务服务

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::model::{Product, ProductError};

/// 商品服务能力，处理器只依赖这个 trait
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ProductError>;
    async fn get(&self, id: i64) -> Result<Product, ProductError>;
    async fn create(&self, product: Product) -> Result<i64, ProductError>;
    async fn update(&self, id: i64, product: Product) -> Result<(), ProductError>;
    async fn delete(&self, id: i64) -> Result<(), ProductError>;
}

#[derive(Default)]
struct Catalog {
    next_id: i64,
    products: BTreeMap<i64, Product>,
}

/// 内存存储实现，id 从 1 开始递增
#[derive(Default)]
pub struct InMemoryProductService {
    catalog: RwLock<Catalog>,
}

impl InMemoryProductService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductService for InMemoryProductService {
    async fn list(&self) -> Result<Vec<Product>, ProductError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Product, ProductError> {
        let catalog = self.catalog.read().await;
        catalog
            .products
            .get(&id)
            .cloned()
            .ok_or(ProductError::NotFound)
    }

    async fn create(&self, mut product: Product) -> Result<i64, ProductError> {
        product.check()?;

        let mut catalog = self.catalog.write().await;
        catalog.next_id += 1;
        let id = catalog.next_id;
        product.id = id;
        catalog.products.insert(id, product);

        debug!(id, "product created");
        Ok(id)
    }

    async fn update(&self, id: i64, mut product: Product) -> Result<(), ProductError> {
        let mut catalog = self.catalog.write().await;
        let slot = catalog
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound)?;

        product.check()?;
        product.id = id;
        *slot = product;

        debug!(id, "product updated");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ProductError> {
        let mut catalog = self.catalog.write().await;
        match catalog.products.remove(&id) {
            Some(_) => {
                debug!(id, "product deleted");
                Ok(())
            }
            None => Err(ProductError::NotFound),
        }
    }
}
