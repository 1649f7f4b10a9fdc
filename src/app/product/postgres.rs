//! PostgreSQL 商品服务

use async_trait::async_trait;
use sqlx::{postgres::PgPool, FromRow};
use tracing::{error, info};

use super::model::{Product, ProductError};
use super::service::ProductService;

const SELECT_COLUMNS: &str = "id, name, description, price, weight, age_group, breed_type, \
                              category, image_url, stock";

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    weight: String,
    age_group: String,
    breed_type: Vec<String>,
    category: String,
    image_url: String,
    stock: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            weight: row.weight,
            age_group: row.age_group,
            breed_type: row.breed_type,
            category: row.category,
            image_url: row.image_url,
            stock: row.stock,
        }
    }
}

fn internal(err: sqlx::Error) -> ProductError {
    error!("Database error: {}", err);
    ProductError::Internal(err.to_string())
}

/// 基于连接池的商品服务
#[derive(Clone)]
pub struct PgProductService {
    pool: PgPool,
}

impl PgProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 创建 products 表（已存在则跳过）
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        info!("Creating products table if missing...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                price DOUBLE PRECISION NOT NULL CHECK (price >= 0),
                weight TEXT NOT NULL DEFAULT '',
                age_group TEXT NOT NULL DEFAULT '',
                breed_type TEXT[] NOT NULL DEFAULT '{}',
                category TEXT NOT NULL DEFAULT '',
                image_url TEXT NOT NULL DEFAULT '',
                stock BIGINT NOT NULL DEFAULT 0 CHECK (stock >= 0)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ProductService for PgProductService {
    async fn list(&self) -> Result<Vec<Product>, ProductError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as(&format!("SELECT {} FROM products ORDER BY id", SELECT_COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(internal)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Product, ProductError> {
        let row: Option<ProductRow> =
            sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", SELECT_COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(internal)?;

        row.map(Product::from).ok_or(ProductError::NotFound)
    }

    async fn create(&self, product: Product) -> Result<i64, ProductError> {
        product.check()?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products
                (name, description, price, weight, age_group, breed_type, category, image_url, stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.weight)
        .bind(&product.age_group)
        .bind(&product.breed_type)
        .bind(&product.category)
        .bind(&product.image_url)
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await
        .map_err(internal)?;

        Ok(id)
    }

    async fn update(&self, id: i64, product: Product) -> Result<(), ProductError> {
        product.check()?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $1, description = $2, price = $3, weight = $4, age_group = $5,
                breed_type = $6, category = $7, image_url = $8, stock = $9
            WHERE id = $10
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.weight)
        .bind(&product.age_group)
        .bind(&product.breed_type)
        .bind(&product.category)
        .bind(&product.image_url)
        .bind(product.stock)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(internal)?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(internal)?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound);
        }
        Ok(())
    }
}
