//! 商品处理器
//!
//! 把 HTTP 请求翻译成 [`ProductService`] 调用，再把结果或错误翻译成状态码。
//! 单资源操作总是先解析路径 id，解析失败直接返回 400，不会调用服务。

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::PathRejection, FromRequest, Path, Request, State},
    http::StatusCode,
    response::Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

use super::{
    model::{Product, ProductError},
    service::ProductService,
};
use crate::core::{
    error::CoreError,
    response::{CreatedResponse, MessageResponse},
};

const INVALID_ID: &str = "invalid id";
const NOT_FOUND: &str = "product not found";
const NOT_AN_OBJECT: &str = "request body must be a JSON object";

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
}

impl AppState {
    pub fn new(product_service: Arc<dyn ProductService>) -> Self {
        Self { product_service }
    }
}

/// 把路径参数解析为十进制 i64
pub fn parse_id(raw: &str) -> Result<i64, CoreError> {
    raw.parse::<i64>()
        .map_err(|_| CoreError::bad_request(INVALID_ID))
}

fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, CoreError> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(_) => Err(CoreError::bad_request(INVALID_ID)),
    }
}

/// JSON 请求体
///
/// 不检查 `Content-Type`，任何解码失败都映射为 400 和解码器的错误信息。
/// 请求体必须是 JSON 对象，数组不会按位置解码成结构体。
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| CoreError::bad_request(rejection.body_text()))?;

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| CoreError::bad_request(e.to_string()))?;
        if !value.is_object() {
            return Err(CoreError::bad_request(NOT_AN_OBJECT));
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|e| CoreError::bad_request(e.to_string()))
    }
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    match state.product_service.list().await {
        Ok(products) => Ok(Json(products)),
        Err(err) => {
            error!(error = %err, "failed to list products");
            Err(CoreError::internal(err.to_string()))
        }
    }
}

pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let id = path_id(path)?;

    match state.product_service.get(id).await {
        Ok(product) => Ok(Json(product)),
        Err(ProductError::NotFound) => Err(CoreError::not_found(NOT_FOUND)),
        Err(err) => {
            error!(id, error = %err, "failed to get product");
            Err(CoreError::internal(err.to_string()))
        }
    }
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<JsonBody<Product>, CoreError>,
) -> Result<(StatusCode, Json<CreatedResponse>), CoreError> {
    let JsonBody(product) = body?;

    match state.product_service.create(product).await {
        Ok(id) => Ok((StatusCode::CREATED, Json(CreatedResponse { id }))),
        Err(err) => {
            warn!(error = %err, "failed to create product");
            Err(CoreError::bad_request(err.to_string()))
        }
    }
}

pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<JsonBody<Product>, CoreError>,
) -> Result<Json<MessageResponse>, CoreError> {
    let id = path_id(path)?;
    let JsonBody(product) = body?;

    match state.product_service.update(id, product).await {
        Ok(()) => Ok(Json(MessageResponse::updated())),
        Err(ProductError::NotFound) => Err(CoreError::not_found(NOT_FOUND)),
        Err(err) => {
            warn!(id, error = %err, "failed to update product");
            Err(CoreError::bad_request(err.to_string()))
        }
    }
}

pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, CoreError> {
    let id = path_id(path)?;

    match state.product_service.delete(id).await {
        Ok(()) => Ok(Json(MessageResponse::deleted())),
        Err(ProductError::NotFound) => Err(CoreError::not_found(NOT_FOUND)),
        Err(err) => {
            error!(id, error = %err, "failed to delete product");
            Err(CoreError::internal(err.to_string()))
        }
    }
}
