//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// HTTP 层错误类型
///
/// 每个变体对应一个状态码，消息原样写入响应体的 `error` 字段。
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CoreError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        CoreError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        CoreError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        CoreError::InternalServerError(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CoreError::BadRequest(msg)
            | CoreError::NotFound(msg)
            | CoreError::InternalServerError(msg) => msg,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
