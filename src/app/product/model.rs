//! 商品数据模型

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// 商品目录条目
///
/// `id` 由存储层分配，请求体中的 `id` 会被忽略。除 `name` 和 `price`
/// 外的字段缺省时取空值。更新是整体替换，不做字段合并。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub age_group: String,
    #[serde(default)]
    pub breed_type: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    #[serde(default)]
    pub stock: i64,
}

/// 服务层错误
///
/// `NotFound` 是独立的变体，处理器必须先匹配它再走通用错误分支。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("product not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

impl From<ValidationErrors> for ProductError {
    fn from(err: ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();
        messages.sort();

        ProductError::Validation(messages.join(", "))
    }
}

impl Product {
    /// 校验后返回领域错误
    pub fn check(&self) -> Result<(), ProductError> {
        self.validate().map_err(ProductError::from)
    }
}
