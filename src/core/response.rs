//! 核心响应处理模块

use serde::Serialize;

/// 变更操作的确认消息，例如 `{"message":"updated"}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn updated() -> Self {
        Self { message: "updated" }
    }

    pub fn deleted() -> Self {
        Self { message: "deleted" }
    }
}

/// 创建成功后只返回新分配的 id
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
