//! HTTP Error Handling
//!
//! 两类业务错误映射为各自的状态码（404 / 400），响应体统一为
//! `{"detail": "..."}`。存储层故障记完整日志后折算为通用 500。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::records::RecordError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, ErrorResponse::new(msg))
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(error = %msg, "Resource conflict");
                // 对外契约：姓名对冲突返回 400
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::Internal(msg) => {
                // 真实错误只进日志，不进响应体
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("internal server error"),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<RecordError> for ApiError {
    fn from(e: RecordError) -> Self {
        match e {
            RecordError::NotFound(_) => ApiError::NotFound(e.to_string()),
            RecordError::Conflict { .. } => ApiError::Conflict(e.to_string()),
            RecordError::Database(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}
