use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::domain::model::ErrorBody;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Failed to read request body: {message}")]
    BodyReadError { message: String },

    #[error("Request body is not valid JSON: {0}")]
    InvalidRequestBody(#[from] serde_json::Error),

    #[error("Backend request failed: {0}")]
    BackendError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Backend,
    Configuration,
    System,
}

impl RelayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RelayError::BodyReadError { .. } | RelayError::InvalidRequestBody(_) => {
                ErrorCategory::Request
            }
            RelayError::BackendError(_) => ErrorCategory::Backend,
            RelayError::ConfigError { .. }
            | RelayError::ConfigValidationError { .. }
            | RelayError::InvalidConfigValueError { .. }
            | RelayError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RelayError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 程序結束碼，設定錯誤與系統錯誤分開
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
            ErrorCategory::Request | ErrorCategory::Backend => 1,
        }
    }
}

// 所有失敗對呼叫端一律回傳相同的 500 訊息
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(
            "❌ Error communicating with backend: {} (Category: {:?})",
            self,
            self.category()
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::application_not_found()),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
