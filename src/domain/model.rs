use serde::{Deserialize, Serialize};

/// Message returned to the caller for every relay failure.
pub const FAILURE_MESSAGE: &str = "Application not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn application_not_found() -> Self {
        Self {
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub app: String,
    pub version: String,
    pub ts: i64,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            app: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ts: chrono::Utc::now().timestamp(),
        }
    }
}
