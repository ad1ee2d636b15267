use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::Request,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use crate::core::relay::Relay;
use crate::core::HealthResponse;
use crate::utils::error::RelayError;

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// 讀取原始 body，避免 Json extractor 因 Content-Type 回傳 415
async fn relay_request(
    State(state): State<AppState>,
    req: Request<Body>,
) -> Result<Json<Value>, RelayError> {
    let body = to_bytes(req.into_body(), usize::MAX)
        .await
        .map_err(|e| RelayError::BodyReadError {
            message: e.to_string(),
        })?;

    let data = state.relay.relay(&body).await?;
    Ok(Json(data))
}

pub fn build_router(route_path: &str, relay: Relay) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(route_path, post(relay_request))
        .with_state(AppState { relay })
}
