use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> &str;
    fn route_path(&self) -> &str;
    fn backend_endpoint(&self) -> &str;
}

/// Sends one JSON document to the backend and returns its JSON reply.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, payload: Value) -> Result<Value>;
}
