use crate::core::Forwarder;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Forwards payloads to a single backend endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpForwarder {
    endpoint: String,
    client: Client,
}

impl HttpForwarder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, payload: Value) -> Result<Value> {
        tracing::debug!("Forwarding request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(&payload).send().await?;

        // 後端狀態碼不影響結果，只要回應是 JSON 就原樣轉回
        tracing::debug!("Backend response status: {}", response.status());
        let data: Value = response.json().await?;
        Ok(data)
    }
}
