use crate::core::Forwarder;
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// Parses an inbound body and hands it to the forwarder.
///
/// One attempt per call. The inbound `Content-Type` is never consulted; the
/// body only has to parse as JSON.
#[derive(Clone)]
pub struct Relay {
    forwarder: Arc<dyn Forwarder>,
}

impl Relay {
    pub fn new(forwarder: Arc<dyn Forwarder>) -> Self {
        Self { forwarder }
    }

    pub async fn relay(&self, body: &[u8]) -> Result<Value> {
        let payload: Value = serde_json::from_slice(body)?;
        self.forwarder.forward(payload).await
    }
}
