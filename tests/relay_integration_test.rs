use anyhow::Result;
use chat_relay::{RelayServer, TomlConfig};
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct RunningRelay {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<chat_relay::Result<()>>,
}

impl RunningRelay {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) -> Result<()> {
        let _ = self.shutdown.send(());
        self.task.await??;
        Ok(())
    }
}

async fn start_relay(backend_endpoint: &str) -> Result<RunningRelay> {
    let config = TomlConfig::from_toml_str(&format!(
        r#"
[server]
listen_addr = "127.0.0.1:0"
route_path = "/api/chat"

[backend]
endpoint = "{}"
"#,
        backend_endpoint
    ))?;

    let server = RelayServer::from_config(&config);
    let listener = RelayServer::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (shutdown, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        server
            .serve_with_shutdown(listener, async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    Ok(RunningRelay {
        addr,
        shutdown,
        task,
    })
}

#[tokio::test]
async fn test_relay_returns_backend_response() -> Result<()> {
    let backend = MockServer::start_async().await;
    let request_body = json!({
        "message": "What is Rust?",
        "history": [{"role": "user", "content": "hello"}]
    });
    let backend_reply = json!({"response": "A systems language.", "sources": []});

    let backend_mock = backend
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/chat")
                .header("content-type", "application/json")
                .json_body(request_body.clone());
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(backend_reply.clone());
        })
        .await;

    let relay = start_relay(&backend.url("/api/chat")).await?;

    let response = reqwest::Client::new()
        .post(relay.url("/api/chat"))
        .json(&request_body)
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body, backend_reply);
    backend_mock.assert_async().await;

    relay.stop().await
}

#[tokio::test]
async fn test_backend_error_status_becomes_success() -> Result<()> {
    let backend = MockServer::start_async().await;
    let backend_mock = backend
        .mock_async(|when, then| {
            when.method(POST).path("/api/chat");
            then.status(500)
                .header("Content-Type", "application/json")
                .json_body(json!({"error": "model crashed"}));
        })
        .await;

    let relay = start_relay(&backend.url("/api/chat")).await?;

    let response = reqwest::Client::new()
        .post(relay.url("/api/chat"))
        .json(&json!({"message": "hi"}))
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body, json!({"error": "model crashed"}));
    backend_mock.assert_async().await;

    relay.stop().await
}

#[tokio::test]
async fn test_unreachable_backend_returns_generic_error() -> Result<()> {
    // 綁定後立即釋放，確保該埠沒有服務
    let unused = std::net::TcpListener::bind("127.0.0.1:0")?;
    let dead_addr = unused.local_addr()?;
    drop(unused);

    let relay = start_relay(&format!("http://{}/api/chat", dead_addr)).await?;

    let response = reqwest::Client::new()
        .post(relay.url("/api/chat"))
        .json(&json!({"message": "hi"}))
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert_eq!(body, json!({"message": "Application not found"}));

    relay.stop().await
}

#[tokio::test]
async fn test_non_json_body_is_never_forwarded() -> Result<()> {
    let backend = MockServer::start_async().await;
    let backend_mock = backend
        .mock_async(|when, then| {
            when.method(POST).path("/api/chat");
            then.status(200).json_body(json!({"response": "unexpected"}));
        })
        .await;

    let relay = start_relay(&backend.url("/api/chat")).await?;

    let response = reqwest::Client::new()
        .post(relay.url("/api/chat"))
        .header("Content-Type", "application/json")
        .body("message=hi")
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert_eq!(body, json!({"message": "Application not found"}));
    backend_mock.assert_hits_async(0).await;

    relay.stop().await
}

#[tokio::test]
async fn test_non_json_backend_reply_returns_generic_error() -> Result<()> {
    let backend = MockServer::start_async().await;
    let backend_mock = backend
        .mock_async(|when, then| {
            when.method(POST).path("/api/chat");
            then.status(502).body("Bad Gateway");
        })
        .await;

    let relay = start_relay(&backend.url("/api/chat")).await?;

    let response = reqwest::Client::new()
        .post(relay.url("/api/chat"))
        .json(&json!({"message": "hi"}))
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert_eq!(body, json!({"message": "Application not found"}));
    backend_mock.assert_async().await;

    relay.stop().await
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() -> Result<()> {
    let backend = MockServer::start_async().await;
    let backend_mock = backend
        .mock_async(|when, then| {
            when.method(POST).path("/api/chat");
            then.status(200).json_body(json!({"response": "ok"}));
        })
        .await;

    let relay = start_relay(&backend.url("/api/chat")).await?;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..5 {
        let client = client.clone();
        let url = relay.url("/api/chat");
        handles.push(tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({"message": format!("request {}", i)}))
                .send()
                .await
        }));
    }

    for handle in handles {
        let response = handle.await??;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }
    backend_mock.assert_hits_async(5).await;

    relay.stop().await
}

#[tokio::test]
async fn test_key_order_preserved_in_both_directions() -> Result<()> {
    let request_raw = r#"{"zeta":1,"alpha":{"y":true,"x":null},"mid":[3,1,2]}"#;
    let reply_raw = r#"{"zeta":1,"alpha":2,"beta":{"d":"4","c":"3"}}"#;

    let backend = MockServer::start_async().await;
    let backend_mock = backend
        .mock_async(|when, then| {
            when.method(POST).path("/api/chat").body(request_raw);
            then.status(200)
                .header("Content-Type", "application/json")
                .body(reply_raw);
        })
        .await;

    let relay = start_relay(&backend.url("/api/chat")).await?;

    let response = reqwest::Client::new()
        .post(relay.url("/api/chat"))
        .header("Content-Type", "application/json")
        .body(request_raw)
        .send()
        .await?;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await?, reply_raw);
    backend_mock.assert_async().await;

    relay.stop().await
}
