pub mod routes;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::core::forwarder::HttpForwarder;
use crate::core::relay::Relay;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_socket_addr;

pub use routes::{build_router, AppState};

pub struct RelayServer {
    router: Router,
}

impl RelayServer {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Wires an `HttpForwarder` pointing at the configured backend.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let forwarder = HttpForwarder::new(config.backend_endpoint());
        let relay = Relay::new(Arc::new(forwarder));
        Self::new(build_router(config.route_path(), relay))
    }

    pub async fn bind(addr: &str) -> Result<TcpListener> {
        let addr = validate_socket_addr("listen_addr", addr)?;
        let listener = TcpListener::bind(addr).await?;
        Ok(listener)
    }

    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("🚀 Relay listening on http://{}", addr);
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Relay server stopped");
        Ok(())
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn run<C: ConfigProvider>(config: &C) -> Result<()> {
        let listener = Self::bind(config.listen_addr()).await?;
        tracing::info!(
            "Relaying POST {} -> {}",
            config.route_path(),
            config.backend_endpoint()
        );

        Self::from_config(config)
            .serve_with_shutdown(listener, shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // 無法監聽訊號時持續運行
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
