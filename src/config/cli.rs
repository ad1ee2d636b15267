use crate::config::{DEFAULT_BACKEND_ENDPOINT, DEFAULT_LISTEN_ADDR, DEFAULT_ROUTE_PATH};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_route_path, validate_socket_addr, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "chat-relay")]
#[command(about = "Relays JSON chat requests to a backend service")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    #[arg(long, default_value = DEFAULT_ROUTE_PATH)]
    pub route_path: String,

    #[arg(long, default_value = DEFAULT_BACKEND_ENDPOINT)]
    pub backend_endpoint: String,

    #[arg(long, short, help = "TOML config file; replaces the address flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    fn route_path(&self) -> &str {
        &self.route_path
    }

    fn backend_endpoint(&self) -> &str {
        &self.backend_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("listen_addr", &self.listen_addr)?;
        validate_route_path("route_path", &self.route_path)?;
        validate_url("backend_endpoint", &self.backend_endpoint)?;
        Ok(())
    }
}
