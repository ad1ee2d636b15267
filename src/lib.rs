pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::{forwarder::HttpForwarder, relay::Relay};
pub use server::RelayServer;
pub use utils::error::{RelayError, Result};
