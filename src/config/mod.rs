#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_ROUTE_PATH: &str = "/api/chat";
pub const DEFAULT_BACKEND_ENDPOINT: &str = "http://localhost:5000/api/chat";
