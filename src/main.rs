use chat_relay::core::ConfigProvider;
use chat_relay::utils::{logger, validation::Validate};
use chat_relay::{CliConfig, RelayError, RelayServer, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 指定設定檔時，以檔案內容取代位址相關參數
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load {}: {}", path.display(), e);
                std::process::exit(e.exit_code());
            }
        },
        None => None,
    };

    let verbose = cli.verbose;
    let json_logs = cli.json_logs || file_config.as_ref().is_some_and(TomlConfig::json_logs);
    let level = file_config.as_ref().and_then(|config| config.log_level());
    logger::init_logger(verbose, json_logs, level);

    tracing::info!("Starting chat-relay v{}", env!("CARGO_PKG_VERSION"));
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match file_config {
        Some(config) => run(config).await,
        None => run(cli).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Relay stopped with error: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<(), RelayError> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    RelayServer::run(&config).await
}
