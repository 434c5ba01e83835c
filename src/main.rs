use clap::Parser;
use ly_mcp::cli::dispatcher::{Dispatcher, Overrides};
use ly_mcp::cli::main_types::Cli;
use ly_mcp::storage::config::{CONFIG_FILE_NAME, Config};
use ly_mcp::utils::logging::init_logging;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join(CONFIG_FILE_NAME));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if let Some(config_dir) = &cli.config_dir {
        tracing::debug!(config_dir = %config_dir, "using config directory");
    }

    let overrides = Overrides {
        base_url: cli.base_url,
        timeout_secs: cli.timeout,
    };

    let dispatcher = Dispatcher::new(config, config_path, overrides);
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
