use clap::Parser;
use percolate_client::cli::command_handlers::PercolateHandler;
use percolate_client::cli::dry_run::DryRun;
use percolate_client::cli::main_types::Cli;
use percolate_client::error::{AppError, ClientError};
use percolate_client::storage::config::Config;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if let Some(config_dir) = &cli.config_dir {
        log::info!("Using config directory: {}", config_dir);
    }

    let handler = PercolateHandler::new(DryRun, cli.verbose);

    match handler.handle(&cli, &config).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Err(e) => {
            match &e {
                AppError::Client(ClientError::Configuration(err)) => eprintln!("Error: {}", err),
                other => eprintln!("Error: {}", other),
            }
            if let Some(hint) = e.troubleshooting_hint() {
                eprintln!("Hint: {}", hint);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
