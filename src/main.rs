// content-export - generated content JSON exporter
// Copyright (c) 2025 Content Export Contributors
// Licensed under the MIT License

use clap::Parser;
use content_export::cli::commands::export::ExportArgs;
use content_export::cli::{resolve_config, Cli, Commands};
use content_export::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the configuration when it loads; the
    // command reports configuration errors itself
    let loaded = match &cli.command {
        Some(Commands::Init(_)) | Some(Commands::Inspect(_)) => None,
        _ => resolve_config(cli.config.as_deref()).ok(),
    };
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config = loaded.map(|c| c.logging).unwrap_or_default();

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "content-export");

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // process::exit skips destructors; flush the log guard first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Some(Commands::Export(args)) => args.execute(config_path).await,
        Some(Commands::ValidateConfig(args)) => args.execute(config_path).await,
        Some(Commands::Init(args)) => args.execute().await,
        Some(Commands::Inspect(args)) => args.execute().await,
        None => ExportArgs::default().execute(config_path).await,
    }
}
