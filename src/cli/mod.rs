//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap. Running the
//! binary without a subcommand performs an export.

pub mod commands;

use crate::config::{load_config, load_config_from_env, ExporterConfig};
use crate::domain::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

/// Configuration file picked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "content-export.toml";

/// content-export - generated content JSON exporter
#[derive(Parser, Debug)]
#[command(name = "content-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to content-export.toml, then environment only)
    #[arg(short, long, env = "CONTENT_EXPORT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CONTENT_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute (default: export)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export generated content to a JSON file
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Summarize an existing export file
    Inspect(commands::inspect::InspectArgs),
}

/// Load configuration for a command
///
/// An explicit path must exist. Without one, `content-export.toml` in the
/// working directory is used when present, otherwise the configuration comes
/// from `CONTENT_EXPORT_*` environment variables alone.
pub fn resolve_config(config_path: Option<&str>) -> Result<ExporterConfig> {
    match config_path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            tracing::debug!("No configuration file, using environment variables");
            load_config_from_env()
        }
    }
}
