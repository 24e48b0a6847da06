//! Validate config command implementation

use crate::adapters::database::connect_source;
use crate::cli::resolve_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Also connect to the database and run `SELECT 1`
    #[arg(long)]
    pub check_connection: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(config_path = ?config_path, "Validating configuration");

        let config = match resolve_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Engine: {}", config.database.engine);
        println!("  Database: {}", config.database.endpoint_safe());
        println!(
            "  Password: {}",
            if config.database.password.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        println!("  SSL Mode: {}", config.database.ssl_mode);
        println!(
            "  Connect Timeout: {}s",
            config.database.connect_timeout_seconds
        );
        println!("  Output: {}", config.output.path);
        println!();

        if !self.check_connection {
            return Ok(0);
        }

        let source = match connect_source(&config.database).await {
            Ok(a) => a,
            Err(e) => {
                println!("❌ Connection failed");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        match source.test_connection().await {
            Ok(()) => {
                println!("✅ Connected to {}", source.describe());
                Ok(0)
            }
            Err(e) => {
                println!("❌ Connection test failed");
                println!("   Error: {e}");
                Ok(e.exit_code())
            }
        }
    }
}
