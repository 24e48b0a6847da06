//! Init command implementation
//!
//! Writes a sample configuration file.

use crate::cli::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your database host and name", self.output);
                println!("  2. Put credentials in a .env file or the environment:");
                println!("     - CONTENT_EXPORT_DB_USER");
                println!("     - CONTENT_EXPORT_DB_PASSWORD");
                println!("  3. Validate configuration: content-export validate-config --check-connection");
                println!("  4. Run export: content-export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

/// Sample configuration written by `init`
pub fn sample_config() -> &'static str {
    r#"# content-export configuration
#
# Any value can be overridden with CONTENT_EXPORT_<SECTION>_<KEY>,
# e.g. CONTENT_EXPORT_DATABASE_HOST or CONTENT_EXPORT_OUTPUT_PATH.

[application]
log_level = "info"

[database]
engine = "mysql"  # mysql | postgresql
host = "localhost"
port = 3306  # defaults to 3306 for mysql, 5432 for postgresql
user = "${CONTENT_EXPORT_DB_USER}"
password = "${CONTENT_EXPORT_DB_PASSWORD}"
database = "alphacoachbot"
ssl_mode = "prefer"  # disable | prefer | require
connect_timeout_seconds = 30

[output]
path = "generated-content.json"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseEngine, ExporterConfig};
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_parses() {
        let config: ExporterConfig = toml::from_str(sample_config()).unwrap();
        assert_eq!(config.database.engine, DatabaseEngine::MySql);
        assert_eq!(config.database.port(), 3306);
        assert_eq!(config.database.database, "alphacoachbot");
        assert_eq!(config.output.path, "generated-content.json");
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content-export.toml");
        fs::write(&path, "keep me").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), sample_config());
    }
}
