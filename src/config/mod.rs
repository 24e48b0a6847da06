//! Configuration management
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! The exporter reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CONTENT_EXPORT_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//! - Validation before anything connects
//!
//! When no file exists the same overrides are applied to the defaults, so the
//! exporter can be configured entirely from the environment.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [database]
//! engine = "mysql"
//! host = "db.example.com"
//! port = 3306
//! user = "${CONTENT_EXPORT_DB_USER}"
//! password = "${CONTENT_EXPORT_DB_PASSWORD}"
//! database = "coachbot"
//! ssl_mode = "require"
//!
//! [output]
//! path = "generated-content.json"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_env};
pub use schema::{
    ApplicationConfig, DatabaseConfig, DatabaseEngine, ExporterConfig, LoggingConfig,
    OutputConfig, SslMode,
};
pub use secret::{secret_string, SecretString, SecretValue};
