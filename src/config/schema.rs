//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the output file written when no path is configured
pub const DEFAULT_OUTPUT_PATH: &str = "generated-content.json";

/// Database server the export query runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    /// MySQL or MariaDB
    #[default]
    MySql,
    /// PostgreSQL
    PostgreSql,
}

impl DatabaseEngine {
    /// Port the server listens on unless configured otherwise
    pub fn default_port(self) -> u16 {
        match self {
            DatabaseEngine::MySql => 3306,
            DatabaseEngine::PostgreSql => 5432,
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DatabaseEngine::MySql => "mysql",
            DatabaseEngine::PostgreSql => "postgresql",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for DatabaseEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(DatabaseEngine::MySql),
            "postgresql" => Ok(DatabaseEngine::PostgreSql),
            _ => Err(format!(
                "Invalid engine '{s}'. Must be one of: mysql, postgresql"
            )),
        }
    }
}

/// TLS negotiation mode for the database connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    /// Plain TCP
    Disable,
    /// Use TLS when the server offers it, without verifying the certificate
    #[default]
    Prefer,
    /// Fail unless TLS is negotiated; PostgreSQL also verifies the certificate
    Require,
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for SslMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            _ => Err(format!(
                "Invalid ssl_mode '{s}'. Must be one of: disable, prefer, require"
            )),
        }
    }
}

/// Main exporter configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has defaults so that the whole configuration can also be
/// assembled from environment variables alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Database connection settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.database.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Server type (mysql, postgresql)
    #[serde(default)]
    pub engine: DatabaseEngine,

    /// Server host name or address
    #[serde(default = "default_db_host")]
    pub host: String,

    /// Server port; the engine's default port when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Login role
    #[serde(default)]
    pub user: String,

    /// Password for `user` (optional for trust/peer authentication)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretString>,

    /// Database name
    #[serde(default)]
    pub database: String,

    /// TLS mode
    #[serde(default)]
    pub ssl_mode: SslMode,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,
}

impl DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("database.host cannot be empty".to_string());
        }

        if self.port == Some(0) {
            return Err("database.port must be > 0".to_string());
        }

        if self.user.trim().is_empty() {
            return Err("database.user cannot be empty".to_string());
        }

        if self.database.trim().is_empty() {
            return Err("database.database cannot be empty".to_string());
        }

        if !(1..=300).contains(&self.connect_timeout_seconds) {
            return Err(format!(
                "database.connect_timeout_seconds must be between 1 and 300, got {}",
                self.connect_timeout_seconds
            ));
        }

        Ok(())
    }

    /// Port to connect to
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.engine.default_port())
    }

    /// Endpoint description safe for logs: `user@host:port/database`
    pub fn endpoint_safe(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.user,
            self.host,
            self.port(),
            self.database
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            engine: DatabaseEngine::default(),
            host: default_db_host(),
            port: None,
            user: String::new(),
            password: None,
            database: String::new(),
            ssl_mode: SslMode::default(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
        }
    }
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON document, relative to the working directory unless absolute
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("output.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to rotating files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_connect_timeout_seconds() -> u64 {
    30
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
