//! Domain error types
//!
//! This module defines the error hierarchy for content-export.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ExporterError {
    /// Process exit code for this error
    ///
    /// - `2` configuration problems
    /// - `4` the database could not be reached or rejected the credentials
    /// - `5` everything else (query, decode, I/O)
    pub fn exit_code(&self) -> i32 {
        match self {
            ExporterError::Configuration(_) | ExporterError::Validation(_) => 2,
            ExporterError::Database(
                DatabaseError::ConnectionFailed(_) | DatabaseError::AuthenticationFailed(_),
            ) => 4,
            _ => 5,
        }
    }
}

/// Database-specific errors
///
/// These errors don't expose driver types; the driver error is
/// rendered into the message at the adapter boundary.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to connect to the database server
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// The server rejected the credentials
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The query was rejected or failed while running
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// An expected column is not present in the result set
    #[error("Result set has no column named '{0}'")]
    MissingColumn(String),

    /// The column type has no JSON representation in the exporter
    #[error("Column '{column}' has unsupported type '{type_name}'")]
    UnsupportedColumnType { column: String, type_name: String },

    /// A value could not be read from a row
    #[error("Failed to decode column: {0}")]
    Decode(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExporterError {
    fn from(err: std::io::Error) -> Self {
        ExporterError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExporterError {
    fn from(err: serde_json::Error) -> Self {
        ExporterError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExporterError {
    fn from(err: toml::de::Error) -> Self {
        ExporterError::Configuration(format!("TOML parse error: {err}"))
    }
}
