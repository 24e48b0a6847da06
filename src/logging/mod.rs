//! Logging and observability
//!
//! Structured logging via `tracing`:
//! - human-readable console output on stderr
//! - optional JSON log files with rotation
//! - `RUST_LOG` override
//!
//! # Example
//!
//! ```no_run
//! use content_export::logging::init_logging;
//! use content_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export
///
/// ```no_run
/// use content_export::log_export_start;
///
/// log_export_start!("exporter@localhost:5432/coachbot", "generated-content.json");
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($endpoint:expr, $output:expr) => {
        tracing::info!(
            endpoint = %$endpoint,
            output = %$output,
            "Starting export"
        );
    };
}

/// Log the completion of an export
///
/// ```no_run
/// use content_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_millis(350));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis(),
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// ```no_run
/// use content_export::log_error_with_context;
/// use content_export::domain::ExporterError;
///
/// let error = ExporterError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
