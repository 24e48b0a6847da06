//! Core export logic
//!
//! - [`export`] - the exporter, document writer and summary
//! - [`checksum`] - SHA-256 of written documents
//!
//! # Example
//!
//! ```rust,no_run
//! use content_export::config::load_config;
//! use content_export::core::export::Exporter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("content-export.toml")?;
//!
//! let exporter = Exporter::connect(&config).await?;
//! let summary = exporter.execute_export().await?;
//!
//! println!("Exported {} records", summary.total_records);
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod export;
