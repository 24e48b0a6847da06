// content-export - generated content JSON exporter
// Copyright (c) 2025 Content Export Contributors
// Licensed under the MIT License

//! # content-export
//!
//! Exports active generated content for the `MCQ Math` generator (version
//! `0.2`) from the content database into `generated-content.json`: a JSON
//! array of `{id, standard, content}` objects, ordered by standard and
//! indented with two spaces.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The exporter, document writer and summary
//! - [`adapters`] - PostgreSQL connection, export query and row decoding
//! - [`domain`] - The exported record and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use content_export::config::load_config;
//! use content_export::core::export::Exporter;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("content-export.toml")?;
//!
//!     let exporter = Exporter::connect(&config).await?;
//!     let summary = exporter.execute_export().await?;
//!
//!     println!("Exported {} records", summary.total_records);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::Result`]. Failures are not
//! retried: a connection, query or write error ends the run, and no partial
//! document is written.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
