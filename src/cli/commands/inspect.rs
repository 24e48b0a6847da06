//! Inspect command implementation
//!
//! Reads an existing export and reports what it contains, the way a
//! downstream consumer would read it.

use crate::config::schema::DEFAULT_OUTPUT_PATH;
use crate::core::checksum::calculate_checksum_bytes;
use crate::core::export::parse_records;
use crate::domain::{distinct_standards, ExporterError};
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Export file to read
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub file: String,
}

impl InspectArgs {
    /// Execute the inspect command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file, "Inspecting export");

        let bytes = match std::fs::read(&self.file) {
            Ok(b) => b,
            Err(e) => {
                let e = ExporterError::Io(format!("Failed to read {}: {}", self.file, e));
                log_error_with_context!(&e, "Failed to read export");
                eprintln!("{e}");
                return Ok(e.exit_code());
            }
        };

        let records = match parse_records(&bytes) {
            Ok(r) => r,
            Err(e) => {
                log_error_with_context!(&e, "Failed to parse export");
                eprintln!("{}: {e}", self.file);
                return Ok(e.exit_code());
            }
        };
        let parsed_payloads = records.iter().filter(|r| r.payload().is_ok()).count();

        println!("📄 {}", self.file);
        println!("  Records: {}", records.len());
        println!("  Standards: {}", distinct_standards(&records));
        println!("  JSON payloads: {}/{}", parsed_payloads, records.len());
        if let (Some(first), Some(last)) = (records.first(), records.last()) {
            println!("  First standard: {}", first.standard_str().unwrap_or("-"));
            println!("  Last standard: {}", last.standard_str().unwrap_or("-"));
        }
        println!("  SHA-256: {}", calculate_checksum_bytes(&bytes));

        Ok(0)
    }
}
