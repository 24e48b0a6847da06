//! Export command implementation

use crate::cli::resolve_config;
use crate::core::export::Exporter;
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Override the output file path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Dry run mode - run the query but do not write the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(e.exit_code());
            }
        };

        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output path from CLI");
            config.output.path = output.clone();
        }

        if self.dry_run {
            tracing::info!("Dry run mode enabled - no file will be written");
            println!("🔍 DRY RUN MODE - {} will not be written", config.output.path);
        }

        let exporter = match Exporter::connect(&config).await {
            Ok(exporter) => exporter.with_dry_run(self.dry_run),
            Err(e) => {
                log_error_with_context!(&e, "Failed to connect to database");
                eprintln!("Failed to connect to database: {e}");
                return Ok(e.exit_code());
            }
        };

        let summary = match exporter.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(e.exit_code());
            }
        };

        println!("📊 Export Summary:");
        println!("  Records: {}", summary.total_records);
        println!("  Standards: {}", summary.distinct_standards);
        if let Some(path) = &summary.output_path {
            println!("  Output: {}", path.display());
            println!("  Size: {} bytes", summary.bytes_written);
        }
        if let Some(checksum) = &summary.checksum {
            println!("  SHA-256: {checksum}");
        }
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());

        if summary.dry_run {
            println!("✅ Dry run completed, nothing written");
        } else {
            println!("✅ Export completed successfully!");
        }

        Ok(0)
    }
}
