//! Exporter - runs the export query and writes the JSON document
//!
//! The run is strictly sequential: fetch every row, then write the file.
//! Any failure propagates to the caller and nothing is written.

use crate::adapters::database::{connect_source, ContentSource};
use crate::config::{ExporterConfig, OutputConfig};
use crate::core::export::summary::ExportSummary;
use crate::core::export::writer::write_records;
use crate::domain::{distinct_standards, Result};
use crate::{log_export_complete, log_export_start};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Exports generated content from a [`ContentSource`] to a JSON file
pub struct Exporter {
    source: Arc<dyn ContentSource + Send + Sync>,
    output_path: PathBuf,
    dry_run: bool,
}

impl Exporter {
    /// Open the database connection described by `config`
    ///
    /// # Errors
    ///
    /// Returns a connection or authentication error if the database cannot
    /// be reached.
    pub async fn connect(config: &ExporterConfig) -> Result<Self> {
        let source = connect_source(&config.database).await?;
        Ok(Self::new(source, &config.output))
    }

    /// Create an exporter over an existing source
    pub fn new(source: Arc<dyn ContentSource + Send + Sync>, output: &OutputConfig) -> Self {
        Self {
            source,
            output_path: PathBuf::from(&output.path),
            dry_run: false,
        }
    }

    /// Fetch and count records without writing the output file
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Execute the export
    ///
    /// 1. Runs the export query through the source
    /// 2. Writes all rows to the output file, replacing it
    /// 3. Returns a summary with counts and the document checksum
    ///
    /// # Errors
    ///
    /// Query, decode and I/O errors are returned as they occur.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();

        log_export_start!(self.source.describe(), self.output_path.display());

        let records = self.source.fetch_generated_content().await?;
        summary.total_records = records.len();
        summary.distinct_standards = distinct_standards(&records);

        tracing::info!(
            records = summary.total_records,
            standards = summary.distinct_standards,
            "Fetched generated content"
        );

        if self.dry_run {
            tracing::info!(
                path = %self.output_path.display(),
                "DRY RUN: Would write {} records",
                records.len()
            );
            summary.dry_run = true;
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let document = write_records(&self.output_path, &records)?;
        tracing::debug!(
            path = %document.path.display(),
            bytes = document.bytes,
            checksum = %document.checksum,
            "Wrote export document"
        );
        summary.record_document(document);

        let summary = summary.with_duration(start_time.elapsed());
        log_export_complete!(summary.total_records, summary.duration);

        Ok(summary)
    }
}
