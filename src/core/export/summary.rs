//! Export summary and reporting

use crate::core::export::writer::WrittenDocument;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Number of records returned by the query
    pub total_records: usize,

    /// Number of distinct standards among the records
    pub distinct_standards: usize,

    /// Where the document was written (`None` for dry runs)
    pub output_path: Option<PathBuf>,

    /// Size of the written document
    pub bytes_written: u64,

    /// SHA-256 of the written document
    pub checksum: Option<String>,

    /// Records were fetched but nothing was written
    pub dry_run: bool,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the written document
    pub fn record_document(&mut self, document: WrittenDocument) {
        self.bytes_written = document.bytes;
        self.checksum = Some(document.checksum);
        self.output_path = Some(document.path);
    }

    /// True when a document was written
    pub fn wrote_document(&self) -> bool {
        self.output_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_empty() {
        let summary = ExportSummary::new();
        assert_eq!(summary.total_records, 0);
        assert!(!summary.dry_run);
        assert!(!summary.wrote_document());
        assert_eq!(summary.duration, Duration::ZERO);
    }

    #[test]
    fn test_record_document() {
        let mut summary = ExportSummary::new().with_duration(Duration::from_millis(20));
        summary.record_document(WrittenDocument {
            path: PathBuf::from("generated-content.json"),
            bytes: 2,
            checksum: "abc".to_string(),
        });

        assert!(summary.wrote_document());
        assert_eq!(summary.bytes_written, 2);
        assert_eq!(summary.checksum.as_deref(), Some("abc"));
        assert_eq!(summary.duration, Duration::from_millis(20));
    }
}
