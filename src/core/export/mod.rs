//! Export orchestration
//!
//! - [`exporter`] - query-to-file run
//! - [`writer`] - JSON document rendering, writing and reading back
//! - [`summary`] - run summary

pub mod exporter;
pub mod summary;
pub mod writer;

pub use exporter::Exporter;
pub use summary::ExportSummary;
pub use writer::{parse_records, read_records, render_records, write_records, WrittenDocument};
