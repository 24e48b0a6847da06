//! JSON document output
//!
//! The export is a single JSON array of record objects, indented with two
//! spaces. An empty result set renders as `[]`.

use crate::core::checksum::calculate_checksum_bytes;
use crate::domain::{ExporterError, GeneratedContent, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"  ";

/// A document that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDocument {
    /// Path the document was written to
    pub path: PathBuf,

    /// Size of the document in bytes
    pub bytes: u64,

    /// SHA-256 of the document
    pub checksum: String,
}

/// Render records as an indented JSON array
pub fn render_records(records: &[GeneratedContent]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Render records and write them to `path`, replacing any existing file
///
/// # Errors
///
/// Returns `ExporterError::Io` if the file cannot be written.
pub fn write_records(path: impl AsRef<Path>, records: &[GeneratedContent]) -> Result<WrittenDocument> {
    let path = path.as_ref();
    let document = render_records(records)?;

    fs::write(path, &document).map_err(|e| {
        ExporterError::Io(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(WrittenDocument {
        path: path.to_path_buf(),
        bytes: document.len() as u64,
        checksum: calculate_checksum_bytes(&document),
    })
}

/// Read a previously written export
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not an array of
/// `{id, standard, content}` objects.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<GeneratedContent>> {
    let path = path.as_ref();
    let document = fs::read(path)
        .map_err(|e| ExporterError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_records(&document)
}

/// Parse export bytes already in memory
///
/// # Errors
///
/// Returns `ExporterError::Serialization` if the bytes are not an array of
/// `{id, standard, content}` objects.
pub fn parse_records(document: &[u8]) -> Result<Vec<GeneratedContent>> {
    serde_json::from_slice(document)
        .map_err(|e| ExporterError::Serialization(format!("Not a valid export: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_records(&[]).unwrap(), b"[]");
    }

    #[test]
    fn test_render_two_space_indent() {
        let records = vec![GeneratedContent::new("a1", "1.OA.A.1", r#"{"q":1}"#)];
        let text = String::from_utf8(render_records(&records).unwrap()).unwrap();
        let expected = concat!(
            "[\n",
            "  {\n",
            "    \"id\": \"a1\",\n",
            "    \"standard\": \"1.OA.A.1\",\n",
            "    \"content\": \"{\\\"q\\\":1}\"\n",
            "  }\n",
            "]"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_keeps_nested_json() {
        let records = vec![GeneratedContent::new(7, "K.CC.A.1", json!({"answers": [1, 2]}))];
        let text = String::from_utf8(render_records(&records).unwrap()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["id"], 7);
        assert_eq!(parsed[0]["content"]["answers"][1], 2);
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let records = vec![
            GeneratedContent::new("a", "A.1", "x"),
            GeneratedContent::new("b", "B.1", "y"),
        ];

        let written = write_records(&path, &records).unwrap();
        assert_eq!(written.path, path);
        assert_eq!(written.bytes, fs::metadata(&path).unwrap().len());
        assert_eq!(written.checksum, calculate_checksum_bytes(&fs::read(&path).unwrap()));

        assert_eq!(read_records(&path).unwrap(), records);
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "previous contents that are longer than the new document").unwrap();

        write_records(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_records(&path, &[]).unwrap_err();
        assert!(matches!(err, ExporterError::Io(_)));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_parse_records_from_rendered_bytes() {
        let records = vec![GeneratedContent::new(3, "C.1", "{}")];
        let bytes = render_records(&records).unwrap();
        assert_eq!(parse_records(&bytes).unwrap(), records);
        assert!(parse_records(b"[{\"id\": 1}]").is_err());
    }

    #[test]
    fn test_read_rejects_other_documents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.json");
        fs::write(&path, r#"{"records": []}"#).unwrap();
        assert!(matches!(
            read_records(&path),
            Err(ExporterError::Serialization(_))
        ));
    }
}
