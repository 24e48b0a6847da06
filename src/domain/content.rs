//! Generated content record
//!
//! One row of the export: the generated-content id, the external id of the
//! standard it is linked to, and the opaque content payload.

use crate::domain::{ExporterError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generated-content row as returned by the export query
///
/// Values are kept as JSON values so that the column types reported by the
/// database survive serialization unchanged. Field order here is the key
/// order in the written document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedContent {
    /// Generated-content record identifier
    pub id: Value,

    /// External identifier of the linked standard
    pub standard: Value,

    /// Content payload
    pub content: Value,
}

impl GeneratedContent {
    /// Create a record from already-decoded column values
    pub fn new(id: impl Into<Value>, standard: impl Into<Value>, content: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            standard: standard.into(),
            content: content.into(),
        }
    }

    /// The standard as a string slice, if it is textual
    pub fn standard_str(&self) -> Option<&str> {
        self.standard.as_str()
    }

    /// Parse the content payload as JSON
    ///
    /// Text columns usually carry a serialized JSON document; those are
    /// parsed. A payload that is already structured (JSON/JSONB column) is
    /// returned as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is `null`, a non-JSON string, or a
    /// scalar that is not a document.
    pub fn payload(&self) -> Result<Value> {
        match &self.content {
            Value::String(text) => serde_json::from_str(text).map_err(|e| {
                ExporterError::Serialization(format!(
                    "Content of record {} is not valid JSON: {e}",
                    self.id
                ))
            }),
            Value::Object(_) | Value::Array(_) => Ok(self.content.clone()),
            other => Err(ExporterError::Validation(format!(
                "Content of record {} is not a JSON document: {other}",
                self.id
            ))),
        }
    }
}

/// Count distinct textual standards across records
pub fn distinct_standards(records: &[GeneratedContent]) -> usize {
    let mut standards: Vec<&str> = records.iter().filter_map(|r| r.standard_str()).collect();
    standards.sort_unstable();
    standards.dedup();
    standards.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_key_order() {
        let record = GeneratedContent::new("abc", "6.EE.A.1", "{}");
        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(text, r#"{"id":"abc","standard":"6.EE.A.1","content":"{}"}"#);
    }

    #[test]
    fn test_types_are_preserved() {
        let record = GeneratedContent::new(42, "K.CC.A.1", json!({"question": "1+1"}));
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["id"].is_i64());
        assert!(value["standard"].is_string());
        assert!(value["content"].is_object());
    }

    #[test]
    fn test_payload_from_text() {
        let record = GeneratedContent::new(
            "id-1",
            "3.OA.A.1",
            r#"{"answer_options":[{"answer":"4","correct":true}]}"#,
        );
        let payload = record.payload().unwrap();
        assert_eq!(payload["answer_options"][0]["answer"], "4");
    }

    #[test]
    fn test_payload_from_structured_content() {
        let record = GeneratedContent::new("id-1", "3.OA.A.1", json!({"k": 1}));
        assert_eq!(record.payload().unwrap(), json!({"k": 1}));
    }

    #[test]
    fn test_payload_invalid_text() {
        let record = GeneratedContent::new("id-1", "3.OA.A.1", "plain text");
        assert!(matches!(
            record.payload(),
            Err(ExporterError::Serialization(_))
        ));
    }

    #[test]
    fn test_payload_null() {
        let record = GeneratedContent::new("id-1", "3.OA.A.1", Value::Null);
        assert!(matches!(record.payload(), Err(ExporterError::Validation(_))));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let text = r#"{"id":1,"standard":"a","content":"b","extra":true}"#;
        assert!(serde_json::from_str::<GeneratedContent>(text).is_err());
    }

    #[test]
    fn test_distinct_standards() {
        let records = vec![
            GeneratedContent::new(1, "A", "x"),
            GeneratedContent::new(2, "A", "y"),
            GeneratedContent::new(3, "B", "z"),
            GeneratedContent::new(4, Value::Null, "w"),
        ];
        assert_eq!(distinct_standards(&records), 2);
        assert_eq!(distinct_standards(&[]), 0);
    }
}
