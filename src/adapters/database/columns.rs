//! Result columns shared by every engine

use serde_json::{Number, Value};

/// Column names the export query must return
pub const ID_COLUMN: &str = "id";
pub const STANDARD_COLUMN: &str = "standard";
pub const CONTENT_COLUMN: &str = "content";

/// JSON has no NaN or infinity; those become `null`
pub fn float_value(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}
