//! Row decoding
//!
//! Turns MySQL rows into [`GeneratedContent`] records while keeping the
//! column types the server reports. The driver describes a column by a type
//! name such as `BIGINT UNSIGNED` or `LONGTEXT`; the name picks the decoder.

use crate::adapters::database::columns::{
    float_value, CONTENT_COLUMN, ID_COLUMN, STANDARD_COLUMN,
};
use crate::domain::{DatabaseError, GeneratedContent, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::{Column, Row, TypeInfo};

/// How a MySQL column is turned into JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Bool,
    Signed,
    Unsigned,
    Float,
    Double,
    Text,
    Json,
    Timestamp,
    DateTime,
    Date,
}

/// Decode one result row
///
/// # Errors
///
/// Returns an error if one of the three columns is missing or has a type
/// with no JSON representation.
pub fn generated_content_from_row(row: &MySqlRow) -> Result<GeneratedContent> {
    Ok(GeneratedContent {
        id: column_value(row, ID_COLUMN)?,
        standard: column_value(row, STANDARD_COLUMN)?,
        content: column_value(row, CONTENT_COLUMN)?,
    })
}

/// Decoder for a driver type name
fn column_kind(type_name: &str) -> Option<ColumnKind> {
    let kind = match type_name {
        "BOOLEAN" => ColumnKind::Bool,
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => ColumnKind::Signed,
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => ColumnKind::Unsigned,
        "FLOAT" => ColumnKind::Float,
        "DOUBLE" => ColumnKind::Double,
        "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" => {
            ColumnKind::Text
        }
        "JSON" => ColumnKind::Json,
        "TIMESTAMP" => ColumnKind::Timestamp,
        "DATETIME" => ColumnKind::DateTime,
        "DATE" => ColumnKind::Date,
        _ => return None,
    };
    Some(kind)
}

/// Read a named column as a JSON value
fn column_value(row: &MySqlRow, name: &str) -> Result<Value> {
    let column = row
        .columns()
        .iter()
        .find(|c| c.name() == name)
        .ok_or_else(|| DatabaseError::MissingColumn(name.to_string()))?;
    let index = column.ordinal();
    let type_name = column.type_info().name();

    let kind = column_kind(type_name).ok_or_else(|| DatabaseError::UnsupportedColumnType {
        column: name.to_string(),
        type_name: type_name.to_string(),
    })?;

    let decode_err = |e: sqlx::Error| DatabaseError::Decode(format!("{name}: {e}"));

    let value = match kind {
        ColumnKind::Bool => row
            .try_get::<Option<bool>, _>(index)
            .map_err(decode_err)?
            .map(Value::Bool),
        ColumnKind::Signed => row
            .try_get::<Option<i64>, _>(index)
            .map_err(decode_err)?
            .map(Value::from),
        ColumnKind::Unsigned => row
            .try_get::<Option<u64>, _>(index)
            .map_err(decode_err)?
            .map(Value::from),
        ColumnKind::Float => row
            .try_get::<Option<f32>, _>(index)
            .map_err(decode_err)?
            .map(|f| float_value(f64::from(f))),
        ColumnKind::Double => row
            .try_get::<Option<f64>, _>(index)
            .map_err(decode_err)?
            .map(float_value),
        ColumnKind::Text => row
            .try_get::<Option<String>, _>(index)
            .map_err(decode_err)?
            .map(Value::String),
        ColumnKind::Json => row
            .try_get::<Option<Json<Value>>, _>(index)
            .map_err(decode_err)?
            .map(|json| json.0),
        ColumnKind::Timestamp => row
            .try_get::<Option<DateTime<Utc>>, _>(index)
            .map_err(decode_err)?
            .map(|t| Value::String(t.to_rfc3339())),
        ColumnKind::DateTime => row
            .try_get::<Option<NaiveDateTime>, _>(index)
            .map_err(decode_err)?
            .map(|t| Value::String(t.format("%Y-%m-%dT%H:%M:%S%.f").to_string())),
        ColumnKind::Date => row
            .try_get::<Option<NaiveDate>, _>(index)
            .map_err(decode_err)?
            .map(|d| Value::String(d.to_string())),
    };

    Ok(value.unwrap_or(Value::Null))
}
