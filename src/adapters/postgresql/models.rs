//! Row decoding
//!
//! Turns `tokio_postgres` rows into [`GeneratedContent`] records while
//! keeping the column types the server reports.

use crate::adapters::database::columns::{
    float_value, CONTENT_COLUMN, ID_COLUMN, STANDARD_COLUMN,
};
use crate::domain::{DatabaseError, GeneratedContent, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tokio_postgres::types::Type;
use tokio_postgres::Row;

/// Decode one result row
///
/// # Errors
///
/// Returns an error if one of the three columns is missing or has a type
/// with no JSON representation.
pub fn generated_content_from_row(row: &Row) -> Result<GeneratedContent> {
    Ok(GeneratedContent {
        id: column_value(row, ID_COLUMN)?,
        standard: column_value(row, STANDARD_COLUMN)?,
        content: column_value(row, CONTENT_COLUMN)?,
    })
}

/// Read a named column as a JSON value
fn column_value(row: &Row, name: &str) -> Result<Value> {
    let index = row
        .columns()
        .iter()
        .position(|c| c.name() == name)
        .ok_or_else(|| DatabaseError::MissingColumn(name.to_string()))?;
    let ty = row.columns()[index].type_().clone();

    let decode_err = |e: tokio_postgres::Error| DatabaseError::Decode(format!("{name}: {e}"));

    let value = match ty {
        Type::BOOL => row
            .try_get::<_, Option<bool>>(index)
            .map_err(decode_err)?
            .map(Value::Bool),
        Type::INT2 => row
            .try_get::<_, Option<i16>>(index)
            .map_err(decode_err)?
            .map(Value::from),
        Type::INT4 => row
            .try_get::<_, Option<i32>>(index)
            .map_err(decode_err)?
            .map(Value::from),
        Type::INT8 => row
            .try_get::<_, Option<i64>>(index)
            .map_err(decode_err)?
            .map(Value::from),
        Type::FLOAT4 => row
            .try_get::<_, Option<f32>>(index)
            .map_err(decode_err)?
            .map(|f| float_value(f64::from(f))),
        Type::FLOAT8 => row
            .try_get::<_, Option<f64>>(index)
            .map_err(decode_err)?
            .map(float_value),
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::UNKNOWN => row
            .try_get::<_, Option<String>>(index)
            .map_err(decode_err)?
            .map(Value::String),
        Type::UUID => row
            .try_get::<_, Option<uuid::Uuid>>(index)
            .map_err(decode_err)?
            .map(|u| Value::String(u.to_string())),
        Type::JSON | Type::JSONB => row
            .try_get::<_, Option<Value>>(index)
            .map_err(decode_err)?,
        Type::TIMESTAMPTZ => row
            .try_get::<_, Option<DateTime<Utc>>>(index)
            .map_err(decode_err)?
            .map(|t| Value::String(t.to_rfc3339())),
        Type::TIMESTAMP => row
            .try_get::<_, Option<NaiveDateTime>>(index)
            .map_err(decode_err)?
            .map(|t| Value::String(t.format("%Y-%m-%dT%H:%M:%S%.f").to_string())),
        Type::DATE => row
            .try_get::<_, Option<NaiveDate>>(index)
            .map_err(decode_err)?
            .map(|d| Value::String(d.to_string())),
        other => {
            return Err(DatabaseError::UnsupportedColumnType {
                column: name.to_string(),
                type_name: other.name().to_string(),
            }
            .into())
        }
    };

    Ok(value.unwrap_or(Value::Null))
}
