//! Generic row decoding into JSON objects
//!
//! Columns are decoded by their Postgres type name so the dynamic listing
//! does not need a struct per field selection. Types without a JSON mapping
//! fail with [`UnsupportedType`] rather than guessing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use sqlx::postgres::PgRow;
use sqlx::{Row, TypeInfo, ValueRef};

use crate::models::CarColumn;

/// Column type the decoder has no JSON mapping for
#[derive(Debug, thiserror::Error)]
#[error("unsupported column type {0}")]
pub struct UnsupportedType(pub String);

/// Decode the selected columns of a row, keyed by column name.
///
/// `columns` must be in the same order as the SELECT list; keys keep that
/// order in the returned map.
pub fn row_to_map(row: &PgRow, columns: &[CarColumn]) -> Result<Map<String, Value>, sqlx::Error> {
    let mut map = Map::with_capacity(columns.len());
    for (idx, col) in columns.iter().enumerate() {
        map.insert(col.as_str().to_owned(), decode_column(row, idx)?);
    }
    Ok(map)
}

/// Decode a single column into a JSON value.
pub fn decode_column(row: &PgRow, idx: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_owned();

    let value = match type_name.as_str() {
        "INT2" => Value::from(row.try_get::<i16, _>(idx)?),
        "INT4" => Value::from(row.try_get::<i32, _>(idx)?),
        "INT8" => Value::from(row.try_get::<i64, _>(idx)?),
        "FLOAT4" => float(f64::from(row.try_get::<f32, _>(idx)?)),
        "FLOAT8" => float(row.try_get::<f64, _>(idx)?),
        "NUMERIC" => decimal(row.try_get::<Decimal, _>(idx)?),
        "BOOL" => Value::Bool(row.try_get(idx)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "UNKNOWN" => Value::String(row.try_get(idx)?),
        // Single-byte internal "char"
        "\"CHAR\"" | "CHAR" => {
            let byte = row.try_get::<i8, _>(idx)? as u8;
            Value::String(char::from(byte).to_string())
        }
        "BYTEA" => {
            let bytes: Vec<u8> = row.try_get(idx)?;
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        }
        "JSON" | "JSONB" => row.try_get::<Value, _>(idx)?,
        "UUID" => Value::String(row.try_get::<uuid::Uuid, _>(idx)?.to_string()),
        "TIMESTAMPTZ" => Value::String(row.try_get::<DateTime<Utc>, _>(idx)?.to_rfc3339()),
        "TIMESTAMP" => Value::String(
            row.try_get::<NaiveDateTime, _>(idx)?
                .format("%Y-%m-%dT%H:%M:%S%.f")
                .to_string(),
        ),
        "DATE" => Value::String(row.try_get::<NaiveDate, _>(idx)?.to_string()),
        "TIME" => Value::String(row.try_get::<NaiveTime, _>(idx)?.to_string()),
        _ => {
            return Err(sqlx::Error::ColumnDecode {
                index: idx.to_string(),
                source: Box::new(UnsupportedType(type_name)),
            })
        }
    };

    Ok(value)
}

/// Whole decimals become JSON integers, the rest floats.
fn decimal(value: Decimal) -> Value {
    if value.fract().is_zero() {
        if let Some(n) = value.to_i64() {
            return Value::from(n);
        }
    }
    value.to_f64().map_or(Value::Null, float)
}

/// NaN and infinities have no JSON representation.
fn float(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}
