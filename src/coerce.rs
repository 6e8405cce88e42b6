//! Coercion of raw values into typed field slots.
//!
//! Two entry points: [`assign_str`] parses the flat strings supplied by the
//! environment, parameter, and defaults sources; [`assign_json`] applies a
//! pre-parsed JSON scalar from the file source with strict kind checking.

use crate::error::LoadError;
use crate::schema::{Kind, Slot};
use serde_json::Value;

/// Parse a raw string and write it into the slot.
///
/// Strings pass through verbatim and never fail. Integers parse as base-10,
/// floats accept decimal and scientific notation, booleans accept
/// `true`/`false`/`1`/`0`/`t`/`f` case-insensitively. Fallback-kind slots
/// store the raw string verbatim.
pub fn assign_str(slot: &mut Slot<'_>, field: &str, raw: &str) -> Result<(), LoadError> {
    match slot {
        Slot::Str(v) => {
            **v = raw.to_string();
        }
        Slot::I8(v) => **v = parse_num(field, raw, Kind::Int)?,
        Slot::I16(v) => **v = parse_num(field, raw, Kind::Int)?,
        Slot::I32(v) => **v = parse_num(field, raw, Kind::Int)?,
        Slot::I64(v) => **v = parse_num(field, raw, Kind::Int)?,
        Slot::U8(v) => **v = parse_num(field, raw, Kind::Uint)?,
        Slot::U16(v) => **v = parse_num(field, raw, Kind::Uint)?,
        Slot::U32(v) => **v = parse_num(field, raw, Kind::Uint)?,
        Slot::U64(v) => **v = parse_num(field, raw, Kind::Uint)?,
        Slot::F32(v) => **v = parse_num(field, raw, Kind::Float)?,
        Slot::F64(v) => **v = parse_num(field, raw, Kind::Float)?,
        Slot::Bool(v) => **v = parse_bool(field, raw)?,
        Slot::Other(v) => v.assign(raw),
    }
    Ok(())
}

fn parse_num<T: std::str::FromStr>(field: &str, raw: &str, kind: Kind) -> Result<T, LoadError> {
    raw.parse::<T>().map_err(|_| LoadError::Coercion {
        field: field.to_string(),
        value: raw.to_string(),
        kind,
    })
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, LoadError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(LoadError::Coercion {
            field: field.to_string(),
            value: raw.to_string(),
            kind: Kind::Bool,
        }),
    }
}

/// Write a pre-parsed JSON scalar into the slot.
///
/// The document value's kind must match the slot's kind: strings into
/// string and fallback slots, integer numbers (range-checked) into integer
/// slots, any number into float slots, booleans into boolean slots. A
/// mismatch means the document does not fit the target shape.
pub fn assign_json(slot: &mut Slot<'_>, field: &str, value: &Value) -> Result<(), LoadError> {
    let kind = slot.kind();
    let mismatch = || {
        LoadError::MalformedDocument(format!(
            "field '{}': cannot store {} into a {} field",
            field,
            json_kind(value),
            kind,
        ))
    };
    match slot {
        Slot::Str(v) => match value {
            Value::String(s) => **v = s.clone(),
            _ => return Err(mismatch()),
        },
        Slot::I8(v) => **v = json_int(value).ok_or_else(mismatch)?,
        Slot::I16(v) => **v = json_int(value).ok_or_else(mismatch)?,
        Slot::I32(v) => **v = json_int(value).ok_or_else(mismatch)?,
        Slot::I64(v) => **v = value.as_i64().ok_or_else(mismatch)?,
        Slot::U8(v) => **v = json_uint(value).ok_or_else(mismatch)?,
        Slot::U16(v) => **v = json_uint(value).ok_or_else(mismatch)?,
        Slot::U32(v) => **v = json_uint(value).ok_or_else(mismatch)?,
        Slot::U64(v) => **v = value.as_u64().ok_or_else(mismatch)?,
        Slot::F32(v) => **v = value.as_f64().ok_or_else(mismatch)? as f32,
        Slot::F64(v) => **v = value.as_f64().ok_or_else(mismatch)?,
        Slot::Bool(v) => **v = value.as_bool().ok_or_else(mismatch)?,
        Slot::Other(v) => match value {
            Value::String(s) => v.assign(s),
            _ => return Err(mismatch()),
        },
    }
    Ok(())
}

fn json_int<T: TryFrom<i64>>(value: &Value) -> Option<T> {
    value.as_i64().and_then(|n| T::try_from(n).ok())
}

fn json_uint<T: TryFrom<u64>>(value: &Value) -> Option<T> {
    value.as_u64().and_then(|n| T::try_from(n).ok())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
