//! Integer coercion for loosely typed JSON request fields.
//!
//! Form submissions send numbers as strings, so an integer field accepts:
//! - a JSON integer
//! - a JSON float with no fractional part (`42.0`)
//! - a string holding either of the above, surrounding whitespace ignored

use serde_json::{Map, Value};

use super::ValidationError;

/// Reads `field` from `body` as an `i32`.
pub fn integer_field(body: &Map<String, Value>, field: &str) -> Result<i32, ValidationError> {
    let value = match body.get(field) {
        None | Some(Value::Null) => return Err(ValidationError::missing(field)),
        Some(value) => value,
    };

    let wide = match value {
        Value::Number(n) => number_to_i64(field, n)?,
        Value::String(s) => parse_integer_str(field, s)?,
        other => {
            return Err(ValidationError::invalid_format(
                field,
                format!("expected integer, received {}", json_type_name(other)),
            ))
        }
    };

    i32::try_from(wide).map_err(|_| {
        ValidationError::out_of_range(field, i32::MIN.into(), i32::MAX.into(), wide)
    })
}

/// Reads `field` from `body` as a string.
pub fn string_field<'a>(
    body: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a str, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ValidationError::missing(field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ValidationError::invalid_format(
            field,
            format!("expected string, received {}", json_type_name(other)),
        )),
    }
}

fn number_to_i64(field: &str, n: &serde_json::Number) -> Result<i64, ValidationError> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if n.is_u64() {
        // only reachable above i64::MAX
        return Err(outside_integer_range(field, n));
    }
    float_to_i64(field, n.as_f64().unwrap_or(f64::NAN))
}

fn parse_integer_str(field: &str, raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::invalid_format(field, "expected integer, received empty string"));
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && !fits_i64(f) => {
            Err(outside_integer_range(field, trimmed))
        }
        Ok(f) => float_to_i64(field, f),
        Err(_) => Err(ValidationError::invalid_format(
            field,
            format!("expected integer, received '{}'", raw),
        )),
    }
}

fn float_to_i64(field: &str, f: f64) -> Result<i64, ValidationError> {
    if !f.is_finite() {
        return Err(ValidationError::invalid_format(field, "expected integer, received non-finite number"));
    }
    if f.fract() != 0.0 {
        return Err(ValidationError::invalid_format(
            field,
            format!("expected integer, received {}", f),
        ));
    }
    if !fits_i64(f) {
        return Err(outside_integer_range(field, f));
    }
    Ok(f as i64)
}

// i64::MAX as f64 rounds up to 2^63, which is already out of range
fn fits_i64(f: f64) -> bool {
    f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Too wide for an `i64`, so it is reported as received.
fn outside_integer_range(field: &str, received: impl std::fmt::Display) -> ValidationError {
    ValidationError::invalid_format(
        field,
        format!(
            "expected integer between {} and {}, received {}",
            i32::MIN,
            i32::MAX,
            received
        ),
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
