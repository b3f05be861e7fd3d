//! The canonical value model.
//!
//! [`Value`] is a closed tagged union over the seven JSON shapes the encoder
//! understands. Host types never reach the encoder directly: application code
//! (or the [`serde_json`] conversions below) maps everything into this enum
//! first, so the encoder only ever dispatches on a variant tag.

use crate::error::CanonicalizationError;

/// An immutable JSON value tree, ready for canonical encoding.
///
/// Integers are kept apart from floats because JCS serializes them through
/// different rules: integers print as plain decimals (bounded to the safe
/// integer range at encode time), floats go through ECMAScript number
/// formatting. Objects store their members as a plain vector in insertion
/// order; the encoder sorts members on the way out, so insertion order never
/// influences the output. Key uniqueness is the constructor's responsibility
/// and is not re-checked.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, Value)>),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

/// Conversion boundary from parsed JSON.
///
/// Numbers become [`Value::Integer`] when exactly representable as `i64`,
/// otherwise [`Value::Float`] when finite. A `u64` above `i64::MAX` is
/// rejected rather than rounded into a float: its low digits would be lost,
/// and canonicalization never produces lossy output.
impl TryFrom<&serde_json::Value> for Value {
    type Error = CanonicalizationError;

    fn try_from(json: &serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if n.is_u64() {
                    Err(CanonicalizationError::Unsupported(format!(
                        "integer {n} is out of range for an i64"
                    )))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(CanonicalizationError::Unsupported(format!(
                        "number {n} has no f64 representation"
                    )))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(k, v)| Ok((k.clone(), Value::try_from(v)?)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Object),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = CanonicalizationError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Value::try_from(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sized_numbers_stay_integers() {
        let json: serde_json::Value = serde_json::from_str("[0, -1, 9007199254740991]").unwrap();
        let value = Value::try_from(&json).unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Integer(0),
                Value::Integer(-1),
                Value::Integer(9007199254740991),
            ])
        );
    }

    #[test]
    fn fractional_numbers_become_floats() {
        let json: serde_json::Value = serde_json::from_str("2.5").unwrap();
        assert_eq!(Value::try_from(&json).unwrap(), Value::Float(2.5));
    }

    #[test]
    fn u64_beyond_i64_is_rejected() {
        let json: serde_json::Value = serde_json::from_str("18446744073709551615").unwrap();
        let err = Value::try_from(&json).unwrap_err();
        assert!(matches!(err, CanonicalizationError::Unsupported(_)));
    }

    #[test]
    fn lone_surrogate_escapes_never_parse() {
        // Strings with unpaired surrogates cannot enter the value model:
        // serde_json refuses them at the parse boundary, and a Rust String
        // cannot hold them at all.
        assert!(serde_json::from_str::<serde_json::Value>(r#""\udead""#).is_err());
    }
}
