//! Column values and the numeric-coercibility check.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A single column value as it travels from an input record to a bound
/// statement parameter.
///
/// Values keep the representation the caller supplied: `"12.5"` stays text
/// even when it lands in a `NUMERIC` column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    /// Mirrors the truthiness rule used by validation: `Null`, `""`, `0` and
    /// `0.0` count as "not supplied".
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Integer(v) => *v != 0,
            Self::Real(v) => *v != 0.0,
            Self::Text(v) => !v.is_empty(),
        }
    }

    /// Numeric view of the value, parsing numeric-looking text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Real(v) => Some(*v),
            Self::Text(v) => v.trim().parse().ok(),
            Self::Null => None,
        }
    }

    /// Short name of the variant, as shown in validation errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
        }
    }
}

/// Returns `true` when `value` could be read as a floating-point number.
///
/// Integers and reals always qualify. Text qualifies when it parses as a
/// float once surrounding whitespace is dropped. `Null` and empty text never
/// qualify. The value itself is never rewritten.
pub fn is_numeric(value: &FieldValue) -> bool {
    match value {
        FieldValue::Integer(_) | FieldValue::Real(_) => true,
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
        }
        FieldValue::Null => false,
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v:?}"),
            Self::Text(v) => write!(f, "{v:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// JSON rows from a bulk import map onto column values directly. Nested
/// arrays and objects are kept as their JSON text.
impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => b.into(),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n.as_f64().map_or(Self::Null, Self::Real),
            },
            Value::String(s) => Self::Text(s),
            other @ (Value::Array(_) | Value::Object(_)) => Self::Text(other.to_string()),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(v: &Value) -> Self {
        v.clone().into()
    }
}
