//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// A dynamic value resolved from a row for a given column.
///
/// The grid never inspects row types directly. Column accessors and
/// [`Row::field`](crate::Row::field) produce a `Value`, and every filter and
/// sort decision is made on that value.
///
/// | Source | Variant |
/// |--------|---------|
/// | missing field, null | `Null` |
/// | bool | `Bool` |
/// | integers | `Int` |
/// | floats | `Float` |
/// | strings | `String` |
/// | timestamps | `DateTime` |
/// | arrays, objects | `Json` |
///
/// # Example
///
/// ```
/// use datagrid::Value;
///
/// let name = Value::from("Alice");
/// let age = Value::from(30);
/// let missing = Value::Null;
///
/// assert!(age.compare(&Value::from(25.5)).is_some());
/// assert!(missing.compare(&name).is_none());
/// ```
///
/// Strings in RFC 3339 form deserialize as `DateTime`, and compare equal to
/// the `DateTime` they denote, so date-time filter values survive a JSON
/// round trip.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null or absent value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Fallback for structured JSON values.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value of `Int` and `Float` variants.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the timestamp of a `DateTime`, or of a string in RFC 3339 form.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            Value::String(s) => parse_datetime(s),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Json(_) => "json",
        }
    }

    /// Relational comparison between two values.
    ///
    /// Numbers compare numerically across `Int` and `Float`, strings
    /// lexicographically, booleans with `false < true` and timestamps
    /// chronologically. Anything else is incomparable and yields `None`,
    /// including every comparison that involves `Null`.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::String(b)) => parse_datetime(b).map(|b| a.cmp(&b)),
            (Value::String(a), Value::DateTime(b)) => parse_datetime(a).map(|a| a.cmp(b)),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y),
                _ => None,
            },
        }
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::DateTime(a), Value::String(b)) | (Value::String(b), Value::DateTime(a)) => {
                parse_datetime(b).is_some_and(|b| *a == b)
            }
            (Value::Json(a), Value::Json(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // NaN equals NaN here, so a NaN filter value can be toggled off again.
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
                _ => false,
            },
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Null => 0u8.hash(state),
            Value::Bool(b) => {
                1u8.hash(state);
                b.hash(state);
            }
            Value::Int(_) | Value::Float(_) => {
                2u8.hash(state);
                let x = self.as_f64().unwrap_or_default();
                let x = if x.is_nan() {
                    f64::NAN
                } else if x == 0.0 {
                    0.0
                } else {
                    x
                };
                x.to_bits().hash(state);
            }
            Value::String(s) => match parse_datetime(s) {
                Some(dt) => {
                    4u8.hash(state);
                    dt.hash(state);
                }
                None => {
                    3u8.hash(state);
                    s.hash(state);
                }
            },
            Value::DateTime(dt) => {
                4u8.hash(state);
                dt.hash(state);
            }
            Value::Json(v) => {
                5u8.hash(state);
                v.to_string().hash(state);
            }
        }
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::from(serde_json::Value::deserialize(deserializer)?);
        Ok(match value {
            Value::String(s) => match parse_datetime(&s) {
                Some(dt) => Value::DateTime(dt),
                None => Value::String(s),
            },
            other => other,
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
            Value::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        Value::from(v.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_numeric_comparison_across_kinds() {
        assert_eq!(Value::from(2).compare(&Value::from(2.5)), Some(Ordering::Less));
        assert_eq!(Value::from(3.0).compare(&Value::from(3)), Some(Ordering::Equal));
        assert_eq!(Value::from(3), Value::from(3.0));
    }

    #[test]
    fn test_null_is_incomparable() {
        assert_eq!(Value::Null.compare(&Value::Null), None);
        assert_eq!(Value::Null.compare(&Value::from(1)), None);
        assert_eq!(Value::from("a").compare(&Value::from(1)), None);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(serde_json::json!(42)), Value::Int(42));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
        assert_eq!(Value::from(serde_json::json!("x")), Value::from("x"));
        assert!(Value::from(serde_json::json!(null)).is_null());
        assert_eq!(Value::from(serde_json::json!([1, 2])).type_name(), "json");
    }

    #[test]
    fn test_datetime_survives_json_round_trip() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_string(&Value::from(at)).unwrap();

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back.type_name(), "datetime");
        assert_eq!(back, Value::from(at));

        let plain: Value = serde_json::from_str(r#""Alice""#).unwrap();
        assert_eq!(plain, Value::from("Alice"));
    }

    #[test]
    fn test_datetime_matches_rfc3339_string() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(Value::from(at), Value::from("2024-03-01T12:30:00Z"));
        assert_eq!(Value::from("2024-03-01T14:30:00+02:00"), Value::from(at));
        assert_eq!(
            Value::from(at).compare(&Value::from("2024-03-02T00:00:00Z")),
            Some(Ordering::Less)
        );
        assert_ne!(Value::from(at), Value::from("March 1st"));
    }

    #[test]
    fn test_equal_values_hash_alike() {
        use std::collections::HashSet;

        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let set: HashSet<Value> = [
            Value::from(3),
            Value::from(3.0),
            Value::from(at),
            Value::from("2024-03-01T12:30:00Z"),
            Value::from(f64::NAN),
            Value::from(f64::NAN),
            Value::from(0.0),
            Value::from(-0.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
