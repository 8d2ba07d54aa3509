//! Scalar event properties
//!
//! Events carry an optional map of string keys to scalar values. The map is
//! ordered so that rendered output is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered key-value payload attached to an event
pub type Properties = BTreeMap<String, PropertyValue>;

/// A single scalar property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(v) => write!(f, "{}", v),
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::UInt(v) => write!(f, "{}", v),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::Str(v) => f.write_str(v),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v.into())
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<u32> for PropertyValue {
    fn from(v: u32) -> Self {
        PropertyValue::UInt(v.into())
    }
}

impl From<u64> for PropertyValue {
    fn from(v: u64) -> Self {
        PropertyValue::UInt(v)
    }
}

impl From<usize> for PropertyValue {
    fn from(v: usize) -> Self {
        PropertyValue::UInt(v as u64)
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Float(v.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Str(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Str(v)
    }
}

/// Render properties as `key: value` pairs joined by `"; "`, sorted by key
pub fn describe_properties(properties: &Properties) -> String {
    properties
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Build a `Properties` map from `key => value` pairs
///
/// # Example
///
/// ```
/// use evlog_core_types::{properties, PropertyValue};
///
/// let props = properties! { "user" => "alice", "attempt" => 2 };
/// assert_eq!(props.get("attempt"), Some(&PropertyValue::Int(2)));
/// ```
#[macro_export]
macro_rules! properties {
    () => {
        $crate::Properties::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Properties::new();
        $(
            props.insert(
                ::std::string::ToString::to_string(&$key),
                $crate::PropertyValue::from($value),
            );
        )+
        props
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_sorts_by_key() {
        let props = properties! { "C" => "value 3", "A" => "value 1", "B" => "value 2" };
        assert_eq!(
            describe_properties(&props),
            "A: value 1; B: value 2; C: value 3"
        );
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(describe_properties(&Properties::new()), "");
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(PropertyValue::from(true), PropertyValue::Bool(true));
        assert_eq!(PropertyValue::from(-3), PropertyValue::Int(-3));
        assert_eq!(PropertyValue::from(7u32), PropertyValue::UInt(7));
        assert_eq!(PropertyValue::from(4usize), PropertyValue::UInt(4));
        assert_eq!(PropertyValue::from("x"), PropertyValue::Str("x".to_string()));
    }

    #[test]
    fn test_untagged_serialization() {
        let props = properties! { "ok" => true, "n" => 3, "name" => "alice" };
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"n":3,"name":"alice","ok":true}"#);
    }

    #[test]
    fn test_untagged_deserialization_prefers_int() {
        let value: PropertyValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, PropertyValue::Int(42));

        let value: PropertyValue = serde_json::from_str("1.5").unwrap();
        assert_eq!(value, PropertyValue::Float(1.5));
    }
}
