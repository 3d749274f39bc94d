//! Property types exchanged between enrichers and the pipeline.

use serde::Serialize;
use std::fmt;

/// Value carried by a log event property.
///
/// The enrichment contract only produces integers (request IDs) and strings
/// (session IDs), so the value space is typed rather than dynamic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Integer(u64),
    String(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Integer(value) => write!(f, "{}", value),
            PropertyValue::String(value) => write!(f, "{}", value),
        }
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

/// A named property attached to a log event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogProperty {
    name: String,
    value: PropertyValue,
}

impl LogProperty {
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_conversions() {
        assert_eq!(PropertyValue::from(42u64), PropertyValue::Integer(42));
        assert_eq!(
            PropertyValue::from("abc123"),
            PropertyValue::String("abc123".to_string())
        );
    }

    #[test]
    fn test_property_value_display() {
        assert_eq!(PropertyValue::Integer(7).to_string(), "7");
        assert_eq!(
            PropertyValue::String("session".to_string()).to_string(),
            "session"
        );
    }

    #[test]
    fn test_serialization() {
        let property = LogProperty::new("HttpRequestId", 12u64);
        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["name"], "HttpRequestId");
        assert_eq!(json["value"], 12);

        let property = LogProperty::new("HttpSessionId", "abc123");
        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["value"], "abc123");
    }
}
