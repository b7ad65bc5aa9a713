//! Property serialization
//!
//! Serializers never fail: a value that cannot be rendered as JSON falls back
//! to its debug representation.

use serde_json::Value;

use crate::entry::Properties;

/// Renders the property mapping of an entry
pub trait PropertySerializer: Send + Sync {
    /// Render the full mapping
    fn serialize(&self, properties: &Properties) -> String;

    /// Render a single, possibly absent, value
    fn serialize_value(&self, value: Option<&Value>) -> String {
        match value {
            Some(value) => value.to_string(),
            None => "null".to_string(),
        }
    }
}

/// Compact JSON serializer (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl PropertySerializer for JsonSerializer {
    fn serialize(&self, properties: &Properties) -> String {
        serde_json::to_string(properties).unwrap_or_else(|_| format!("{properties:?}"))
    }

    fn serialize_value(&self, value: Option<&Value>) -> String {
        match value {
            Some(value) => serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}")),
            None => "null".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_empty() {
        assert_eq!(JsonSerializer.serialize(&Properties::new()), "{}");
    }

    #[test]
    fn test_serialize_preserves_insertion_order() {
        let mut props = Properties::new();
        props.insert("zeta".into(), json!(1));
        props.insert("alpha".into(), json!("two"));
        props.insert("mid".into(), json!([3, 4]));

        assert_eq!(
            JsonSerializer.serialize(&props),
            r#"{"zeta":1,"alpha":"two","mid":[3,4]}"#
        );
    }

    #[test]
    fn test_duplicate_key_overwrites_in_place() {
        let mut props = Properties::new();
        props.insert("a".into(), json!(1));
        props.insert("b".into(), json!(2));
        props.insert("a".into(), json!(3));

        assert_eq!(JsonSerializer.serialize(&props), r#"{"a":3,"b":2}"#);
    }

    #[test]
    fn test_serialize_value() {
        assert_eq!(JsonSerializer.serialize_value(None), "null");
        assert_eq!(JsonSerializer.serialize_value(Some(&json!("x"))), "\"x\"");
        assert_eq!(JsonSerializer.serialize_value(Some(&json!({"k": true}))), r#"{"k":true}"#);
    }
}
