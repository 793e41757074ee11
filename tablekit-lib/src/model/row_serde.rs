//! Serialization for Row as a flat JSON object.
//!
//! ## Write Format (Serialization)
//!
//! Fields are written in key order so the same row always serializes to the
//! same text. Null fields are kept.
//!
//! ## Read Format (Deserialization)
//!
//! Any JSON object is accepted. Every member becomes a field; values are
//! converted with `Value::from(serde_json::Value)`, so ISO date strings stay
//! strings until a date column coerces them.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Row;
use super::Value;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ordered: BTreeMap<&String, &Value> = self.fields.iter().collect();
        let mut map = serializer.serialize_map(Some(ordered.len()))?;
        for (key, value) in ordered {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RowVisitor)
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object representing a table row")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Row, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut fields = HashMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            fields.insert(key, Value::from(value));
        }
        Ok(Row { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_sorted_fields() {
        let row = Row::new()
            .set("name", "Contoso")
            .set("age", 30i64)
            .set("note", Value::Null);

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"age":30,"name":"Contoso","note":null}"#);
    }

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"name": "Contoso", "revenue": 1000000, "ratio": 0.25}"#;
        let row: Row = serde_json::from_str(json).unwrap();

        assert_eq!(row.get("name"), Some(&Value::from("Contoso")));
        assert_eq!(row.get("revenue"), Some(&Value::Int(1_000_000)));
        assert_eq!(row.get("ratio"), Some(&Value::Float(0.25)));
    }

    #[test]
    fn test_deserialize_keeps_date_strings() {
        let json = r#"{"created": "2024-03-01T10:00:00Z", "tags": ["a", "b"]}"#;
        let row: Row = serde_json::from_str(json).unwrap();

        assert_eq!(
            row.get("created").and_then(Value::as_str),
            Some("2024-03-01T10:00:00Z")
        );
        assert_eq!(
            row.get("tags"),
            Some(&Value::List(vec![Value::from("a"), Value::from("b")]))
        );
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        assert!(serde_json::from_str::<Row>("[1, 2]").is_err());
    }
}
