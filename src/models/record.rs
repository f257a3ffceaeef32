//! Schemaless entity records as the REST layer delivers them.
//!
//! The portal's list endpoints return JSON arrays of flat objects whose
//! field sets differ per entity category. Nothing in this crate assumes a
//! schema; the filter inspects whatever fields a record happens to carry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity instance: a field-name to primitive-value mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Looks up a field by name, ignoring ASCII case. The backend mixes
    /// conventions (`patientId` from aliased queries, `PatientID` from
    /// `SELECT *` routes), so exact-case lookup would silently miss fields.
    pub fn field(&self, name: &str) -> Option<&Value> {
        if let Some(v) = self.0.get(name) {
            return Some(v);
        }
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// The string representation of a field, if it has one. Missing fields,
    /// nulls, and nested values have none and therefore never match.
    pub fn field_text(&self, name: &str) -> Option<String> {
        self.field(name).and_then(value_text)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// String form of a primitive JSON value. Matches what the UI renders into
/// table cells: strings as-is, numbers and booleans via display. Null and
/// nested values yield `None`.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        let r = record(json!({"PatientID": 3, "name": "Tom"}));
        assert_eq!(r.field("patientid"), Some(&json!(3)));
        assert_eq!(r.field("NAME"), Some(&json!("Tom")));
        assert_eq!(r.field("email"), None);
    }

    #[test]
    fn exact_key_wins_over_case_variant() {
        let r = record(json!({"id": 1, "ID": 2}));
        assert_eq!(r.field("id"), Some(&json!(1)));
        assert_eq!(r.field("ID"), Some(&json!(2)));
    }

    #[test]
    fn value_text_primitives() {
        assert_eq!(value_text(&json!("Tom")), Some("Tom".into()));
        assert_eq!(value_text(&json!(10)), Some("10".into()));
        assert_eq!(value_text(&json!(true)), Some("true".into()));
        assert_eq!(value_text(&json!(null)), None);
        assert_eq!(value_text(&json!([1, 2])), None);
    }

    #[test]
    fn record_roundtrips_through_json() {
        let r = record(json!({"id": 1, "name": "Downtown Health"}));
        let text = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(r, back);
    }
}
