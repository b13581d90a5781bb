use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A single todo record exactly as the client sent it.
///
/// Any parsed JSON is accepted and kept verbatim: missing or `null` members,
/// non-string values, arrays and scalars all round-trip unchanged. Only a
/// string `id` member can ever match a path id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Todo(Value);

impl Todo {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self(json!({ "id": id.into(), "text": text.into() }))
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Strict equality: a numeric `5` never matches the path id `"5"`.
    pub fn has_id(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for Todo {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedTodo {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub todos: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(raw: &str) -> Value {
        let todo: Todo = serde_json::from_str(raw).expect("any JSON should parse");
        serde_json::to_value(&todo).expect("todo should serialize")
    }

    #[test]
    fn null_and_missing_members_are_kept() {
        assert_eq!(
            round_trip(r#"{"id":null,"text":"x"}"#),
            json!({ "id": null, "text": "x" })
        );
        assert_eq!(round_trip(r#"{"text":"no id"}"#), json!({ "text": "no id" }));
    }

    #[test]
    fn non_string_members_and_non_objects_are_kept() {
        assert_eq!(
            round_trip(r#"{"id":5,"text":42}"#),
            json!({ "id": 5, "text": 42 })
        );
        assert_eq!(round_trip(r#"[{"id":"1"}]"#), json!([{ "id": "1" }]));
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        assert_eq!(round_trip(r#"{"id":"1","id":"2"}"#), json!({ "id": "2" }));
    }

    #[test]
    fn key_order_is_preserved() {
        let todo: Todo = serde_json::from_str(r#"{"text":"a","id":"1"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&todo).unwrap(),
            r#"{"text":"a","id":"1"}"#
        );
    }

    #[test]
    fn has_id_requires_exact_string_match() {
        let todo = Todo::new("12", "buy milk");
        assert!(todo.has_id("12"));
        assert!(!todo.has_id("1"));
        assert!(!Todo::from(json!({ "id": 5 })).has_id("5"));
        assert!(!Todo::from(json!({ "id": null })).has_id("null"));
        assert!(!Todo::from(json!([{ "id": "1" }])).has_id("1"));
        assert!(!Todo::default().has_id(""));
    }
}
