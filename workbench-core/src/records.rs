//! Typed views over fixture records.
//!
//! Tabular records (users, announcements, events) stay as loose JSON objects
//! since every table picks its own columns. Navigation items and form
//! descriptions have a fixed shape and are decoded here.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Entry of the family navigation panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavItem {
    pub slug: String,
    pub label: String,
    /// Any other fields, rendered as the panel body
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Form layout described by a fixture.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormSpec {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub submit_label: Option<String>,
}

/// Single input of a [`FormSpec`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type", default = "default_field_kind")]
    pub kind: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Choices for `select` fields
    #[serde(default)]
    pub options: Vec<String>,
}

fn default_field_kind() -> String {
    "text".to_string()
}

/// Tags attached to an event record. Missing or malformed tags are empty.
pub fn event_tags(event: &Value) -> Vec<&str> {
    event
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| tags.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Every distinct tag across `events`, sorted.
pub fn all_tags(events: &[Value]) -> Vec<String> {
    events
        .iter()
        .flat_map(event_tags)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Events carrying `tag`, or all events when no tag is selected.
pub fn filter_by_tag<'a>(events: &'a [Value], tag: Option<&str>) -> Vec<&'a Value> {
    match tag {
        Some(tag) => events
            .iter()
            .filter(|event| event_tags(event).contains(&tag))
            .collect(),
        None => events.iter().collect(),
    }
}

/// Renders a record field as display text. Missing fields are empty.
pub fn field_text(record: &Value, key: &str) -> String {
    record.get(key).map(value_text).unwrap_or_default()
}

/// Renders a JSON value as display text.
///
/// Strings are used as-is, `null` is empty, anything else is rendered as
/// compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn events() -> Vec<Value> {
        vec![
            json!({"id": 1, "tags": ["music", "outdoor"]}),
            json!({"id": 2, "tags": ["food"]}),
            json!({"id": 3, "tags": ["music"]}),
            json!({"id": 4}),
        ]
    }

    #[test]
    fn test_all_tags_sorted_and_unique() {
        assert_eq!(all_tags(&events()), vec!["food", "music", "outdoor"]);
    }

    #[test]
    fn test_filter_by_tag() {
        let events = events();
        let ids: Vec<_> = filter_by_tag(&events, Some("music"))
            .iter()
            .map(|e| e["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(filter_by_tag(&events, None).len(), 4);
        assert!(filter_by_tag(&events, Some("sports")).is_empty());
    }

    #[test]
    fn test_field_text() {
        let record = json!({"name": "Ada", "id": 7, "active": true, "note": null});
        assert_eq!(field_text(&record, "name"), "Ada");
        assert_eq!(field_text(&record, "id"), "7");
        assert_eq!(field_text(&record, "active"), "true");
        assert_eq!(field_text(&record, "note"), "");
        assert_eq!(field_text(&record, "missing"), "");
    }

    #[test]
    fn test_form_field_defaults() {
        let field: FormField = serde_json::from_value(json!({"name": "email"})).unwrap();
        assert_eq!(field.kind, "text");
        assert!(!field.required);
        assert!(field.options.is_empty());
    }
}
