//! Field projection for GetById.
//!
//! Callers can request a subset of an entity's fields via a comma-separated
//! list; a dotted path (`location.name`) selects a field of a navigation
//! property. Repositories fetch a navigation only when the selection
//! references it, then hand the assembled JSON object here to be cut down to
//! the requested shape.
//!
//! Rules:
//! - `id` is always included, at the root and inside every projected
//!   navigation object.
//! - An empty selection projects to `id` alone.
//! - A bare navigation name (`fields=location`) includes that navigation
//!   projected to its `id`.
//! - Unknown names are ignored; projection selects, it does not validate.

use std::collections::{BTreeMap, BTreeSet};

use emr_core::error::CoreError;
use serde_json::{Map, Value};

/// Serialize an entity (or a fetched navigation) into the JSON tree the
/// projection operates on.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, CoreError> {
    serde_json::to_value(value).map_err(|e| CoreError::Internal(format!("serialization failed: {e}")))
}

/// A parsed `fields` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: BTreeSet<String>,
    navigations: BTreeMap<String, FieldSelection>,
}

impl FieldSelection {
    /// Parse a comma-separated field list. `None`, an empty string, and
    /// whitespace all yield the empty selection (project to `id` alone).
    pub fn parse(raw: Option<&str>) -> Self {
        let mut selection = Self::default();
        let Some(raw) = raw else {
            return selection;
        };

        for path in raw.split(',') {
            let path = path.trim();
            if path.is_empty() {
                continue;
            }
            match path.split_once('.') {
                Some((head, rest)) => {
                    selection
                        .navigations
                        .entry(head.to_string())
                        .or_default()
                        .add_path(rest);
                }
                None => {
                    selection.fields.insert(path.to_string());
                }
            }
        }
        selection
    }

    fn add_path(&mut self, path: &str) {
        match path.split_once('.') {
            Some((head, rest)) => self
                .navigations
                .entry(head.to_string())
                .or_default()
                .add_path(rest),
            None => {
                self.fields.insert(path.to_string());
            }
        }
    }

    /// No fields requested at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.navigations.is_empty()
    }

    /// Whether the selection references the named navigation, either with a
    /// dotted path or as a bare name.
    pub fn wants(&self, navigation: &str) -> bool {
        self.navigations.contains_key(navigation) || self.fields.contains(navigation)
    }

    fn navigation(&self, name: &str) -> FieldSelection {
        self.navigations.get(name).cloned().unwrap_or_default()
    }

    /// Cut an assembled entity object down to the requested shape.
    ///
    /// Non-object values pass through unchanged.
    pub fn project(&self, value: &Value) -> Value {
        let Value::Object(source) = value else {
            return value.clone();
        };

        let mut out = Map::new();
        if let Some(id) = source.get("id") {
            out.insert("id".to_string(), id.clone());
        }

        for (key, val) in source {
            if key == "id" {
                continue;
            }
            if self.navigations.contains_key(key) {
                out.insert(key.clone(), self.project_navigation(key, val));
            } else if self.fields.contains(key) {
                match val {
                    // A bare navigation name: project to id only.
                    Value::Object(_) | Value::Array(_) => {
                        out.insert(key.clone(), self.project_navigation(key, val));
                    }
                    _ => {
                        out.insert(key.clone(), val.clone());
                    }
                }
            }
        }

        Value::Object(out)
    }

    fn project_navigation(&self, name: &str, value: &Value) -> Value {
        let sub = self.navigation(name);
        match value {
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| sub.project(item)).collect())
            }
            _ => sub.project(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn receipt() -> Value {
        json!({
            "id": "4a3e2f10-0000-0000-0000-000000000001",
            "location_id": "4a3e2f10-0000-0000-0000-000000000002",
            "received_by": "jdoe",
            "notes": "partial delivery",
            "location": {
                "id": "4a3e2f10-0000-0000-0000-000000000002",
                "name": "Central Store",
                "description": null
            },
            "items": [
                {"id": "4a3e2f10-0000-0000-0000-000000000003", "quantity": 5, "unit_cost": 2.5},
                {"id": "4a3e2f10-0000-0000-0000-000000000004", "quantity": 1, "unit_cost": 10.0}
            ]
        })
    }

    #[test]
    fn empty_selection_projects_id_alone() {
        let selection = FieldSelection::parse(None);
        assert!(selection.is_empty());
        assert_eq!(
            selection.project(&receipt()),
            json!({"id": "4a3e2f10-0000-0000-0000-000000000001"})
        );

        let selection = FieldSelection::parse(Some("  "));
        assert!(selection.is_empty());
    }

    #[test]
    fn selects_requested_root_fields_plus_id() {
        let selection = FieldSelection::parse(Some("received_by,notes"));
        assert_eq!(
            selection.project(&receipt()),
            json!({
                "id": "4a3e2f10-0000-0000-0000-000000000001",
                "received_by": "jdoe",
                "notes": "partial delivery"
            })
        );
    }

    #[test]
    fn dotted_path_projects_navigation_object() {
        let selection = FieldSelection::parse(Some("location.name"));
        assert!(selection.wants("location"));
        assert!(!selection.wants("items"));
        assert_eq!(
            selection.project(&receipt()),
            json!({
                "id": "4a3e2f10-0000-0000-0000-000000000001",
                "location": {
                    "id": "4a3e2f10-0000-0000-0000-000000000002",
                    "name": "Central Store"
                }
            })
        );
    }

    #[test]
    fn collection_navigation_projects_each_element() {
        let selection = FieldSelection::parse(Some("items.quantity"));
        assert_eq!(
            selection.project(&receipt()),
            json!({
                "id": "4a3e2f10-0000-0000-0000-000000000001",
                "items": [
                    {"id": "4a3e2f10-0000-0000-0000-000000000003", "quantity": 5},
                    {"id": "4a3e2f10-0000-0000-0000-000000000004", "quantity": 1}
                ]
            })
        );
    }

    #[test]
    fn bare_navigation_name_projects_to_id() {
        let selection = FieldSelection::parse(Some("location"));
        assert!(selection.wants("location"));
        assert_eq!(
            selection.project(&receipt()),
            json!({
                "id": "4a3e2f10-0000-0000-0000-000000000001",
                "location": {"id": "4a3e2f10-0000-0000-0000-000000000002"}
            })
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let selection = FieldSelection::parse(Some("no_such_field,location.bogus"));
        assert_eq!(
            selection.project(&receipt()),
            json!({
                "id": "4a3e2f10-0000-0000-0000-000000000001",
                "location": {"id": "4a3e2f10-0000-0000-0000-000000000002"}
            })
        );
    }
}
