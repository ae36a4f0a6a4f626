//! Folio Document Engine
//!
//! Answers read-only queries against the document loaded at startup. The
//! root is expected to be an object whose keys name sections; lists of
//! objects inside a section are addressable by their `id` field.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::error::QueryError;
use crate::id::{ids_equal, normalize_id};
use crate::loader;
use crate::types::Value;
use std::path::Path;

// =============================================================================
// Document Engine
// =============================================================================

/// Immutable document plus the lookup rules applied to it.
///
/// All queries borrow from the engine; nothing is copied or mutated, so a
/// single engine can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DocumentEngine {
    root: Value,
}

impl DocumentEngine {
    /// Create an engine over an already parsed document.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Load the document at `path` and create an engine over it.
    pub fn load(path: impl AsRef<Path>) -> folio_common::Result<Self> {
        let root = loader::load_document(path)?;
        Ok(Self::new(root))
    }

    /// The whole document, whatever its shape.
    pub fn document(&self) -> &Value {
        &self.root
    }

    /// Section names in declaration order. Empty when the root is not an
    /// object.
    pub fn list_sections(&self) -> Vec<&str> {
        match self.root.as_object() {
            Some(obj) => obj.keys().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.root.as_object().map_or(0, |obj| obj.len())
    }

    /// Fetch a section, optionally narrowed to the item matching `id`.
    ///
    /// A list section is scanned for the first object whose `id` matches. An
    /// object section is returned only when its own `id` matches; any other
    /// shape cannot be filtered.
    pub fn fetch_section(&self, name: &str, id: Option<&Value>) -> Result<&Value, QueryError> {
        let section = self.section(name)?;

        let Some(raw) = id else {
            return Ok(section);
        };
        let wanted = normalize_id(raw);

        if let Some(items) = section.as_array() {
            return find_by_id(items, &wanted).ok_or_else(|| {
                tracing::debug!("No item with id {} in section '{}'", raw, name);
                QueryError::ItemNotFound {
                    section: name.to_string(),
                    id: token_label(raw),
                }
            });
        }

        match section.get("id") {
            Some(own_id) if ids_equal(&wanted, own_id) => Ok(section),
            _ => Err(QueryError::NotFilterable(name.to_string())),
        }
    }

    /// Fetch one item of a list section by `id`.
    ///
    /// Stricter than [`fetch_section`](Self::fetch_section): object sections
    /// are rejected even when their own `id` would match.
    pub fn fetch_item(&self, name: &str, id: &Value) -> Result<&Value, QueryError> {
        let section = self.section(name)?;
        let items = section
            .as_array()
            .ok_or_else(|| QueryError::NotAList(name.to_string()))?;

        let wanted = normalize_id(id);
        find_by_id(items, &wanted).ok_or_else(|| {
            tracing::debug!("No item with id {} in section '{}'", id, name);
            QueryError::ItemNotFound {
                section: name.to_string(),
                id: token_label(id),
            }
        })
    }

    fn section(&self, name: &str) -> Result<&Value, QueryError> {
        self.root
            .as_object()
            .and_then(|obj| obj.get(name))
            .ok_or_else(|| QueryError::SectionNotFound(name.to_string()))
    }
}

/// First object in `items` carrying an `id` equal to `wanted`.
fn find_by_id<'a>(items: &'a [Value], wanted: &Value) -> Option<&'a Value> {
    items.iter().find(|item| {
        item.get("id")
            .map(|candidate| ids_equal(wanted, candidate))
            .unwrap_or(false)
    })
}

fn token_label(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine(json: serde_json::Value) -> DocumentEngine {
        DocumentEngine::new(Value::from_json(json))
    }

    fn products() -> DocumentEngine {
        engine(json!({
            "products": [
                {"id": 1, "name": "Widget"},
                {"id": 2, "name": "Gadget"}
            ]
        }))
    }

    #[test]
    fn test_list_sections_in_declaration_order() {
        let engine = engine(json!({"users": [], "config": {}, "version": 3, "tags": ["a"]}));
        assert_eq!(engine.list_sections(), vec!["users", "config", "version", "tags"]);
        assert_eq!(engine.section_count(), 4);
    }

    #[test]
    fn test_document_returns_root() {
        let engine = products();
        assert_eq!(engine.document().to_json()["products"][1]["name"], "Gadget");
    }

    #[test]
    fn test_missing_section() {
        let engine = products();
        assert_eq!(
            engine.fetch_section("orders", None),
            Err(QueryError::SectionNotFound("orders".to_string()))
        );
        assert_eq!(
            engine.fetch_item("orders", &Value::from("1")),
            Err(QueryError::SectionNotFound("orders".to_string()))
        );
    }

    #[test]
    fn test_scenario_list_section() {
        let engine = products();

        let all = engine.fetch_section("products", None).unwrap();
        assert_eq!(all.as_array().map(Vec::len), Some(2));

        let gadget = engine.fetch_section("products", Some(&Value::from("2"))).unwrap();
        assert_eq!(gadget.to_json(), json!({"id": 2, "name": "Gadget"}));

        assert_eq!(
            engine.fetch_item("products", &Value::from("9")),
            Err(QueryError::ItemNotFound {
                section: "products".to_string(),
                id: "9".to_string(),
            })
        );
    }

    #[test]
    fn test_scenario_object_section() {
        let engine = engine(json!({"config": {"id": 1, "theme": "dark"}}));

        let config = engine.fetch_section("config", Some(&Value::from("1"))).unwrap();
        assert_eq!(config.to_json(), json!({"id": 1, "theme": "dark"}));

        assert_eq!(
            engine.fetch_item("config", &Value::from("1")),
            Err(QueryError::NotAList("config".to_string()))
        );
    }

    #[test]
    fn test_object_section_id_mismatch_is_not_filterable() {
        let engine = engine(json!({"config": {"id": 1, "theme": "dark"}, "meta": {"theme": "x"}}));
        assert_eq!(
            engine.fetch_section("config", Some(&Value::from("2"))),
            Err(QueryError::NotFilterable("config".to_string()))
        );
        assert_eq!(
            engine.fetch_section("meta", Some(&Value::from("1"))),
            Err(QueryError::NotFilterable("meta".to_string()))
        );
    }

    #[test]
    fn test_scalar_section() {
        let engine = engine(json!({"version": 3, "title": "Catalog"}));
        assert_eq!(engine.fetch_section("version", None), Ok(&Value::Int(3)));
        assert_eq!(
            engine.fetch_section("title", Some(&Value::from("Catalog"))),
            Err(QueryError::NotFilterable("title".to_string()))
        );
        assert_eq!(
            engine.fetch_item("version", &Value::from("3")),
            Err(QueryError::NotAList("version".to_string()))
        );
    }

    #[test]
    fn test_scenario_list_of_scalars() {
        let engine = engine(json!({"tags": ["a", "b", "c"]}));
        assert!(matches!(
            engine.fetch_section("tags", Some(&Value::from("a"))),
            Err(QueryError::ItemNotFound { .. })
        ));
        assert!(matches!(
            engine.fetch_item("tags", &Value::from("a")),
            Err(QueryError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_scenario_non_object_root() {
        let engine = engine(json!([{"id": 1}]));
        assert!(engine.list_sections().is_empty());
        assert_eq!(engine.section_count(), 0);
        assert_eq!(
            engine.fetch_section("0", None),
            Err(QueryError::SectionNotFound("0".to_string()))
        );
        assert_eq!(
            engine.fetch_item("0", &Value::from("1")),
            Err(QueryError::SectionNotFound("0".to_string()))
        );
        assert!(matches!(engine.document(), Value::Array(_)));
    }

    #[test]
    fn test_numeric_id_matches_string_and_float_tokens() {
        let engine = engine(json!({"items": [{"id": 3, "name": "three"}]}));
        for token in [Value::from("3"), Value::from("3.0"), Value::Int(3), Value::Float(3.0)] {
            let by_filter = engine.fetch_section("items", Some(&token)).unwrap();
            let by_path = engine.fetch_item("items", &token).unwrap();
            assert_eq!(by_filter.get("name"), Some(&Value::from("three")));
            assert!(std::ptr::eq(by_filter, by_path));
        }
    }

    #[test]
    fn test_string_id_not_matched_by_numeric_token() {
        let engine = engine(json!({"items": [{"id": "3"}], "slugs": [{"id": "abc"}]}));
        assert!(engine.fetch_item("items", &Value::from("3")).is_err());
        assert!(engine.fetch_item("items", &Value::Int(3)).is_err());
        assert!(engine.fetch_item("slugs", &Value::from("abc")).is_ok());
        assert!(engine.fetch_item("slugs", &Value::from("ABC")).is_err());
    }

    #[test]
    fn test_first_match_wins() {
        let engine = engine(json!({
            "items": [
                "loose",
                {"name": "no id"},
                {"id": 5, "name": "first"},
                {"id": 5, "name": "second"}
            ]
        }));
        let item = engine.fetch_item("items", &Value::from("5")).unwrap();
        assert_eq!(item.get("name"), Some(&Value::from("first")));
    }

    #[test]
    fn test_empty_string_id() {
        let engine = engine(json!({"items": [{"id": 0}, {"id": ""}]}));
        let item = engine.fetch_section("items", Some(&Value::from(""))).unwrap();
        assert_eq!(item.get("id"), Some(&Value::from("")));
    }

    #[test]
    fn test_results_borrow_document() {
        let engine = products();
        let section = engine.fetch_section("products", None).unwrap();
        let root_section = engine.document().get("products").unwrap();
        assert!(std::ptr::eq(section, root_section));
    }
}
