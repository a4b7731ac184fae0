//! Document and page types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the field used to identify a document in diagnostics.
pub const ID_FIELD: &str = "id";

/// A stored document: an unordered mapping from field name to value.
///
/// The schema is opaque to the re-indexer. Values may be scalars, arrays or
/// nested objects and are passed back to the engine untouched unless the
/// field policy says otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The document's `id` rendered as a string, if present.
    ///
    /// Numeric ids are rendered with their JSON representation.
    pub fn id(&self) -> Option<String> {
        match self.0.get(ID_FIELD)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Check whether a field is present.
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Set a field value, returning the previous one.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Document {
    type Error = Value;

    /// Only JSON objects are documents; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}

/// One page of a query's result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResult {
    /// Documents on this page, in engine order.
    pub documents: Vec<Document>,
    /// Total number of documents matching the query at the time of the read.
    pub total_found: u64,
}

impl PageResult {
    /// Create a page from its documents and the reported total.
    pub fn new(documents: Vec<Document>, total_found: u64) -> Self {
        Self {
            documents,
            total_found,
        }
    }

    /// Whether the page carries no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Status code extracted from an engine response envelope.
///
/// `0` means success; anything else is a failure reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseCode(pub i64);

impl ResponseCode {
    /// The success code.
    pub const OK: ResponseCode = ResponseCode(0);

    /// Whether the engine reported success.
    pub fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        Document::try_from(value).unwrap()
    }

    #[test]
    fn test_id_string_and_number() {
        assert_eq!(doc(json!({"id": "abc"})).id(), Some("abc".to_string()));
        assert_eq!(doc(json!({"id": 42})).id(), Some("42".to_string()));
        assert_eq!(doc(json!({"id": null})).id(), None);
        assert_eq!(doc(json!({"title": "x"})).id(), None);
    }

    #[test]
    fn test_try_from_rejects_non_objects() {
        assert!(Document::try_from(json!([1, 2])).is_err());
        assert!(Document::try_from(json!("text")).is_err());
    }

    #[test]
    fn test_serializes_transparently() {
        let d = doc(json!({"id": "1", "tags": ["a", "b"], "meta": {"k": 1}}));
        let encoded = serde_json::to_value(&d).unwrap();
        assert_eq!(encoded, json!({"id": "1", "tags": ["a", "b"], "meta": {"k": 1}}));
    }

    #[test]
    fn test_response_code() {
        assert!(ResponseCode::OK.is_success());
        assert!(!ResponseCode(1).is_success());
        assert!(!ResponseCode(-1).is_success());
        assert_eq!(ResponseCode(400).to_string(), "400");
    }
}
