//! Document processor implementation.
//!
//! Blanks or drops the fields named by the run's `FieldPolicy`.

use serde_json::Value;

use search_reindexer_shared::{Document, FieldOperation, FieldPolicy};

/// Processor that applies a field-transformation policy to documents.
///
/// Fields absent from a document are left alone whatever the policy says,
/// so applying the processor twice gives the same result as applying it once.
#[derive(Debug, Clone, Default)]
pub struct DocumentProcessor {
    policy: FieldPolicy,
}

impl DocumentProcessor {
    /// Create a processor for the given policy.
    pub fn new(policy: FieldPolicy) -> Self {
        Self { policy }
    }

    /// Apply the policy to one document and return it.
    pub fn process(&self, mut document: Document) -> Document {
        self.apply(&mut document);
        document
    }

    /// Apply the policy to one document in place.
    pub fn apply(&self, document: &mut Document) {
        for (field, operation) in self.policy.rules() {
            if !document.contains_field(field) {
                continue;
            }
            match operation {
                FieldOperation::Blank => {
                    document.insert(field, Value::String(String::new()));
                }
                FieldOperation::Drop => {
                    document.remove(field);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        Document::try_from(value).unwrap()
    }

    fn processor() -> DocumentProcessor {
        DocumentProcessor::new(
            FieldPolicy::new()
                .blank("body")
                .drop_field("_version_")
                .drop_field("score"),
        )
    }

    #[test]
    fn test_blank_keeps_field_with_empty_value() {
        let result = processor().process(doc(json!({"id": "1", "body": ["long", "text"]})));

        assert!(result.contains_field("body"));
        assert_eq!(result.get("body"), Some(&json!("")));
    }

    #[test]
    fn test_drop_removes_field() {
        let result = processor().process(doc(json!({"id": "1", "_version_": 1234567})));

        assert!(!result.contains_field("_version_"));
        assert_eq!(result, doc(json!({"id": "1"})));
    }

    #[test]
    fn test_absent_fields_untouched() {
        let original = doc(json!({"id": "1", "title": "Kept", "nested": {"body": "inner"}}));
        let result = processor().process(original.clone());

        assert_eq!(result, original);
    }

    #[test]
    fn test_idempotent() {
        let p = processor();
        let original = doc(json!({
            "id": "1",
            "body": "text",
            "_version_": 99,
            "score": 1.5,
            "title": "T"
        }));

        let once = p.process(original);
        let twice = p.process(once.clone());

        assert_eq!(once, twice);
        assert_eq!(once, doc(json!({"id": "1", "body": "", "title": "T"})));
    }

    #[test]
    fn test_empty_policy_is_identity() {
        let original = doc(json!({"id": "1", "body": "text"}));
        let result = DocumentProcessor::default().process(original.clone());
        assert_eq!(result, original);
    }
}
