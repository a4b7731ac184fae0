//! Field-transformation policy.
//!
//! A policy names fields whose stored values must not be re-submitted as-is.
//! Each field is either blanked (kept, with an empty value) or dropped.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What to do with a configured field before re-submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOperation {
    /// Keep the field but replace its value with an empty string.
    Blank,
    /// Remove the field from the document.
    Drop,
}

impl FromStr for FieldOperation {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blank" | "empty" => Ok(Self::Blank),
            "drop" | "ignore" => Ok(Self::Drop),
            other => Err(PolicyParseError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for FieldOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "blank"),
            Self::Drop => write!(f, "drop"),
        }
    }
}

/// Errors raised while parsing a field policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyParseError {
    /// Entry was not of the form `field=operation`.
    #[error("Malformed field policy entry: {0:?} (expected field=operation)")]
    MalformedEntry(String),

    /// Operation name was not recognised.
    #[error("Unknown field operation: {0:?} (expected blank or drop)")]
    UnknownOperation(String),
}

/// Mapping from field name to operation, fixed for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPolicy {
    rules: BTreeMap<String, FieldOperation>,
}

impl FieldPolicy {
    /// An empty policy that leaves every document untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing any earlier rule for the same field.
    pub fn with_rule(mut self, field: impl Into<String>, operation: FieldOperation) -> Self {
        self.rules.insert(field.into(), operation);
        self
    }

    /// Blank `field`.
    pub fn blank(self, field: impl Into<String>) -> Self {
        self.with_rule(field, FieldOperation::Blank)
    }

    /// Drop `field`.
    pub fn drop_field(self, field: impl Into<String>) -> Self {
        self.with_rule(field, FieldOperation::Drop)
    }

    /// Iterate over the rules in field-name order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, FieldOperation)> {
        self.rules.iter().map(|(field, op)| (field.as_str(), *op))
    }

    /// Whether the policy has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl FromStr for FieldPolicy {
    type Err = PolicyParseError;

    /// Parse `field=op[,field=op...]`. Blank input yields an empty policy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut policy = FieldPolicy::new();

        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (field, op) = entry
                .split_once('=')
                .ok_or_else(|| PolicyParseError::MalformedEntry(entry.to_string()))?;
            let field = field.trim();
            if field.is_empty() {
                return Err(PolicyParseError::MalformedEntry(entry.to_string()));
            }
            policy = policy.with_rule(field, op.parse()?);
        }

        Ok(policy)
    }
}

impl fmt::Display for FieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .rules()
            .map(|(field, op)| format!("{}={}", field, op))
            .collect();
        write!(f, "{}", rendered.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operations_and_aliases() {
        assert_eq!("blank".parse::<FieldOperation>().unwrap(), FieldOperation::Blank);
        assert_eq!("EMPTY".parse::<FieldOperation>().unwrap(), FieldOperation::Blank);
        assert_eq!("drop".parse::<FieldOperation>().unwrap(), FieldOperation::Drop);
        assert_eq!(" ignore ".parse::<FieldOperation>().unwrap(), FieldOperation::Drop);
        assert!(matches!(
            "truncate".parse::<FieldOperation>(),
            Err(PolicyParseError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_parse_policy() {
        let policy: FieldPolicy = "body=blank, _version_=drop".parse().unwrap();
        assert_eq!(policy.len(), 2);
        let rules: Vec<_> = policy.rules().collect();
        assert_eq!(
            rules,
            vec![("_version_", FieldOperation::Drop), ("body", FieldOperation::Blank)]
        );
    }

    #[test]
    fn test_parse_empty_policy() {
        assert!("".parse::<FieldPolicy>().unwrap().is_empty());
        assert!(" , ".parse::<FieldPolicy>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_policy() {
        assert!(matches!(
            "body".parse::<FieldPolicy>(),
            Err(PolicyParseError::MalformedEntry(_))
        ));
        assert!(matches!(
            "=drop".parse::<FieldPolicy>(),
            Err(PolicyParseError::MalformedEntry(_))
        ));
    }

    #[test]
    fn test_later_rule_wins() {
        let policy: FieldPolicy = "body=blank,body=drop".parse().unwrap();
        assert_eq!(policy.rules().collect::<Vec<_>>(), vec![("body", FieldOperation::Drop)]);
    }

    #[test]
    fn test_display_round_trips() {
        let policy = FieldPolicy::new().blank("body").drop_field("score");
        assert_eq!(policy.to_string(), "body=blank,score=drop");
        assert_eq!(policy.to_string().parse::<FieldPolicy>().unwrap(), policy);
    }
}
