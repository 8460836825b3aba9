// Error store

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Validation failures recorded for a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Dotted path of the field that failed
    pub field: String,

    /// Names of the rules that failed, in evaluation order
    pub failed_rules: Vec<String>,

    /// Rendered messages, positionally aligned with `failed_rules`
    pub messages: Vec<String>,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.messages.join(", "))
    }
}

/// Per-run accumulator of field errors.
///
/// Holds at most one entry per distinct field path; later failures for
/// the same path append to the existing entry. The store is owned by one
/// validation run and cleared at the start of the next.
#[derive(Debug, Clone, Default)]
pub struct ErrorStore {
    errors: Vec<FieldError>,
    has_error: bool,
}

impl ErrorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed rule with its rendered message.
    ///
    /// Also raises the `has_error` flag the hosting layer polls to
    /// trigger a re-render.
    pub(crate) fn add(&mut self, field: &str, rule: &str, message: String) {
        match self.errors.iter_mut().find(|e| e.field == field) {
            Some(entry) => {
                entry.failed_rules.push(rule.to_string());
                entry.messages.push(message);
            }
            None => self.errors.push(FieldError {
                field: field.to_string(),
                failed_rules: vec![rule.to_string()],
                messages: vec![message],
            }),
        }
        self.has_error = true;
    }

    /// Clear all entries and lower the `has_error` flag.
    pub(crate) fn reset(&mut self) {
        self.errors.clear();
        self.has_error = false;
    }

    /// True iff no field failed.
    pub fn is_form_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether an entry exists for the field.
    pub fn is_field_in_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Map of field path to failed-rule names, for every entry.
    pub fn failed_rules(&self) -> BTreeMap<String, Vec<String>> {
        self.errors
            .iter()
            .map(|e| (e.field.clone(), e.failed_rules.clone()))
            .collect()
    }

    /// Failed-rule names for one field; empty when the field has no entry.
    pub fn failed_rules_in_field(&self, field: &str) -> Vec<String> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.failed_rules.clone())
            .unwrap_or_default()
    }

    /// Every message across every field, joined with `separator`.
    ///
    /// Field order is insertion order; messages within a field keep
    /// their per-field order.
    pub fn error_messages_with(&self, separator: &str) -> String {
        self.errors
            .iter()
            .flat_map(|e| e.messages.iter())
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// [`error_messages_with`](Self::error_messages_with) joined with
    /// newlines.
    pub fn error_messages(&self) -> String {
        self.error_messages_with("\n")
    }

    /// Messages for one field; empty when the field has no entry.
    pub fn errors_in_field(&self, field: &str) -> Vec<String> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.messages.clone())
            .unwrap_or_default()
    }

    /// All recorded entries, in insertion order.
    pub fn entries(&self) -> &[FieldError] {
        &self.errors
    }

    /// Process-visible flag raised when an error is recorded.
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Number of fields in error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Serialized view of the store for host consumption.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": &self.errors })
    }
}

impl fmt::Display for ErrorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_field_appends() {
        let mut store = ErrorStore::new();
        store.add("name", "minlength", "too short".into());
        store.add("name", "numbers", "not a number".into());

        assert_eq!(store.len(), 1);
        assert_eq!(store.failed_rules_in_field("name"), ["minlength", "numbers"]);
        assert_eq!(store.errors_in_field("name"), ["too short", "not a number"]);
    }

    #[test]
    fn test_validity_queries() {
        let mut store = ErrorStore::new();
        assert!(store.is_form_valid());
        assert!(!store.has_error());

        store.add("name", "required", "missing".into());
        assert!(!store.is_form_valid());
        assert!(store.has_error());
        assert!(store.is_field_in_error("name"));
        assert!(!store.is_field_in_error("email"));

        store.reset();
        assert!(store.is_form_valid());
        assert!(!store.has_error());
    }

    #[test]
    fn test_absent_field_queries_are_empty() {
        let store = ErrorStore::new();
        assert!(store.failed_rules_in_field("ghost").is_empty());
        assert!(store.errors_in_field("ghost").is_empty());
    }

    #[test]
    fn test_message_join_order() {
        let mut store = ErrorStore::new();
        store.add("a", "r1", "m1".into());
        store.add("b", "r2", "m2".into());
        store.add("a", "r3", "m3".into());

        assert_eq!(store.error_messages_with(", "), "m1, m3, m2");
    }

    #[test]
    fn test_to_json_shape() {
        let mut store = ErrorStore::new();
        store.add("name", "required", "missing".into());

        let json = store.to_json();
        assert_eq!(json["errors"][0]["field"], "name");
        assert_eq!(json["errors"][0]["failed_rules"][0], "required");
    }
}
