// Form validator engine

use crate::{ErrorStore, FieldError, ValidateError};
use formguard_i18n::{MessageCatalog, template};
use formguard_rules::{RuleCatalog, RuleNode, RuleParam, RuleSet, RuleTree, is_empty_value};
use log::{debug, trace};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Stateful validation engine.
///
/// Holds the merged rule and message catalogs, the active locale, the
/// current data snapshot, and the error store of the most recent run.
/// Hosts own one instance per validation context and compose it rather
/// than inheriting from it; the engine never mutates the snapshot.
///
/// Construction merges caller configuration over the defaults:
///
/// ```
/// use formguard_engine::FormValidator;
/// use formguard_i18n::MessageCatalog;
///
/// let overrides = MessageCatalog::new()
///     .with_template("en", "required", "The field {0} is required.");
///
/// let validator = FormValidator::new()
///     .with_locale("en")
///     .with_messages(overrides);
/// # let _ = validator;
/// ```
pub struct FormValidator {
    locale: String,
    rules: RuleCatalog,
    messages: MessageCatalog,
    data: Value,
    store: ErrorStore,
}

impl FormValidator {
    /// Engine with the default catalogs, locale `en`, and an empty
    /// data snapshot.
    pub fn new() -> Self {
        Self {
            locale: "en".to_string(),
            rules: RuleCatalog::defaults(),
            messages: MessageCatalog::defaults(),
            data: Value::Object(Map::new()),
            store: ErrorStore::new(),
        }
    }

    /// Select the locale used to render messages.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Lay caller rules over the default catalog; caller entries win
    /// per rule name.
    pub fn with_rules(mut self, overrides: RuleCatalog) -> Self {
        self.rules.merge(overrides);
        self
    }

    /// Lay caller templates over the default catalog; caller entries
    /// win per locale and rule.
    pub fn with_messages(mut self, overrides: MessageCatalog) -> Self {
        self.messages.merge(overrides);
        self
    }

    /// Builder-style [`set_data`](Self::set_data).
    pub fn with_data(mut self, data: Value) -> Self {
        self.set_data(data);
        self
    }

    /// Replace the data snapshot the next run reads.
    pub fn set_data(&mut self, data: Value) {
        self.data = data;
    }

    /// The current data snapshot.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// The active message locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Validate the current snapshot against `tree`.
    ///
    /// Resets the error store, walks the snapshot in lockstep with the
    /// rule tree, and returns `Ok(true)` iff no field failed. `Err` is
    /// reserved for configuration defects (a failing rule whose locale
    /// has no message template); per-field failures are reported through
    /// the query accessors, never as errors.
    pub fn validate(&mut self, tree: &RuleTree) -> Result<bool, ValidateError> {
        self.store.reset();

        // The snapshot is parked locally for the walk so the store can
        // be filled through &mut self; it is put back untouched.
        let data = std::mem::take(&mut self.data);
        let walked = match &data {
            Value::Object(object) => self.walk_object(tree, object, None),
            other => {
                trace!("snapshot is not an object ({}), nothing to walk", kind_of(other));
                Ok(())
            }
        };
        self.data = data;
        walked?;

        let valid = self.store.is_form_valid();
        debug!(
            "validation finished: {} field(s) in error",
            self.store.len()
        );
        Ok(valid)
    }

    fn walk_object(
        &mut self,
        tree: &RuleTree,
        object: &Map<String, Value>,
        prefix: Option<&str>,
    ) -> Result<(), ValidateError> {
        for (key, value) in object {
            let path = match prefix {
                Some(prefix) => format!("{prefix}.{key}"),
                None => key.clone(),
            };
            match tree.child(key) {
                Some(RuleNode::Group(subtree)) => match value {
                    Value::Object(child) => {
                        trace!("descending into {path}");
                        self.walk_object(subtree, child, Some(&path))?;
                    }
                    // Rules expect nesting but the data holds no
                    // sub-object: nothing to validate on this branch.
                    _ => trace!("no sub-object at {path}, branch skipped"),
                },
                Some(RuleNode::Field(rules)) => self.check_rules(&path, rules, value)?,
                None => trace!("no rules for {path}, skipped"),
            }
        }
        Ok(())
    }

    fn check_rules(
        &mut self,
        path: &str,
        rules: &RuleSet,
        value: &Value,
    ) -> Result<(), ValidateError> {
        // An empty field that is not required is vacuously valid, no
        // matter what other rules are configured for it.
        if is_empty_value(value) && !rules.required() {
            trace!("{path} is empty and not required, skipped");
            return Ok(());
        }

        for (name, param) in rules.iter() {
            let passed = match self.rules.get(name) {
                Some(evaluator) => evaluator.passes(param, value),
                // Unknown rule names are ignored so rule trees can carry
                // entries this catalog does not know yet.
                None => {
                    trace!("unknown rule {name} on {path}, ignored");
                    continue;
                }
            };
            if !passed {
                debug!("rule {name} failed for {path}");
                self.add_error(path, name, param)?;
            }
        }
        Ok(())
    }

    fn add_error(&mut self, path: &str, rule: &str, param: &RuleParam) -> Result<(), ValidateError> {
        // minlength historically renders its threshold one lower than
        // the configured boundary. Kept bit-for-bit for compatibility
        // with existing rule sets and translations.
        let shown = match (rule, param) {
            ("minlength", RuleParam::Int(n)) => RuleParam::Int(n - 1),
            ("minlength", RuleParam::Float(f)) => RuleParam::Float(f - 1.0),
            _ => param.clone(),
        };
        let rendered = template::render(
            self.messages.template(&self.locale, rule)?,
            path,
            &shown.to_string(),
        );
        self.store.add(path, rule, rendered);
        Ok(())
    }

    /// True iff the last run recorded no failures.
    pub fn is_form_valid(&self) -> bool {
        self.store.is_form_valid()
    }

    /// Whether the field failed in the last run.
    pub fn is_field_in_error(&self, field: &str) -> bool {
        self.store.is_field_in_error(field)
    }

    /// Map of field path to failed-rule names, for every field in error.
    pub fn failed_rules(&self) -> BTreeMap<String, Vec<String>> {
        self.store.failed_rules()
    }

    /// Failed-rule names for one field; empty when the field has no
    /// entry, never an error.
    pub fn failed_rules_in_field(&self, field: &str) -> Vec<String> {
        self.store.failed_rules_in_field(field)
    }

    /// Every recorded message joined with newlines.
    pub fn error_messages(&self) -> String {
        self.store.error_messages()
    }

    /// Every recorded message joined with `separator`.
    pub fn error_messages_with(&self, separator: &str) -> String {
        self.store.error_messages_with(separator)
    }

    /// Messages for one field; empty when the field has no entry.
    pub fn errors_in_field(&self, field: &str) -> Vec<String> {
        self.store.errors_in_field(field)
    }

    /// Flag raised while the store holds errors; the hosting layer
    /// polls it to decide whether to re-render.
    pub fn has_error(&self) -> bool {
        self.store.has_error()
    }

    /// All recorded field errors, in insertion order.
    pub fn errors(&self) -> &[FieldError] {
        self.store.entries()
    }

    /// The error store of the most recent run.
    pub fn store(&self) -> &ErrorStore {
        &self.store
    }

    /// Clear the error store outside of a validation run.
    pub fn reset(&mut self) {
        self.store.reset();
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
