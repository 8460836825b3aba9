// Rule evaluators

use crate::RuleParam;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Predicate form of a rule: `(param, value) -> passes`.
pub type PredicateFn = Arc<dyn Fn(&RuleParam, &Value) -> bool + Send + Sync>;

/// Evaluator registered under a rule name.
///
/// Rules come in two shapes: a predicate over the rule parameter and the
/// raw value, or a pattern tested against the value's text form. Both are
/// evaluated through the uniform [`RuleEvaluator::passes`] contract.
#[derive(Clone)]
pub enum RuleEvaluator {
    /// Function rule; returns `true` when the value passes
    Predicate(PredicateFn),
    /// Pattern rule; a non-match is a failure
    Pattern(Regex),
}

impl RuleEvaluator {
    /// Wrap a predicate function.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&RuleParam, &Value) -> bool + Send + Sync + 'static,
    {
        RuleEvaluator::Predicate(Arc::new(f))
    }

    /// Wrap a compiled pattern.
    pub fn pattern(regex: Regex) -> Self {
        RuleEvaluator::Pattern(regex)
    }

    /// Does `value` pass this rule with the given parameter?
    pub fn passes(&self, param: &RuleParam, value: &Value) -> bool {
        match self {
            RuleEvaluator::Predicate(f) => f(param, value),
            RuleEvaluator::Pattern(regex) => regex.is_match(&text_of(value)),
        }
    }
}

impl fmt::Debug for RuleEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleEvaluator::Predicate(_) => f.write_str("Predicate(..)"),
            RuleEvaluator::Pattern(regex) => write!(f, "Pattern({})", regex.as_str()),
        }
    }
}

/// Text form of a value, as pattern rules see it.
///
/// Strings are used verbatim; every other value renders through its JSON
/// representation (`42`, `true`, `null`).
pub fn text_of(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Whether a value counts as empty for the `required` short-circuit:
/// JSON null, `false`, the empty string, or numeric zero. Arrays and
/// objects are never empty in this sense.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}
