// Rule catalog

use crate::{RuleEvaluator, defaults};
use std::collections::HashMap;

/// Registry of rule evaluators keyed by rule name.
///
/// The catalog a validator runs with is built once at construction:
/// start from [`RuleCatalog::defaults`], then lay caller entries over it
/// with [`RuleCatalog::merge`]. Caller entries win per name.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: HashMap<String, RuleEvaluator>,
}

impl RuleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the built-in rules.
    pub fn defaults() -> Self {
        defaults::catalog()
    }

    /// Register an evaluator, replacing any existing entry for the name.
    pub fn register(&mut self, name: impl Into<String>, evaluator: RuleEvaluator) {
        self.rules.insert(name.into(), evaluator);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_rule(mut self, name: impl Into<String>, evaluator: RuleEvaluator) -> Self {
        self.register(name, evaluator);
        self
    }

    /// Look up the evaluator for a rule name.
    pub fn get(&self, name: &str) -> Option<&RuleEvaluator> {
        self.rules.get(name)
    }

    /// Whether a rule name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Lay `overrides` over this catalog; override entries win per name.
    pub fn merge(&mut self, overrides: RuleCatalog) {
        self.rules.extend(overrides.rules);
    }

    /// Iterate over the registered rule names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|s| s.as_str())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
