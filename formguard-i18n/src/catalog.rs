//! Message catalogs

use crate::{MessageError, Result, defaults};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Message templates for one locale, keyed by rule name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    templates: HashMap<String, String>,
}

impl MessageTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a flat JSON object of `rule name -> template`.
    pub fn from_json(json: &str) -> Result<Self> {
        let templates: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { templates })
    }

    /// Add a template, replacing any existing entry for the rule.
    pub fn add(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(rule.into(), template.into());
    }

    /// Template for a rule, if present.
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.templates.get(rule).map(|s| s.as_str())
    }

    /// Whether the table carries a template for the rule.
    pub fn has(&self, rule: &str) -> bool {
        self.templates.contains_key(rule)
    }

    /// Iterate over the covered rule names.
    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    /// Lay `overrides` over this table; override entries win per rule.
    pub fn merge(&mut self, overrides: MessageTable) {
        self.templates.extend(overrides.templates);
    }
}

/// Collection of message tables for multiple locales.
///
/// Like the rule catalog, the table a validator renders with is fixed at
/// construction: start from [`MessageCatalog::defaults`], then lay caller
/// entries over it with [`MessageCatalog::merge`]. Lookup failures are
/// hard errors; a silently malformed message would mislead end users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    tables: HashMap<String, MessageTable>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the default `en` and `fr` tables.
    pub fn defaults() -> Self {
        defaults::catalog()
    }

    /// Add a whole table for a locale, replacing any existing one.
    pub fn add_table(&mut self, locale: impl Into<String>, table: MessageTable) {
        self.tables.insert(locale.into(), table);
    }

    /// Add one template under a locale, creating the table as needed.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.tables.entry(locale.into()).or_default().add(rule, template);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_template(
        mut self,
        locale: impl Into<String>,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(locale, rule, template);
        self
    }

    /// Table for a locale, if present.
    pub fn table(&self, locale: &str) -> Option<&MessageTable> {
        self.tables.get(locale)
    }

    /// Template for a rule in a locale.
    ///
    /// Errors distinguish a wholly unknown locale from a locale that
    /// merely lacks the one rule's template.
    pub fn template(&self, locale: &str, rule: &str) -> Result<&str> {
        let table = self
            .tables
            .get(locale)
            .ok_or_else(|| MessageError::MissingLocale(locale.to_string()))?;
        table.get(rule).ok_or_else(|| MessageError::MissingTemplate {
            locale: locale.to_string(),
            rule: rule.to_string(),
        })
    }

    /// Lay `overrides` over this catalog; override entries win per
    /// locale and rule, other entries of an existing locale survive.
    pub fn merge(&mut self, overrides: MessageCatalog) {
        for (locale, table) in overrides.tables {
            self.tables.entry(locale).or_default().merge(table);
        }
    }

    /// Iterate over the configured locales.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|s| s.as_str())
    }
}
