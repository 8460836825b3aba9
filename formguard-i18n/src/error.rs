//! Error types for message catalogs

use thiserror::Error;

/// Configuration defects raised while resolving validation messages.
///
/// Per-field validation failures never surface here; these errors mean
/// the catalogs themselves are misconfigured.
#[derive(Debug, Error)]
pub enum MessageError {
    /// No message table for the requested locale
    #[error("no message table for locale: {0}")]
    MissingLocale(String),

    /// No template for a rule within an existing locale table
    #[error("no message template for rule `{rule}` in locale `{locale}`")]
    MissingTemplate { locale: String, rule: String },

    /// JSON parse error while loading a table
    #[error("failed to parse message table: {0}")]
    Json(#[from] serde_json::Error),
}
