//! Localized validation messages for Formguard
//!
//! Provides per-locale tables of message templates keyed by rule name,
//! and the positional placeholder rendering used for failure messages:
//! `{0}` is the field path, `{1}` the rule parameter.
//!
//! A missing locale or template is a configuration defect and surfaces
//! as a hard [`MessageError`] rather than a silently malformed message.
//!
//! # Quick Start
//!
//! ```
//! use formguard_i18n::{MessageCatalog, template};
//!
//! let mut catalog = MessageCatalog::defaults();
//! catalog.insert("en", "required", "The field {0} is required.");
//!
//! let tpl = catalog.template("en", "required").unwrap();
//! assert_eq!(template::render(tpl, "name", ""), "The field name is required.");
//! ```

mod catalog;
mod defaults;
mod error;
pub mod template;

pub use catalog::{MessageCatalog, MessageTable};
pub use error::MessageError;

/// Result type for message-catalog operations
pub type Result<T> = std::result::Result<T, MessageError>;
