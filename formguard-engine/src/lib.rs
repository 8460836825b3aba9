//! Validation engine for Formguard
//!
//! Walks a nested data snapshot in lockstep with a rule tree, evaluates
//! each leaf against the rule catalog, and accumulates failures into a
//! per-run error store rendered through per-locale message templates.
//!
//! The engine is a standalone stateful object: a hosting layer (a UI
//! component, a request handler) owns an instance, feeds it the current
//! snapshot, and reads back validity and messages to drive its own
//! rendering. Runs are synchronous and deterministic; concurrent hosts
//! give each validation context its own instance.
//!
//! # Examples
//!
//! ```
//! use formguard_engine::FormValidator;
//! use formguard_rules::{RuleSet, RuleTree};
//! use serde_json::json;
//!
//! let tree = RuleTree::new()
//!     .field("name", RuleSet::new().rule("required", true))
//!     .group(
//!         "address",
//!         RuleTree::new().field("city", RuleSet::new().rule("required", true)),
//!     );
//!
//! let mut validator = FormValidator::new();
//! validator.set_data(json!({ "name": "Ada", "address": { "city": "" } }));
//!
//! let valid = validator.validate(&tree).unwrap();
//! assert!(!valid);
//! assert!(validator.is_field_in_error("address.city"));
//! assert_eq!(
//!     validator.failed_rules_in_field("address.city"),
//!     vec!["required".to_string()],
//! );
//! ```

mod error;
mod store;
mod validator;

pub use error::ValidateError;
pub use store::{ErrorStore, FieldError};
pub use validator::FormValidator;
