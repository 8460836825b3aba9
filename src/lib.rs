// Formguard - declarative field validation for nested form data
//
// This library validates a nested data snapshot against a parallel rule
// tree and reports failures as structured, localized messages.

// Re-export the engine's public surface
pub use formguard_engine::*;

// Re-export member crates
pub use formguard_i18n;
pub use formguard_rules;

/// Prelude for common imports
pub mod prelude {
    pub use formguard_engine::{ErrorStore, FieldError, FormValidator, ValidateError};
    pub use formguard_i18n::{MessageCatalog, MessageError, MessageTable};
    pub use formguard_rules::{RuleCatalog, RuleEvaluator, RuleParam, RuleSet, RuleTree};
}
