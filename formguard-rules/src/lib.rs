//! Rule catalog for Formguard
//!
//! Provides the building blocks of a rule specification: scalar rule
//! parameters, rule evaluators (predicate functions or regex patterns),
//! the named catalog of evaluators, and the nested rule tree that is
//! walked in lockstep with a data snapshot.
//!
//! # Examples
//!
//! ## Authoring a rule tree
//!
//! ```
//! use formguard_rules::{RuleSet, RuleTree};
//!
//! let tree = RuleTree::new()
//!     .field("name", RuleSet::new().rule("required", true).rule("maxlength", 40))
//!     .group(
//!         "address",
//!         RuleTree::new().field("city", RuleSet::new().rule("required", true)),
//!     );
//!
//! assert!(tree.child("name").is_some());
//! ```
//!
//! ## Extending the catalog with a custom rule
//!
//! ```
//! use formguard_rules::{RuleCatalog, RuleEvaluator, RuleParam};
//! use serde_json::json;
//!
//! let mut catalog = RuleCatalog::defaults();
//! catalog.register(
//!     "startsWith",
//!     RuleEvaluator::predicate(|param, value| {
//!         match (param.as_str(), value.as_str()) {
//!             (Some(prefix), Some(text)) => text.starts_with(prefix),
//!             _ => false,
//!         }
//!     }),
//! );
//!
//! let rule = catalog.get("startsWith").unwrap();
//! assert!(rule.passes(&RuleParam::from("ab"), &json!("abc")));
//! ```

mod catalog;
mod defaults;
mod evaluator;
mod param;
mod tree;

pub use catalog::RuleCatalog;
pub use evaluator::{PredicateFn, RuleEvaluator, is_empty_value, text_of};
pub use param::RuleParam;
pub use tree::{RuleNode, RuleSet, RuleTree};
