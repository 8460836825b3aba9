//! Integration tests for formguard-engine

use formguard_engine::FormValidator;
use formguard_i18n::MessageCatalog;
use formguard_rules::{RuleCatalog, RuleEvaluator, RuleSet, RuleTree};
use serde_json::json;

#[test]
fn test_required_with_custom_template() {
    let messages =
        MessageCatalog::new().with_template("en", "required", "The field {0} is required.");

    let mut validator = FormValidator::new()
        .with_messages(messages)
        .with_data(json!({ "name": "" }));
    let tree = RuleTree::new().field("name", RuleSet::new().rule("required", true));

    assert!(!validator.validate(&tree).unwrap());
    assert_eq!(
        validator.errors_in_field("name"),
        ["The field name is required."]
    );
}

#[test]
fn test_maxlength_failure() {
    let mut validator = FormValidator::new().with_data(json!({ "name": "abcdef" }));
    let tree = RuleTree::new().field("name", RuleSet::new().rule("maxlength", 5));

    assert!(!validator.validate(&tree).unwrap());
    assert_eq!(validator.failed_rules_in_field("name"), ["maxlength"]);
}

#[test]
fn test_nested_paths_are_dot_joined() {
    let mut validator = FormValidator::new().with_data(json!({ "address": { "city": "" } }));
    let tree = RuleTree::new().group(
        "address",
        RuleTree::new().field("city", RuleSet::new().rule("required", true)),
    );

    assert!(!validator.validate(&tree).unwrap());
    assert!(validator.is_field_in_error("address.city"));
    assert!(!validator.is_field_in_error("city"));
}

#[test]
fn test_deeper_nesting() {
    let mut validator = FormValidator::new()
        .with_data(json!({ "user": { "contact": { "email": "not-an-email" } } }));
    let tree = RuleTree::new().group(
        "user",
        RuleTree::new().group(
            "contact",
            RuleTree::new().field("email", RuleSet::new().rule("email", true)),
        ),
    );

    assert!(!validator.validate(&tree).unwrap());
    assert_eq!(
        validator.failed_rules_in_field("user.contact.email"),
        ["email"]
    );
}

#[test]
fn test_two_failing_rules_share_one_entry() {
    let mut validator = FormValidator::new().with_data(json!({ "code": "abc" }));
    let tree = RuleTree::new().field(
        "code",
        RuleSet::new().rule("minlength", 5).rule("numbers", true),
    );

    assert!(!validator.validate(&tree).unwrap());
    assert_eq!(validator.errors().len(), 1);
    assert_eq!(
        validator.failed_rules_in_field("code"),
        ["minlength", "numbers"]
    );
    assert_eq!(validator.errors_in_field("code").len(), 2);
}

#[test]
fn test_error_messages_join_in_insertion_order() {
    let messages = MessageCatalog::new()
        .with_template("en", "required", "{0} missing")
        .with_template("en", "numbers", "{0} not numeric");

    let mut validator = FormValidator::new()
        .with_messages(messages)
        .with_data(json!({ "age": "x", "name": "" }));
    let tree = RuleTree::new()
        .field("name", RuleSet::new().rule("required", true))
        .field("age", RuleSet::new().rule("numbers", true));

    assert!(!validator.validate(&tree).unwrap());
    // serde_json object keys iterate lexicographically: age before name.
    assert_eq!(
        validator.error_messages_with(", "),
        "age not numeric, name missing"
    );
    assert_eq!(validator.error_messages(), "age not numeric\nname missing");
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let data = json!({ "name": "", "age": "abc", "address": { "city": "" } });
    let tree = RuleTree::new()
        .field("name", RuleSet::new().rule("required", true))
        .field("age", RuleSet::new().rule("numbers", true))
        .group(
            "address",
            RuleTree::new().field("city", RuleSet::new().rule("required", true)),
        );

    let mut validator = FormValidator::new().with_data(data);
    assert!(!validator.validate(&tree).unwrap());
    let first: Vec<_> = validator.errors().to_vec();

    assert!(!validator.validate(&tree).unwrap());
    assert_eq!(validator.errors(), first.as_slice());
}

#[test]
fn test_minlength_renders_decremented_threshold() {
    let mut validator = FormValidator::new().with_data(json!({ "pin": "12" }));
    let tree = RuleTree::new().field("pin", RuleSet::new().rule("minlength", 4));

    assert!(!validator.validate(&tree).unwrap());
    // The configured boundary is 4; the message shows 3 by convention.
    assert_eq!(
        validator.errors_in_field("pin"),
        ["The field \"pin\" length must be greater than 3."]
    );
}

#[test]
fn test_french_locale() {
    let mut validator = FormValidator::new()
        .with_locale("fr")
        .with_data(json!({ "name": "" }));
    let tree = RuleTree::new().field("name", RuleSet::new().rule("required", true));

    assert!(!validator.validate(&tree).unwrap());
    assert_eq!(
        validator.errors_in_field("name"),
        ["Le champ \"name\" est obligatoire."]
    );
}

#[test]
fn test_missing_template_fails_loudly() {
    let mut validator = FormValidator::new()
        .with_locale("de")
        .with_data(json!({ "name": "" }));
    let tree = RuleTree::new().field("name", RuleSet::new().rule("required", true));

    let err = validator.validate(&tree).unwrap_err();
    assert!(err.to_string().contains("de"));
}

#[test]
fn test_rule_override_takes_precedence() {
    // Replace the built-in numbers rule with one that accepts anything.
    let rules = RuleCatalog::new().with_rule("numbers", RuleEvaluator::predicate(|_, _| true));

    let mut validator = FormValidator::new()
        .with_rules(rules)
        .with_data(json!({ "age": "abc" }));
    let tree = RuleTree::new().field("age", RuleSet::new().rule("numbers", true));

    assert!(validator.validate(&tree).unwrap());
}

#[test]
fn test_empty_not_required_never_recorded() {
    let tree = RuleTree::new().field(
        "email",
        RuleSet::new()
            .rule("email", true)
            .rule("minlength", 5)
            .rule("hasNumber", true),
    );
    let mut validator = FormValidator::new().with_data(json!({ "email": "" }));

    assert!(validator.validate(&tree).unwrap());
    assert!(validator.failed_rules_in_field("email").is_empty());

    // null and zero count as empty too.
    validator.set_data(json!({ "email": null }));
    assert!(validator.validate(&tree).unwrap());
    validator.set_data(json!({ "email": 0 }));
    assert!(validator.validate(&tree).unwrap());
}

#[test]
fn test_password_pair() {
    let tree = RuleTree::new().field(
        "confirm",
        RuleSet::new().rule("equalPassword", "hunter2"),
    );

    let mut validator = FormValidator::new().with_data(json!({ "confirm": "hunter2" }));
    assert!(validator.validate(&tree).unwrap());

    validator.set_data(json!({ "confirm": "hunter3" }));
    assert!(!validator.validate(&tree).unwrap());
    assert_eq!(
        validator.errors_in_field("confirm"),
        ["Passwords are different."]
    );
}
