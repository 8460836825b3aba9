// Built-in rules

use crate::{RuleCatalog, RuleEvaluator, text_of};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// Common regex patterns
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

static NUMBERS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

static REQUIRED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

static HAS_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

static HAS_UPPER_CASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

static HAS_LOWER_CASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());

static HAS_SPECIAL_CHARACTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).unwrap());

/// Fallback format for the `date` rule when the parameter carries no
/// format string.
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the catalog of built-in rules.
///
/// Length rules count characters of the value's text form. `minlength`
/// and `maxlength` are inclusive boundaries: `minlength: 3` passes a
/// three-character value.
pub(crate) fn catalog() -> RuleCatalog {
    let mut catalog = RuleCatalog::new();

    catalog.register("required", RuleEvaluator::pattern(REQUIRED_REGEX.clone()));
    catalog.register("numbers", RuleEvaluator::pattern(NUMBERS_REGEX.clone()));
    catalog.register("email", RuleEvaluator::pattern(EMAIL_REGEX.clone()));

    catalog.register(
        "date",
        RuleEvaluator::predicate(|param, value| {
            let format = param.as_str().unwrap_or(DEFAULT_DATE_FORMAT);
            NaiveDate::parse_from_str(text_of(value).as_ref(), format).is_ok()
        }),
    );

    catalog.register(
        "minlength",
        RuleEvaluator::predicate(|param, value| {
            let min = param.as_int().unwrap_or(0);
            text_of(value).chars().count() as i64 >= min
        }),
    );

    catalog.register(
        "maxlength",
        RuleEvaluator::predicate(|param, value| {
            let max = param.as_int().unwrap_or(i64::MAX);
            text_of(value).chars().count() as i64 <= max
        }),
    );

    catalog.register(
        "equalPassword",
        RuleEvaluator::predicate(|param, value| {
            param
                .as_str()
                .is_some_and(|expected| text_of(value).as_ref() == expected)
        }),
    );

    catalog.register("hasNumber", RuleEvaluator::pattern(HAS_NUMBER_REGEX.clone()));
    catalog.register(
        "hasUpperCase",
        RuleEvaluator::pattern(HAS_UPPER_CASE_REGEX.clone()),
    );
    catalog.register(
        "hasLowerCase",
        RuleEvaluator::pattern(HAS_LOWER_CASE_REGEX.clone()),
    );
    catalog.register(
        "hasSpecialCharacter",
        RuleEvaluator::pattern(HAS_SPECIAL_CHARACTER_REGEX.clone()),
    );

    catalog
}
