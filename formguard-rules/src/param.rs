// Rule parameters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar parameter attached to one rule in a rule set.
///
/// Parameters are authored alongside rule names: `required: true`,
/// `minlength: 3`, `date: "%Y-%m-%d"`. The `Display` form is what message
/// templates substitute for their `{1}` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleParam {
    /// Switch-style parameter (`required: true`)
    Bool(bool),
    /// Integer parameter (`maxlength: 40`)
    Int(i64),
    /// Floating-point parameter
    Float(f64),
    /// Text parameter (`date: "%Y-%m-%d"`)
    Str(String),
}

impl RuleParam {
    /// Truthiness of the parameter.
    ///
    /// `false`, `0`, `0.0` and `""` are falsy; everything else is truthy.
    /// The checker uses this for the `required` short-circuit, so
    /// `required: false` behaves exactly like an absent `required`.
    pub fn is_truthy(&self) -> bool {
        match self {
            RuleParam::Bool(b) => *b,
            RuleParam::Int(n) => *n != 0,
            RuleParam::Float(f) => *f != 0.0,
            RuleParam::Str(s) => !s.is_empty(),
        }
    }

    /// Integer view, for length-style rules.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RuleParam::Int(n) => Some(*n),
            RuleParam::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    /// Text view, for rules whose parameter is a format or comparison text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RuleParam::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RuleParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleParam::Bool(b) => write!(f, "{}", b),
            RuleParam::Int(n) => write!(f, "{}", n),
            RuleParam::Float(x) => write!(f, "{}", x),
            RuleParam::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for RuleParam {
    fn from(value: bool) -> Self {
        RuleParam::Bool(value)
    }
}

impl From<i64> for RuleParam {
    fn from(value: i64) -> Self {
        RuleParam::Int(value)
    }
}

impl From<i32> for RuleParam {
    fn from(value: i32) -> Self {
        RuleParam::Int(value.into())
    }
}

impl From<usize> for RuleParam {
    fn from(value: usize) -> Self {
        RuleParam::Int(value as i64)
    }
}

impl From<f64> for RuleParam {
    fn from(value: f64) -> Self {
        RuleParam::Float(value)
    }
}

impl From<&str> for RuleParam {
    fn from(value: &str) -> Self {
        RuleParam::Str(value.to_string())
    }
}

impl From<String> for RuleParam {
    fn from(value: String) -> Self {
        RuleParam::Str(value)
    }
}
