//! Placeholder rendering
//!
//! Message templates carry two positional tokens: `{0}` for the field
//! path and `{1}` for the rule parameter.

/// Substitute `{0}` with the field path and `{1}` with the parameter's
/// display form.
///
/// Each token is replaced at its first occurrence only, matching the
/// renderer whose message conventions this crate is compatible with.
pub fn render(template: &str, field: &str, param: &str) -> String {
    template.replacen("{0}", field, 1).replacen("{1}", param, 1)
}
