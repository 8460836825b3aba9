//! Engine error types

use formguard_i18n::MessageError;
use thiserror::Error;

/// Hard errors surfaced by a validation run.
///
/// Per-field validation failures are not errors; they accumulate in the
/// error store and drive the boolean result. Only configuration defects
/// reach the caller here.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A failing rule had no message template for the active locale
    #[error(transparent)]
    Message(#[from] MessageError),
}
