use thiserror::Error;

use crate::domain::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Empty text, unset choice/number/date or an unchecked flag.
    Missing,
    /// A date earlier than the current local day.
    TooEarly,
}

/// A user-correctable problem with one field, shown inline next to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FieldId,
    pub kind: ValidationKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: FieldId, kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{field}` expects a {expected} value, got {actual}")]
    TypeMismatch {
        field: FieldId,
        expected: &'static str,
        actual: &'static str,
    },
}
