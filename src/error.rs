//! Error types for form components

use crate::state::{FieldKey, FieldKind};
use thiserror::Error;

/// Contract violations raised by the form state container.
///
/// These are programmer errors: a correct caller uses the typed setters and
/// never sees them at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Field name is not one of the declared keys
    #[error("unknown form field `{0}`")]
    InvalidField(String),

    /// Value shape does not match the field's declared kind
    #[error("field `{field}` holds {expected} values, got {actual}")]
    TypeMismatch {
        field: FieldKey,
        expected: FieldKind,
        actual: FieldKind,
    },

    /// Option string is not one of the recognized values
    #[error("unknown {option} `{value}`")]
    InvalidOption { option: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_display() {
        let err = FormError::InvalidField("lastName".to_string());
        assert_eq!(err.to_string(), "unknown form field `lastName`");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = FormError::TypeMismatch {
            field: FieldKey::Email,
            expected: FieldKind::Text,
            actual: FieldKind::Flag,
        };
        assert_eq!(
            err.to_string(),
            "field `email` holds text values, got flag"
        );
    }

    #[test]
    fn test_invalid_option_display() {
        let err = FormError::InvalidOption {
            option: "placement",
            value: "center".to_string(),
        };
        assert_eq!(err.to_string(), "unknown placement `center`");
    }
}
