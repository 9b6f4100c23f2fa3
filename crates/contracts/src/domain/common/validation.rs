//! Validation errors raised by record forms

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{field}` is required")]
    Required { field: &'static str },

    #[error("unknown status `{0}`")]
    UnknownStatus(String),

    #[error("unknown field type `{0}`")]
    UnknownFieldType(String),
}

impl ValidationError {
    /// Translation key of the message shown inside the dialog.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::Required { .. } => "requiredField",
            ValidationError::UnknownStatus(_) => "invalidStatus",
            ValidationError::UnknownFieldType(_) => "invalidFieldType",
        }
    }
}

/// Returns the trimmed value or a `Required` error when nothing is left.
pub fn require(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require("  Email ", "name"), Ok("Email".to_string()));
        assert_eq!(
            require("   ", "name"),
            Err(ValidationError::Required { field: "name" })
        );
        assert_eq!(
            require("", "name"),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn test_message_keys() {
        assert_eq!(
            ValidationError::Required { field: "name" }.message_key(),
            "requiredField"
        );
        assert_eq!(
            ValidationError::UnknownFieldType("blob".into()).message_key(),
            "invalidFieldType"
        );
    }
}
