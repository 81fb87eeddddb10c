use thiserror::Error;

use crate::validation::error_codes;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    #[error("MISSING FIELD: required field '{field}' is absent")]
    MissingField { field: String },

    #[error("VALIDATION ERROR: {code} - {message}")]
    Validation { code: String, message: String },
}

impl SdkError {
    pub fn missing(field: impl Into<String>) -> Self {
        SdkError::MissingField {
            field: field.into(),
        }
    }

    pub fn validation(code: &str, message: impl Into<String>) -> Self {
        SdkError::Validation {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Stable error code, usable for matching across the FFI boundary.
    pub fn code(&self) -> &str {
        match self {
            SdkError::MissingField { .. } => error_codes::MISSING_FIELD,
            SdkError::Validation { code, .. } => code.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = SdkError::missing("auth_date");
        assert_eq!(
            err.to_string(),
            "MISSING FIELD: required field 'auth_date' is absent"
        );
        assert_eq!(err.code(), error_codes::MISSING_FIELD);
    }

    #[test]
    fn test_validation_code_passthrough() {
        let err = SdkError::validation(error_codes::INVALID_JSON, "bad user");
        assert_eq!(err.code(), error_codes::INVALID_JSON);
        assert!(err.to_string().contains("bad user"));
    }
}
