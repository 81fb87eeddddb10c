//! # MINIAPP VALIDATION MODULE
//!
//! **CORE VALIDATION SYSTEM WITH TRAIT-BASED ARCHITECTURE**
//!
//! This module provides the `Validator` trait and the concrete validators the
//! init data pipeline is assembled from.
//!
//! ## VALIDATION PIPELINE
//!
//! 1. **BUFFER VALIDATION** - Size limit on raw input
//! 2. **UTF-8 VALIDATION** - String encoding verification
//! 3. **SCHEMA VALIDATION** - Field table driven rename and coercion
//! 4. **NUMERIC VALIDATION** - Range constraints (timestamps)
//!
//! ## USAGE
//!
//! ```rust
//! use miniapp::validation::{BufferValidator, Validator};
//!
//! let validator = BufferValidator::new(1024);
//! let data = validator.validate(b"hash=abcd".to_vec()).unwrap();
//! assert_eq!(data, b"hash=abcd");
//! ```

use crate::errors::SdkError;

pub mod validators;

pub use validators::{
    BufferValidator, FieldKind, FieldSpec, JsonType, NumericRangeValidator, SchemaValidator,
    Utf8Validator,
};

/// **INPUT SIZE VALIDATION** - Convenience wrapper over `BufferValidator`
pub fn validate_input_size(data: &[u8], max_size: usize) -> Result<(), SdkError> {
    BufferValidator::new(max_size).check_len(data.len())
}

/// **UTF-8 STRING VALIDATION** - Convenience wrapper over `Utf8Validator`
pub fn validate_utf8_string(data: &[u8]) -> Result<String, SdkError> {
    Utf8Validator::new().validate(data.to_vec())
}

/// **CORE VALIDATOR TRAIT**
///
/// **MANDATE**: ALL validation steps of the parse pipeline implement this trait.
/// **GUARANTEE**: MUST NOT panic. ALL error conditions return `SdkError`.
pub trait Validator {
    /// **INPUT TYPE** - Data type accepted by this validator
    type Input;

    /// **OUTPUT TYPE** - Validated data type returned on success
    type Output;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, SdkError>;
}

pub type ValidationResult<T> = Result<T, SdkError>;

/// **VALIDATION ERROR CODES**
///
/// **MANDATE**: Use these standardized error codes for consistent error reporting.
pub mod error_codes {
    pub const MISSING_FIELD: &str = "MINIAPP_VALIDATION_MISSING_FIELD";
    pub const UNEXPECTED_TYPE: &str = "MINIAPP_VALIDATION_UNEXPECTED_TYPE";
    pub const UNKNOWN_FIELD: &str = "MINIAPP_VALIDATION_UNKNOWN_FIELD";
    pub const OUT_OF_RANGE: &str = "MINIAPP_VALIDATION_OUT_OF_RANGE";
    pub const INVALID_JSON: &str = "MINIAPP_VALIDATION_INVALID_JSON";
    pub const INVALID_ENCODING: &str = "MINIAPP_VALIDATION_INVALID_ENCODING";
    pub const INVALID_UTF8: &str = "MINIAPP_VALIDATION_INVALID_UTF8";
    pub const INPUT_TOO_LARGE: &str = "MINIAPP_VALIDATION_INPUT_TOO_LARGE";
    pub const INVALID_INPUT: &str = "MINIAPP_VALIDATION_INVALID_INPUT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_size() {
        assert!(validate_input_size(b"hash=abcd", 9).is_ok());

        match validate_input_size(b"hash=abcde", 9) {
            Err(SdkError::Validation { code, message }) => {
                assert_eq!(code, error_codes::INPUT_TOO_LARGE);
                assert!(message.contains("10"));
            }
            other => panic!("Expected size error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_utf8_string() {
        assert_eq!(validate_utf8_string("Жора".as_bytes()).unwrap(), "Жора");
        assert!(validate_utf8_string(&[0xFF, 0xFE, 0xFD]).is_err());
    }

    #[test]
    fn test_error_codes_unique() {
        let codes = [
            error_codes::MISSING_FIELD,
            error_codes::UNEXPECTED_TYPE,
            error_codes::UNKNOWN_FIELD,
            error_codes::OUT_OF_RANGE,
            error_codes::INVALID_JSON,
            error_codes::INVALID_ENCODING,
            error_codes::INVALID_UTF8,
            error_codes::INPUT_TOO_LARGE,
            error_codes::INVALID_INPUT,
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }
}
