//! # CONCRETE VALIDATOR IMPLEMENTATIONS
//!
//! **CRITICAL**: Four validators implementing the core `Validator` trait.
//! The schema validator is table driven: a static list of `FieldSpec`
//! entries describes the raw key, the normalized key and the value kind.

use super::{error_codes, Validator};
use crate::errors::SdkError;
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::ops::RangeInclusive;

// ================================================================================================
// BUFFER VALIDATOR - Raw input size validation
// ================================================================================================

/// **BUFFER VALIDATOR**
///
/// **PURPOSE**: Rejects raw input above a configurable byte limit.
/// **PERFORMANCE**: O(1), the buffer is handed back untouched.
#[derive(Debug, Clone)]
pub struct BufferValidator {
    /// **MAXIMUM ALLOWED SIZE** - Buffer size limit in bytes
    max_size: usize,

    /// **STRICT MODE** - Reject empty buffers when enabled
    strict: bool,
}

impl BufferValidator {
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            strict: false,
        }
    }

    pub fn with_strict(max_size: usize, strict: bool) -> Self {
        Self { max_size, strict }
    }

    pub(crate) fn check_len(&self, len: usize) -> Result<(), SdkError> {
        if self.strict && len == 0 {
            return Err(SdkError::validation(
                error_codes::INVALID_INPUT,
                "Empty buffer rejected in strict mode",
            ));
        }

        if len > self.max_size {
            return Err(SdkError::validation(
                error_codes::INPUT_TOO_LARGE,
                format!(
                    "Buffer size {} exceeds maximum allowed size {}",
                    len, self.max_size
                ),
            ));
        }

        Ok(())
    }
}

impl Validator for BufferValidator {
    type Input = Vec<u8>;
    type Output = Vec<u8>;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, SdkError> {
        self.check_len(input.len())?;
        Ok(input)
    }
}

// ================================================================================================
// UTF-8 VALIDATOR - String encoding validation
// ================================================================================================

/// **UTF-8 VALIDATOR**
///
/// **PURPOSE**: Converts a byte buffer into a `String` without copying.
#[derive(Debug, Clone, Default)]
pub struct Utf8Validator;

impl Utf8Validator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for Utf8Validator {
    type Input = Vec<u8>;
    type Output = String;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, SdkError> {
        String::from_utf8(input).map_err(|e| {
            SdkError::validation(
                error_codes::INVALID_UTF8,
                format!("Invalid UTF-8 sequence: {}", e.utf8_error()),
            )
        })
    }
}

// ================================================================================================
// NUMERIC RANGE VALIDATOR - Type-safe numeric validation
// ================================================================================================

/// **NUMERIC RANGE VALIDATOR**
///
/// **PURPOSE**: Validates numeric values against an inclusive range.
#[derive(Debug, Clone)]
pub struct NumericRangeValidator<T> {
    range: RangeInclusive<T>,
    type_name: &'static str,
}

impl<T> NumericRangeValidator<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    pub fn new(range: RangeInclusive<T>, type_name: &'static str) -> Self {
        Self { range, type_name }
    }
}

impl NumericRangeValidator<i64> {
    pub fn i64_range(min: i64, max: i64) -> NumericRangeValidator<i64> {
        NumericRangeValidator::new(min..=max, "i64")
    }
}

impl<T> Validator for NumericRangeValidator<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    type Input = T;
    type Output = T;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, SdkError> {
        if self.range.contains(&input) {
            Ok(input)
        } else {
            Err(SdkError::validation(
                error_codes::OUT_OF_RANGE,
                format!(
                    "Value {} outside valid {} range {}..={}",
                    input,
                    self.type_name,
                    self.range.start(),
                    self.range.end()
                ),
            ))
        }
    }
}

// ================================================================================================
// SCHEMA VALIDATOR - Field table driven normalization
// ================================================================================================

/// Largest accepted timestamp, 9999-12-31T23:59:59Z in epoch seconds.
pub const MAX_TIMESTAMP_SECS: i64 = 253_402_300_799;

/// **JSON TYPE ENUMERATION** - Used for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl JsonType {
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::String(_) => JsonType::String,
            JsonValue::Number(_) => JsonType::Number,
            JsonValue::Bool(_) => JsonType::Boolean,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
            JsonValue::Null => JsonType::Null,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::Array => "array",
            JsonType::Object => "object",
            JsonType::Null => "null",
        };
        f.write_str(name)
    }
}

/// Value kind of a schema field, with the coercion applied during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    NonEmptyString,
    /// JSON integer or a decimal string.
    Integer,
    /// JSON bool or the strings `true` / `false`.
    Boolean,
    /// Epoch seconds on the raw side, epoch milliseconds once normalized.
    Timestamp,
    Object(&'static [FieldSpec]),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::NonEmptyString => "non-empty string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Object(_) => "object",
        };
        f.write_str(name)
    }
}

/// One row of a field table: `(raw key, normalized key, kind, required)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub raw: &'static str,
    pub parsed: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(raw: &'static str, parsed: &'static str, kind: FieldKind) -> Self {
        Self {
            raw,
            parsed,
            kind,
            required: true,
        }
    }

    pub const fn optional(raw: &'static str, parsed: &'static str, kind: FieldKind) -> Self {
        Self {
            raw,
            parsed,
            kind,
            required: false,
        }
    }
}

/// **SCHEMA VALIDATOR**
///
/// **PURPOSE**: Checks a raw snake_case object against a field table and
/// returns the normalized camelCase object.
/// **GUARANTEE**: Keys outside the table never reach the output. Keys absent
/// from the input stay absent. `null` counts as absent.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    fields: &'static [FieldSpec],

    /// **STRICT MODE** - Reject unknown fields when enabled
    strict: bool,
}

impl SchemaValidator {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            strict: false,
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Inverse of `validate`: map a normalized object back to raw keys.
    ///
    /// Timestamps go back to epoch seconds. Keys outside the table are dropped.
    pub fn restore(&self, normalized: Map<String, JsonValue>) -> Map<String, JsonValue> {
        restore_object(self.fields, normalized)
    }

    fn normalize_object(
        &self,
        fields: &'static [FieldSpec],
        mut input: Map<String, JsonValue>,
        parent: Option<&str>,
    ) -> Result<Map<String, JsonValue>, SdkError> {
        let mut output = Map::new();

        for spec in fields {
            let path = field_path(parent, spec.raw);
            match input.remove(spec.raw) {
                None | Some(JsonValue::Null) => {
                    if spec.required {
                        return Err(SdkError::missing(path));
                    }
                }
                Some(value) => {
                    let value = self.coerce(spec.kind, value, &path)?;
                    output.insert(spec.parsed.to_string(), value);
                }
            }
        }

        // Whatever is left is outside the table
        for key in input.keys() {
            let path = field_path(parent, key);
            if self.strict {
                return Err(SdkError::validation(
                    error_codes::UNKNOWN_FIELD,
                    format!("Unknown field '{}' in strict mode", path),
                ));
            }
            log::debug!("dropping unknown field '{}'", path);
        }

        Ok(output)
    }

    fn coerce(&self, kind: FieldKind, value: JsonValue, path: &str) -> Result<JsonValue, SdkError> {
        match kind {
            FieldKind::String => match value {
                JsonValue::String(_) => Ok(value),
                other => Err(unexpected_type(path, kind, &other)),
            },
            FieldKind::NonEmptyString => match value {
                JsonValue::String(ref s) if s.is_empty() => Err(SdkError::validation(
                    error_codes::INVALID_INPUT,
                    format!("Field '{}' must not be empty", path),
                )),
                JsonValue::String(_) => Ok(value),
                other => Err(unexpected_type(path, kind, &other)),
            },
            FieldKind::Integer => integer_value(&value)
                .map(JsonValue::from)
                .ok_or_else(|| unexpected_type(path, kind, &value)),
            FieldKind::Boolean => match value {
                JsonValue::Bool(_) => Ok(value),
                JsonValue::String(ref s) if s == "true" => Ok(JsonValue::Bool(true)),
                JsonValue::String(ref s) if s == "false" => Ok(JsonValue::Bool(false)),
                other => Err(unexpected_type(path, kind, &other)),
            },
            FieldKind::Timestamp => {
                let secs =
                    integer_value(&value).ok_or_else(|| unexpected_type(path, kind, &value))?;
                let secs = NumericRangeValidator::i64_range(0, MAX_TIMESTAMP_SECS)
                    .validate(secs)
                    .map_err(|e| prefix_field(path, e))?;
                Ok(JsonValue::from(secs * 1000))
            }
            FieldKind::Object(fields) => match value {
                JsonValue::Object(map) => Ok(JsonValue::Object(self.normalize_object(
                    fields,
                    map,
                    Some(path),
                )?)),
                other => Err(unexpected_type(path, kind, &other)),
            },
        }
    }
}

impl Validator for SchemaValidator {
    type Input = Map<String, JsonValue>;
    type Output = Map<String, JsonValue>;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, SdkError> {
        self.normalize_object(self.fields, input, None)
    }
}

fn restore_object(
    fields: &'static [FieldSpec],
    mut normalized: Map<String, JsonValue>,
) -> Map<String, JsonValue> {
    let mut output = Map::new();
    for spec in fields {
        let value = match normalized.remove(spec.parsed) {
            None | Some(JsonValue::Null) => continue,
            Some(value) => value,
        };
        let value = match (spec.kind, value) {
            (FieldKind::Timestamp, JsonValue::Number(ms)) => match ms.as_i64() {
                Some(ms) => JsonValue::from(ms.div_euclid(1000)),
                None => JsonValue::Number(ms),
            },
            (FieldKind::Object(nested), JsonValue::Object(map)) => {
                JsonValue::Object(restore_object(nested, map))
            }
            (_, value) => value,
        };
        output.insert(spec.raw.to_string(), value);
    }
    output
}

fn integer_value(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn field_path(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) => format!("{}.{}", parent, key),
        None => key.to_string(),
    }
}

fn unexpected_type(path: &str, expected: FieldKind, found: &JsonValue) -> SdkError {
    SdkError::validation(
        error_codes::UNEXPECTED_TYPE,
        format!(
            "Field '{}' has invalid type, expected {}, found {}",
            path,
            expected,
            JsonType::of(found)
        ),
    )
}

fn prefix_field(path: &str, err: SdkError) -> SdkError {
    match err {
        SdkError::Validation { code, message } => SdkError::Validation {
            code,
            message: format!("Field '{}': {}", path, message),
        },
        other => other,
    }
}

// ================================================================================================
// UNIT TESTS
// ================================================================================================
