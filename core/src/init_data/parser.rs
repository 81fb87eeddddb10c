use std::str::FromStr;

use serde_json::Value as JsonValue;

use crate::config::ParseOptions;
use crate::errors::SdkError;
use crate::init_data::schema::INIT_DATA_FIELDS;
use crate::init_data::types::{InitData, RawInitData};
use crate::query::parse_query_string;
use crate::validation::{
    error_codes, validate_input_size, BufferValidator, SchemaValidator, Utf8Validator, Validator,
};

/// Parse already-decoded init data with default options.
///
/// Fails with `SdkError::MissingField` when `auth_date` or `hash` is absent.
/// Keys outside the schema are dropped.
pub fn parse(raw: &RawInitData) -> Result<InitData, SdkError> {
    parse_with(raw, &ParseOptions::default())
}

pub fn parse_with(raw: &RawInitData, options: &ParseOptions) -> Result<InitData, SdkError> {
    log::trace!("parsing init data with {} raw keys", raw.len());

    let normalized = SchemaValidator::new(INIT_DATA_FIELDS)
        .with_strict(options.strict)
        .validate(raw.as_map().clone())?;

    serde_json::from_value(JsonValue::Object(normalized)).map_err(|e| {
        SdkError::validation(
            error_codes::INVALID_INPUT,
            format!("Normalized init data rejected: {}", e),
        )
    })
}

/// Parse init data straight from its query string form.
pub fn parse_query(query: &str) -> Result<InitData, SdkError> {
    parse_query_with(query, &ParseOptions::default())
}

pub fn parse_query_with(query: &str, options: &ParseOptions) -> Result<InitData, SdkError> {
    log::trace!("parsing init data query of {} bytes", query.len());

    validate_input_size(query.as_bytes(), options.max_input_len)?;
    let params = parse_query_string(query)?;
    let raw = RawInitData::from_query(&params)?;
    parse_with(&raw, options)
}

/// Parse init data from raw bytes, checking size and encoding first.
pub fn parse_bytes(data: &[u8], options: &ParseOptions) -> Result<InitData, SdkError> {
    let data = BufferValidator::new(options.max_input_len).validate(data.to_vec())?;
    let query = Utf8Validator::new().validate(data)?;
    parse_query_with(&query, options)
}

impl FromStr for InitData {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_query(s)
    }
}

impl TryFrom<&RawInitData> for InitData {
    type Error = SdkError;

    fn try_from(raw: &RawInitData) -> Result<Self, Self::Error> {
        parse(raw)
    }
}
