use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::errors::SdkError;
use crate::init_data::schema::{top_level_field, INIT_DATA_FIELDS};
use crate::query::{to_query_string, QueryParams};
use crate::validation::{error_codes, FieldKind, SchemaValidator};

/// Init data in its wire form: snake_case keys, untyped values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInitData(Map<String, JsonValue>);

impl RawInitData {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert, handy for assembling fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, JsonValue> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, JsonValue> {
        self.0
    }

    /// Build the raw form from decoded query pairs.
    ///
    /// Values of object fields (`chat`, `user`, `receiver`) are JSON-decoded,
    /// every other value stays a string. The first occurrence of a key wins.
    pub fn from_query(params: &QueryParams) -> Result<Self, SdkError> {
        let mut raw = Map::new();
        for (key, value) in params.iter() {
            if raw.contains_key(key) {
                continue;
            }
            let value = match top_level_field(key).map(|spec| spec.kind) {
                Some(FieldKind::Object(_)) => serde_json::from_str(value).map_err(|e| {
                    SdkError::validation(
                        error_codes::INVALID_JSON,
                        format!("Field '{}' is not valid JSON: {}", key, e),
                    )
                })?,
                _ => JsonValue::String(value.to_string()),
            };
            raw.insert(key.to_string(), value);
        }
        Ok(Self(raw))
    }

    /// Encode into a query string. Objects are JSON-encoded.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<(&str, String)> = self
            .0
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.as_str(), value)
            })
            .collect();
        to_query_string(pairs.iter().map(|(k, v)| (*k, v.as_str())))
    }
}

impl From<Map<String, JsonValue>> for RawInitData {
    fn from(map: Map<String, JsonValue>) -> Self {
        Self(map)
    }
}

impl TryFrom<JsonValue> for RawInitData {
    type Error = SdkError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Object(map) => Ok(Self(map)),
            other => Err(SdkError::validation(
                error_codes::UNEXPECTED_TYPE,
                format!("Expected JSON object for init data, found {}", other),
            )),
        }
    }
}

/// Parsed init data. Serializes to the camelCase shape with `authDate` in
/// epoch milliseconds; absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitData {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub auth_date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_after: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<Chat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_instance: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<String>,

    pub hash: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_param: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl InitData {
    /// Map back to the snake_case wire form. `auth_date` becomes epoch seconds.
    pub fn to_raw(&self) -> Result<RawInitData, SdkError> {
        match serde_json::to_value(self) {
            Ok(JsonValue::Object(map)) => Ok(RawInitData(
                SchemaValidator::new(INIT_DATA_FIELDS).restore(map),
            )),
            Ok(other) => Err(SdkError::validation(
                error_codes::UNEXPECTED_TYPE,
                format!("Init data serialized to {}", other),
            )),
            Err(e) => Err(SdkError::validation(
                error_codes::INVALID_JSON,
                format!("Init data could not be serialized: {}", e),
            )),
        }
    }

    pub fn to_query_string(&self) -> Result<String, SdkError> {
        Ok(self.to_raw()?.to_query_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_to_attachment_menu: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_write_to_pm: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}
