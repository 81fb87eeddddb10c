//! Field tables for init data.
//!
//! Each row maps a raw snake_case key to its camelCase name. The same tables
//! drive parsing (`SchemaValidator::validate`) and serialization back to the
//! wire form (`SchemaValidator::restore`).

use crate::validation::{FieldKind, FieldSpec};

pub const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional(
        "added_to_attachment_menu",
        "addedToAttachmentMenu",
        FieldKind::Boolean,
    ),
    FieldSpec::optional("allows_write_to_pm", "allowsWriteToPm", FieldKind::Boolean),
    FieldSpec::required("first_name", "firstName", FieldKind::String),
    FieldSpec::required("id", "id", FieldKind::Integer),
    FieldSpec::optional("is_bot", "isBot", FieldKind::Boolean),
    FieldSpec::optional("is_premium", "isPremium", FieldKind::Boolean),
    FieldSpec::optional("last_name", "lastName", FieldKind::String),
    FieldSpec::optional("language_code", "languageCode", FieldKind::String),
    FieldSpec::optional("photo_url", "photoUrl", FieldKind::String),
    FieldSpec::optional("username", "username", FieldKind::String),
];

pub const CHAT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("id", "id", FieldKind::Integer),
    FieldSpec::optional("photo_url", "photoUrl", FieldKind::String),
    FieldSpec::required("type", "type", FieldKind::String),
    FieldSpec::required("title", "title", FieldKind::String),
    FieldSpec::optional("username", "username", FieldKind::String),
];

pub const INIT_DATA_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("auth_date", "authDate", FieldKind::Timestamp),
    FieldSpec::optional("can_send_after", "canSendAfter", FieldKind::Integer),
    FieldSpec::optional("chat", "chat", FieldKind::Object(CHAT_FIELDS)),
    FieldSpec::optional("chat_instance", "chatInstance", FieldKind::String),
    FieldSpec::optional("chat_type", "chatType", FieldKind::String),
    FieldSpec::required("hash", "hash", FieldKind::NonEmptyString),
    FieldSpec::optional("query_id", "queryId", FieldKind::String),
    FieldSpec::optional("receiver", "receiver", FieldKind::Object(USER_FIELDS)),
    FieldSpec::optional("signature", "signature", FieldKind::String),
    FieldSpec::optional("start_param", "startParam", FieldKind::String),
    FieldSpec::optional("user", "user", FieldKind::Object(USER_FIELDS)),
];

/// Look up a top-level row by its raw key.
pub fn top_level_field(raw: &str) -> Option<&'static FieldSpec> {
    INIT_DATA_FIELDS.iter().find(|spec| spec.raw == raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unique(fields: &[FieldSpec]) {
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert_ne!(a.raw, b.raw, "duplicate raw key");
                assert_ne!(a.parsed, b.parsed, "duplicate parsed key");
            }
        }
    }

    #[test]
    fn test_tables_have_unique_keys() {
        assert_unique(INIT_DATA_FIELDS);
        assert_unique(USER_FIELDS);
        assert_unique(CHAT_FIELDS);
    }

    #[test]
    fn test_parsed_keys_have_no_underscores() {
        for spec in INIT_DATA_FIELDS.iter().chain(USER_FIELDS).chain(CHAT_FIELDS) {
            assert!(!spec.parsed.contains('_'), "{} is not camelCase", spec.parsed);
        }
    }

    #[test]
    fn test_required_top_level_fields() {
        let required: Vec<_> = INIT_DATA_FIELDS
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.raw)
            .collect();
        assert_eq!(required, vec!["auth_date", "hash"]);
    }

    #[test]
    fn test_top_level_field_lookup() {
        assert_eq!(
            top_level_field("user").map(|spec| spec.kind),
            Some(FieldKind::Object(USER_FIELDS))
        );
        assert!(top_level_field("first_name").is_none());
    }
}
