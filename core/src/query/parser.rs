use crate::errors::SdkError;
use crate::query::types::QueryParams;
use crate::validation::error_codes;

/// Decode an `application/x-www-form-urlencoded` string.
///
/// A leading `?` is ignored, empty segments are skipped and a key without
/// `=` gets an empty value.
pub fn parse_query_string(query: &str) -> Result<QueryParams, SdkError> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

/// Encode pairs back into a query string, preserving their order.
pub fn to_query_string<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn encode_component(component: &str) -> String {
    urlencoding::encode(component).into_owned()
}

fn decode_component(component: &str) -> Result<String, SdkError> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| {
            SdkError::validation(
                error_codes::INVALID_ENCODING,
                format!("Invalid percent-encoding in '{}': {}", component, e),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_string_simple() {
        let params = parse_query_string("key1=value1&key2=value2").unwrap();
        assert_eq!(params.get("key1"), Some("value1"));
        assert_eq!(params.get("key2"), Some("value2"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_query_string_encoded() {
        let params = parse_query_string("name=John%20Doe&city=New+York").unwrap();
        assert_eq!(params.get("name"), Some("John Doe"));
        assert_eq!(params.get("city"), Some("New York"));
    }

    #[test]
    fn test_parse_query_string_json_value() {
        let params =
            parse_query_string("user=%7B%22id%22%3A333%2C%22first_name%22%3A%22Johny%22%7D")
                .unwrap();
        assert_eq!(params.get("user"), Some(r#"{"id":333,"first_name":"Johny"}"#));
    }

    #[test]
    fn test_parse_query_string_empty() {
        assert!(parse_query_string("").unwrap().is_empty());
        assert!(parse_query_string("?").unwrap().is_empty());
    }

    #[test]
    fn test_parse_query_string_leading_question_mark() {
        let params = parse_query_string("?hash=abcd").unwrap();
        assert_eq!(params.get("hash"), Some("abcd"));
    }

    #[test]
    fn test_parse_query_string_key_without_value() {
        let params = parse_query_string("flag&hash=abcd").unwrap();
        assert_eq!(params.get("flag"), Some(""));
        assert!(params.contains_key("flag"));
    }

    #[test]
    fn test_parse_query_string_duplicate_key_first_wins() {
        let params = parse_query_string("hash=first&hash=second").unwrap();
        assert_eq!(params.get("hash"), Some("first"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_query_string_invalid_utf8() {
        let result = parse_query_string("hash=%FF%FE");
        match result {
            Err(SdkError::Validation { code, .. }) => {
                assert_eq!(code, error_codes::INVALID_ENCODING)
            }
            other => panic!("Expected encoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_to_query_string_encodes() {
        let query = to_query_string(vec![("start_param", "a b&c"), ("hash", "x")]);
        assert_eq!(query, "start_param=a%20b%26c&hash=x");

        let params = parse_query_string(&query).unwrap();
        assert_eq!(params.get("start_param"), Some("a b&c"));
    }
}
