//! Envelope unwrapping for catalog responses
//!
//! Every catalog response wraps its payload in a single-key object such as
//! `{"content": {...}}`. The helpers here pull the payload out and run a typed
//! deserialization over it. Any missing or mistyped field anywhere in the payload
//! aborts the whole decode.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Error type for response decoding
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to decode `{envelope}` response: {source}")]
    Json {
        envelope: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response is not a JSON object")]
    NotAnObject,

    #[error("Response is missing the `{0}` envelope")]
    MissingEnvelope(&'static str),

    #[error("Invalid reader page key `{0}`")]
    InvalidPageKey(String),

    #[error("Reader page {0} is missing")]
    MissingPage(usize),
}

/// Parse a response body into its top-level object
pub fn parse_object(body: &str) -> Result<Map<String, Value>, DecodeError> {
    let value: Value = serde_json::from_str(body).map_err(|source| DecodeError::Json {
        envelope: "response",
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::NotAnObject),
    }
}

/// Remove `key` from a parsed response and deserialize its value
pub fn take_envelope<T: DeserializeOwned>(
    object: &mut Map<String, Value>,
    key: &'static str,
) -> Result<T, DecodeError> {
    let payload = object
        .remove(key)
        .ok_or(DecodeError::MissingEnvelope(key))?;

    serde_json::from_value(payload).map_err(|source| DecodeError::Json {
        envelope: key,
        source,
    })
}

/// Decode the payload stored under the single envelope `key`
pub fn unwrap_envelope<T: DeserializeOwned>(body: &str, key: &'static str) -> Result<T, DecodeError> {
    let mut object = parse_object(body)?;
    take_envelope(&mut object, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        value: u64,
    }

    #[test]
    fn test_unwrap_envelope() {
        let payload: Payload = unwrap_envelope(r#"{"item":{"value":7}}"#, "item").unwrap();
        assert_eq!(payload, Payload { value: 7 });
    }

    #[test]
    fn test_unwrap_envelope_ignores_siblings() {
        let payload: Payload =
            unwrap_envelope(r#"{"total":3,"item":{"value":7}}"#, "item").unwrap();
        assert_eq!(payload.value, 7);
    }

    #[test]
    fn test_missing_envelope() {
        let result: Result<Payload, _> = unwrap_envelope(r#"{"other":{}}"#, "item");
        assert!(matches!(result, Err(DecodeError::MissingEnvelope("item"))));
    }

    #[test]
    fn test_malformed_json() {
        let result: Result<Payload, _> = unwrap_envelope("{not json", "item");
        assert!(matches!(result, Err(DecodeError::Json { .. })));
    }

    #[test]
    fn test_top_level_array_is_rejected() {
        let result: Result<Payload, _> = unwrap_envelope("[1, 2]", "item");
        assert!(matches!(result, Err(DecodeError::NotAnObject)));
    }

    #[test]
    fn test_mistyped_field_names_the_envelope() {
        let result: Result<Payload, _> = unwrap_envelope(r#"{"item":{"value":"7"}}"#, "item");
        let err = result.unwrap_err();
        assert!(matches!(err, DecodeError::Json { envelope: "item", .. }));
        assert!(err.to_string().contains("`item`"));
    }

    #[test]
    fn test_missing_field_is_reported() {
        let result: Result<Payload, _> = unwrap_envelope(r#"{"item":{}}"#, "item");
        assert!(result.unwrap_err().to_string().contains("missing field `value`"));
    }
}
