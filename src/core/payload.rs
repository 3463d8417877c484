//! Normalisation of list payloads returned by the orchestrator

use super::error::FetchError;
use serde_json::Value;

/// Extract the record array from a list payload
///
/// The orchestrator answers either `{"<collectionKey>": [...], ...}` or a bare
/// array. Both shapes normalise to the same vector. Anything else is rejected
/// so that no garbage ends up in a view.
pub fn normalize_collection(payload: Value, collection_key: &str) -> Result<Vec<Value>, FetchError> {
    match payload {
        Value::Array(items) => Ok(items),
        Value::Object(mut body) => match body.remove(collection_key) {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(FetchError::Decode(format!(
                "'{}' is {} rather than an array",
                collection_key,
                json_kind(&other)
            ))),
            None => Err(FetchError::Decode(format!(
                "object payload has no '{}' array",
                collection_key
            ))),
        },
        other => Err(FetchError::Decode(format!(
            "expected an object or array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrapped_and_bare_shapes_normalise_identically() {
        let records = json!([{"id": 1, "status": "completed"}, {"id": 2, "status": "failed"}]);
        let wrapped = json!({"workflows": records.clone(), "total": 2});

        let from_wrapped = normalize_collection(wrapped, "workflows").expect("wrapped");
        let from_bare = normalize_collection(records, "workflows").expect("bare");
        assert_eq!(from_wrapped, from_bare);
        assert_eq!(from_bare.len(), 2);
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let err = normalize_collection(json!({"error": "boom"}), "claims").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_non_array_collection_is_rejected() {
        let err = normalize_collection(json!({"claims": {"id": 1}}), "claims").unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_scalar_payload_is_rejected() {
        assert!(normalize_collection(json!("claims"), "claims").is_err());
        assert!(normalize_collection(Value::Null, "claims").is_err());
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(normalize_collection(json!([]), "claims").expect("empty").is_empty());
        assert!(
            normalize_collection(json!({"claims": []}), "claims")
                .expect("empty")
                .is_empty()
        );
    }
}
