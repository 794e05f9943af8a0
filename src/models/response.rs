// src/models/response.rs
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::error::{Error, Result};

/// Turns a `success: false` body into `Error::Api`. Bodies without a
/// `success` flag are passed through.
pub fn check_success(body: &Value) -> Result<()> {
    match body.get("success").and_then(Value::as_bool) {
        Some(false) => Err(Error::Api(error_message(body).unwrap_or_else(|| "unknown error".to_string()))),
        _ => Ok(()),
    }
}

/// Checks the envelope and decodes its `data` field.
pub fn into_data<T: DeserializeOwned>(mut body: Value) -> Result<T> {
    check_success(&body)?;
    let data = body
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null);
    Ok(serde_json::from_value(data)?)
}

pub fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn into_data_extracts_payload() {
        let names: Vec<String> = into_data(json!({"success": true, "data": ["alice", "bob"]})).unwrap();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn failed_envelope_becomes_api_error() {
        let result = into_data::<Value>(json!({"success": false, "error": "Server not found", "data": null}));
        match result {
            Err(Error::Api(msg)) => assert_eq!(msg, "Server not found"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_data_is_a_decode_error() {
        let result = into_data::<Vec<String>>(json!({"success": true}));
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn body_without_success_flag_passes() {
        assert!(check_success(&json!({"data": 1})).is_ok());
    }
}
