//! Error normalization.
//!
//! Each level produces `{ "type": <tag>, ...payload }` and is spread into the
//! level above it, so the innermost tag ends up in `type`:
//! `ProviderError(NoPermission)` becomes `{"type": "NoPermission"}`.

use serde_json::{Map, Value, json};

use crate::types::{HttpOutcallError, ProviderError, RpcError, ValidationError};
use crate::utils::{insert_some, tagged};

pub fn normalize_error(error: &RpcError) -> Value {
    match error {
        RpcError::JsonRpcError(error) => tagged(
            "JsonRpcError",
            json!({ "code": error.code, "message": error.message }),
        ),
        RpcError::ProviderError(error) => {
            tagged("ProviderError", normalize_provider_error(error))
        }
        RpcError::ValidationError(error) => {
            tagged("ValidationError", normalize_validation_error(error))
        }
        RpcError::HttpOutcallError(error) => {
            tagged("HttpOutcallError", normalize_http_outcall_error(error))
        }
    }
}

pub fn normalize_provider_error(error: &ProviderError) -> Value {
    match error {
        ProviderError::TooFewCycles { expected, received } => tagged(
            "TooFewCycles",
            json!({ "expected": Value::from(expected), "received": Value::from(received) }),
        ),
        ProviderError::MissingRequiredProvider => tagged("MissingRequiredProvider", Value::Null),
        ProviderError::ProviderNotFound => tagged("ProviderNotFound", Value::Null),
        ProviderError::NoPermission => tagged("NoPermission", Value::Null),
    }
}

pub fn normalize_validation_error(error: &ValidationError) -> Value {
    match error {
        ValidationError::CredentialPathNotAllowed => {
            tagged("CredentialPathNotAllowed", Value::Null)
        }
        ValidationError::HostNotAllowed(host) => tagged("HostNotAllowed", json!({ "host": host })),
        ValidationError::CredentialHeaderNotAllowed => {
            tagged("CredentialHeaderNotAllowed", Value::Null)
        }
        ValidationError::UrlParseError(message) => {
            tagged("UrlParseError", json!({ "message": message }))
        }
        ValidationError::Custom(message) => tagged("Custom", json!({ "message": message })),
        ValidationError::InvalidHex(message) => tagged("InvalidHex", json!({ "message": message })),
    }
}

pub fn normalize_http_outcall_error(error: &HttpOutcallError) -> Value {
    match error {
        HttpOutcallError::IcError { code, message } => {
            // Reject codes keep their variant shape
            let mut code_variant = Map::new();
            code_variant.insert(code.as_str().to_string(), Value::Null);
            tagged(
                "IcError",
                json!({ "code": Value::Object(code_variant), "message": message }),
            )
        }
        HttpOutcallError::InvalidHttpJsonRpcResponse {
            status,
            body,
            parsing_error,
        } => {
            let mut payload = Map::new();
            payload.insert("status".to_string(), json!(status));
            payload.insert("body".to_string(), json!(body));
            insert_some(
                &mut payload,
                "parsingError",
                parsing_error.to_json(|e| json!(e)),
            );
            tagged("InvalidHttpJsonRpcResponse", Value::Object(payload))
        }
    }
}
