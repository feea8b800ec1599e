use serde::{
    Deserialize, Deserializer,
    de::{self, DeserializeOwned},
};
use serde_json::Value;

use super::{Nullable, Quantity};

/// Error returned by the EVM RPC canister for a single provider call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum RpcError {
    JsonRpcError(JsonRpcError),
    ProviderError(#[serde(deserialize_with = "empty_record_as_unit")] ProviderError),
    ValidationError(#[serde(deserialize_with = "empty_record_as_unit")] ValidationError),
    HttpOutcallError(HttpOutcallError),
}

/// Decode a variant enum whose payload-less cases may arrive as `{"Tag": {}}`
/// besides `{"Tag": null}` and `"Tag"`.
fn empty_record_as_unit<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let mut value = Value::deserialize(deserializer)?;
    if let Value::Object(variant) = &mut value {
        if variant.len() == 1 {
            for payload in variant.values_mut() {
                if payload.as_object().is_some_and(|fields| fields.is_empty()) {
                    *payload = Value::Null;
                }
            }
        }
    }
    T::deserialize(value).map_err(de::Error::custom)
}

/// Error object from the upstream JSON-RPC response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum ProviderError {
    /// Attached cycles did not cover the call
    TooFewCycles {
        expected: Quantity,
        received: Quantity,
    },
    MissingRequiredProvider,
    ProviderNotFound,
    NoPermission,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum ValidationError {
    CredentialPathNotAllowed,
    HostNotAllowed(String),
    CredentialHeaderNotAllowed,
    UrlParseError(String),
    Custom(String),
    InvalidHex(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum HttpOutcallError {
    /// The management canister rejected the outcall
    IcError {
        #[serde(deserialize_with = "empty_record_as_unit")]
        code: RejectionCode,
        message: String,
    },
    /// The provider answered with something that is not a JSON-RPC response
    InvalidHttpJsonRpcResponse {
        status: u16,
        body: String,
        #[serde(default, rename = "parsingError")]
        parsing_error: Nullable<String>,
    },
}

/// Reject code of a failed inter-canister or management canister call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RejectionCode {
    NoError,
    SysFatal,
    SysTransient,
    DestinationInvalid,
    CanisterReject,
    CanisterError,
    Unknown,
}

impl RejectionCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoError => "NoError",
            Self::SysFatal => "SysFatal",
            Self::SysTransient => "SysTransient",
            Self::DestinationInvalid => "DestinationInvalid",
            Self::CanisterReject => "CanisterReject",
            Self::CanisterError => "CanisterError",
            Self::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_variants_accept_null_payload_and_bare_string() {
        let error: ProviderError = serde_json::from_value(json!({"NoPermission": null})).unwrap();
        assert_eq!(error, ProviderError::NoPermission);

        let error: ProviderError = serde_json::from_value(json!("ProviderNotFound")).unwrap();
        assert_eq!(error, ProviderError::ProviderNotFound);
    }

    #[test]
    fn test_decode_too_few_cycles() {
        let error: RpcError = serde_json::from_value(json!({
            "ProviderError": {
                "TooFewCycles": {"expected": "1000000000", "received": 10}
            }
        }))
        .unwrap();

        assert_eq!(
            error,
            RpcError::ProviderError(ProviderError::TooFewCycles {
                expected: Quantity::Text("1000000000".to_string()),
                received: Quantity::from(10),
            })
        );
    }

    #[test]
    fn test_decode_http_outcall_errors() {
        let error: HttpOutcallError = serde_json::from_value(json!({
            "IcError": {"code": {"SysTransient": null}, "message": "timeout"}
        }))
        .unwrap();
        assert_eq!(
            error,
            HttpOutcallError::IcError {
                code: RejectionCode::SysTransient,
                message: "timeout".to_string(),
            }
        );

        let error: HttpOutcallError = serde_json::from_value(json!({
            "InvalidHttpJsonRpcResponse": {"status": 502, "body": "Bad Gateway"}
        }))
        .unwrap();
        assert_eq!(
            error,
            HttpOutcallError::InvalidHttpJsonRpcResponse {
                status: 502,
                body: "Bad Gateway".to_string(),
                parsing_error: Nullable::Missing,
            }
        );

        let error: HttpOutcallError = serde_json::from_value(json!({
            "InvalidHttpJsonRpcResponse": {"status": 200, "body": "", "parsingError": null}
        }))
        .unwrap();
        assert!(matches!(
            error,
            HttpOutcallError::InvalidHttpJsonRpcResponse {
                parsing_error: Nullable::Null,
                ..
            }
        ));
    }

    #[test]
    fn test_unit_variants_accept_empty_record() {
        let cases = [
            (
                json!({"ProviderError": {"NoPermission": {}}}),
                RpcError::ProviderError(ProviderError::NoPermission),
            ),
            (
                json!({"ProviderError": {"MissingRequiredProvider": null}}),
                RpcError::ProviderError(ProviderError::MissingRequiredProvider),
            ),
            (
                json!({"ValidationError": {"CredentialPathNotAllowed": {}}}),
                RpcError::ValidationError(ValidationError::CredentialPathNotAllowed),
            ),
            (
                json!({"HttpOutcallError": {"IcError": {"code": {"SysFatal": {}}, "message": "m"}}}),
                RpcError::HttpOutcallError(HttpOutcallError::IcError {
                    code: RejectionCode::SysFatal,
                    message: "m".to_string(),
                }),
            ),
        ];

        for (input, expected) in cases {
            let error: RpcError = serde_json::from_value(input.clone()).unwrap();
            assert_eq!(error, expected, "{}", input);
        }
    }

    #[test]
    fn test_empty_record_does_not_satisfy_payload_variants() {
        for input in [
            json!({"ProviderError": {"TooFewCycles": {}}}),
            json!({"ValidationError": {"HostNotAllowed": {}}}),
            json!({"ProviderError": {"NoPermission": {"extra": 1}}}),
        ] {
            assert!(
                serde_json::from_value::<RpcError>(input.clone()).is_err(),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_decode_validation_error_with_payload() {
        let error: ValidationError =
            serde_json::from_value(json!({"HostNotAllowed": "evil.example"})).unwrap();
        assert_eq!(
            error,
            ValidationError::HostNotAllowed("evil.example".to_string())
        );

        assert!(serde_json::from_value::<ValidationError>(json!({"HostNotAllowed": 1})).is_err());
    }
}
