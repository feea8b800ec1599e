use serde_json::{Map, Value, json};

use crate::types::{RpcApi, ServiceTag};
use crate::utils::{insert_some, tagged};

pub fn normalize_service_tag(service: &ServiceTag) -> Value {
    match service {
        ServiceTag::EthSepolia(service) => tagged("EthSepolia", json!({ "service": service })),
        ServiceTag::Custom(api) => tagged("Custom", normalize_rpc_api(api)),
        ServiceTag::EthMainnet(service) => tagged("EthMainnet", json!({ "service": service })),
        ServiceTag::Chain(chain_id) => {
            tagged("Chain", json!({ "chainId": Value::from(chain_id) }))
        }
        ServiceTag::Provider(provider_id) => {
            tagged("Provider", json!({ "providerId": Value::from(provider_id) }))
        }
    }
}

/// Project a custom endpoint to `{url, headers}`
pub fn normalize_rpc_api(api: &RpcApi) -> Value {
    let mut object = Map::new();
    object.insert("url".to_string(), Value::String(api.url.clone()));
    insert_some(
        &mut object,
        "headers",
        api.headers.to_json(|headers| {
            headers
                .iter()
                .map(|header| json!({ "name": header.name, "value": header.value }))
                .collect()
        }),
    );
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HttpHeader, Nullable, Quantity};

    #[test]
    fn test_normalize_provider_selections() {
        assert_eq!(
            normalize_service_tag(&ServiceTag::EthMainnet(json!({}))),
            json!({"type": "EthMainnet", "service": {}})
        );
        assert_eq!(
            normalize_service_tag(&ServiceTag::EthSepolia(json!({"Ankr": null}))),
            json!({"type": "EthSepolia", "service": {"Ankr": null}})
        );
    }

    #[test]
    fn test_normalize_ids() {
        assert_eq!(
            normalize_service_tag(&ServiceTag::Chain(Quantity::from(42161))),
            json!({"type": "Chain", "chainId": 42161})
        );
        assert_eq!(
            normalize_service_tag(&ServiceTag::Provider(Quantity::Text("4".to_string()))),
            json!({"type": "Provider", "providerId": "4"})
        );
    }

    #[test]
    fn test_normalize_custom() {
        let api = RpcApi {
            url: "https://rpc.example.org".to_string(),
            headers: Nullable::Present(vec![HttpHeader {
                name: "X-Api-Key".to_string(),
                value: "secret".to_string(),
            }]),
        };
        assert_eq!(
            normalize_service_tag(&ServiceTag::Custom(api)),
            json!({
                "type": "Custom",
                "url": "https://rpc.example.org",
                "headers": [{"name": "X-Api-Key", "value": "secret"}]
            })
        );

        let api = RpcApi {
            url: "https://rpc.example.org".to_string(),
            headers: Nullable::Missing,
        };
        assert_eq!(
            normalize_service_tag(&ServiceTag::Custom(api)),
            json!({"type": "Custom", "url": "https://rpc.example.org"})
        );

        let api = RpcApi {
            url: "u".to_string(),
            headers: Nullable::Null,
        };
        assert_eq!(
            normalize_service_tag(&ServiceTag::Custom(api)),
            json!({"type": "Custom", "url": "u", "headers": null})
        );
    }
}
