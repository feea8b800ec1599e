use serde::Deserialize;
use serde_json::Value;

use super::{Nullable, Quantity};

/// The provider a single response in an inconsistent result came from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum ServiceTag {
    /// Sepolia provider selection, passed through as received
    EthSepolia(Value),
    Custom(RpcApi),
    /// Mainnet provider selection, passed through as received
    EthMainnet(Value),
    Chain(Quantity),
    Provider(Quantity),
}

/// A custom JSON-RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcApi {
    pub url: String,
    #[serde(default)]
    pub headers: Nullable<Vec<HttpHeader>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpHeader {
    pub name: String,
    pub value: String,
}
