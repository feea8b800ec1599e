use serde::{Deserialize, Deserializer, Serialize};

/// Subnet the calling canister runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubnetType {
    #[default]
    Standard,
    Fiduciary,
}

impl SubnetType {
    /// Anything other than `fiduciary` is a standard subnet.
    pub fn from_name(s: &str) -> Self {
        match s {
            "fiduciary" => SubnetType::Fiduciary,
            _ => SubnetType::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubnetType::Standard => "standard",
            SubnetType::Fiduciary => "fiduciary",
        }
    }
}

impl<'de> Deserialize<'de> for SubnetType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.as_deref().map(Self::from_name).unwrap_or_default())
    }
}

impl Serialize for SubnetType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-node pricing of a registered provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCost {
    pub cycles_per_call: u128,
    pub cycles_per_message_byte: u128,
}

/// Target of an outbound RPC call, as described by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    #[serde(default)]
    pub api: Option<String>,

    #[serde(default)]
    pub provider: Option<ProviderCost>,

    #[serde(default)]
    pub subnet_type: SubnetType,
}

/// The part of a [`ServiceDescriptor`] that decides how a call is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTarget<'a> {
    Api(&'a str),
    Provider(&'a ProviderCost),
}

impl ServiceDescriptor {
    pub fn for_api(api: impl Into<String>, subnet_type: SubnetType) -> Self {
        Self {
            api: Some(api.into()),
            provider: None,
            subnet_type,
        }
    }

    pub fn for_provider(provider: ProviderCost, subnet_type: SubnetType) -> Self {
        Self {
            api: None,
            provider: Some(provider),
            subnet_type,
        }
    }

    /// Resolve which target prices this call.
    ///
    /// A non-empty `api` wins over `provider`; an empty `api` counts as absent.
    pub fn target(&self) -> Option<ServiceTarget<'_>> {
        match (self.api.as_deref(), self.provider.as_ref()) {
            (Some(api), _) if !api.is_empty() => Some(ServiceTarget::Api(api)),
            (_, Some(provider)) => Some(ServiceTarget::Provider(provider)),
            _ => None,
        }
    }
}
