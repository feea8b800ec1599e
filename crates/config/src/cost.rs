use crate::ConfigError;
use serde::Deserialize;

/// Parameters of the HTTPS outcall cost model.
///
/// Defaults are the published per-call and per-byte cycle prices on a
/// 13-node application subnet and a 34-node fiduciary subnet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CostConfig {
    /// Flat cycles charged per outcall
    ///
    /// Env: ERH_COST_BASE_CYCLES
    /// Default: 3000000
    #[serde(default = "default_base_cycles")]
    pub base_cycles: u64,

    /// Cycles charged per node for each request
    ///
    /// Env: ERH_COST_PER_NODE_REQUEST_CYCLES
    /// Default: 60000
    #[serde(default = "default_per_node_request_cycles")]
    pub per_node_request_cycles: u64,

    /// Cycles per ingress byte
    ///
    /// Env: ERH_COST_REQUEST_BYTE_CYCLES
    /// Default: 400
    #[serde(default = "default_request_byte_cycles")]
    pub request_byte_cycles: u64,

    /// Cycles per byte of the maximum response size
    ///
    /// Env: ERH_COST_RESPONSE_BYTE_CYCLES
    /// Default: 800
    #[serde(default = "default_response_byte_cycles")]
    pub response_byte_cycles: u64,

    /// Lower bound applied to the endpoint length when sizing ingress
    ///
    /// Env: ERH_COST_MIN_API_BYTES
    /// Default: 100
    #[serde(default = "default_min_api_bytes")]
    pub min_api_bytes: u64,

    /// Fixed ingress message overhead in bytes
    ///
    /// Env: ERH_COST_INGRESS_OVERHEAD_BYTES
    /// Default: 100
    #[serde(default = "default_ingress_overhead_bytes")]
    pub ingress_overhead_bytes: u64,

    /// Env: ERH_COST_STANDARD_SUBNET_NODES
    /// Default: 13
    #[serde(default = "default_standard_subnet_nodes")]
    pub standard_subnet_nodes: u32,

    /// Env: ERH_COST_FIDUCIARY_SUBNET_NODES
    /// Default: 34
    #[serde(default = "default_fiduciary_subnet_nodes")]
    pub fiduciary_subnet_nodes: u32,
}

fn default_base_cycles() -> u64 {
    3_000_000
}

fn default_per_node_request_cycles() -> u64 {
    60_000
}

fn default_request_byte_cycles() -> u64 {
    400
}

fn default_response_byte_cycles() -> u64 {
    800
}

fn default_min_api_bytes() -> u64 {
    100
}

fn default_ingress_overhead_bytes() -> u64 {
    100
}

fn default_standard_subnet_nodes() -> u32 {
    13
}

fn default_fiduciary_subnet_nodes() -> u32 {
    34
}

impl CostConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.standard_subnet_nodes == 0 {
            return Err(ConfigError::ValidateError(
                "Standard subnet node count cannot be 0".to_string(),
            ));
        }

        if self.fiduciary_subnet_nodes == 0 {
            return Err(ConfigError::ValidateError(
                "Fiduciary subnet node count cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            base_cycles: default_base_cycles(),
            per_node_request_cycles: default_per_node_request_cycles(),
            request_byte_cycles: default_request_byte_cycles(),
            response_byte_cycles: default_response_byte_cycles(),
            min_api_bytes: default_min_api_bytes(),
            ingress_overhead_bytes: default_ingress_overhead_bytes(),
            standard_subnet_nodes: default_standard_subnet_nodes(),
            fiduciary_subnet_nodes: default_fiduciary_subnet_nodes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost_config() {
        let config = CostConfig::default();
        assert_eq!(config.base_cycles, 3_000_000);
        assert_eq!(config.per_node_request_cycles, 60_000);
        assert_eq!(config.request_byte_cycles, 400);
        assert_eq!(config.response_byte_cycles, 800);
        assert_eq!(config.min_api_bytes, 100);
        assert_eq!(config.ingress_overhead_bytes, 100);
        assert_eq!(config.standard_subnet_nodes, 13);
        assert_eq!(config.fiduciary_subnet_nodes, 34);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_nodes() {
        let config = CostConfig {
            standard_subnet_nodes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CostConfig {
            fiduciary_subnet_nodes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: CostConfig =
            serde_json::from_str(r#"{"base_cycles": 1000, "fiduciary_subnet_nodes": 40}"#)
                .unwrap();
        assert_eq!(config.base_cycles, 1000);
        assert_eq!(config.fiduciary_subnet_nodes, 40);
        assert_eq!(config.standard_subnet_nodes, 13);
        assert_eq!(config.response_byte_cycles, 800);
    }
}
