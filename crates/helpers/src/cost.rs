//! Cycles cost estimation for RPC calls made through HTTPS outcalls.
//!
//! This module provides:
//! - `CostEstimator`: prices a call from a [`ServiceDescriptor`] and request/response sizes
//! - `estimate_rpc_cost`: the same with the default cost model

use config::CostConfig;
use serde::Serialize;
use thiserror::Error;

use crate::types::{ServiceDescriptor, ServiceTarget, SubnetType};

// ================================================================================================
// Error Types
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
    #[error("Service descriptor has neither an `api` endpoint nor a `provider`")]
    MissingTarget,

    #[error("Cycles cost overflowed while computing {0}")]
    Overflow(&'static str),
}

// ================================================================================================
// Cost Breakdown
// ================================================================================================

/// Itemized cost of one call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub subnet_type: SubnetType,
    pub nodes: u32,
    /// HTTPS outcall cost charged by each node
    #[serde(serialize_with = "as_string")]
    pub http_cost_per_node: u128,
    /// Provider fee charged by each node, zero for plain endpoints
    #[serde(serialize_with = "as_string")]
    pub provider_cost_per_node: u128,
    #[serde(serialize_with = "as_string")]
    pub total: u128,
}

// u128 does not fit a JSON number
fn as_string<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

// ================================================================================================
// Estimator
// ================================================================================================

/// Prices RPC calls with a configurable cost model.
///
/// The cost of a call on a subnet with `nodes` replicas is:
///
/// ```text
/// ingress_bytes = payload_size + max(min_api_bytes, len(api)) + ingress_overhead_bytes
/// per_node      = base_cycles + per_node_request_cycles
///               + request_byte_cycles * ingress_bytes
///               + response_byte_cycles * max_response_bytes
/// http_cost     = per_node * nodes
/// ```
///
/// Calls routed to a registered provider are priced with an empty `api` and
/// additionally pay `cycles_per_call + cycles_per_message_byte * payload_size`
/// on every node.
#[derive(Debug, Clone, Default)]
pub struct CostEstimator {
    config: CostConfig,
}

impl CostEstimator {
    pub fn new(config: CostConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CostConfig {
        &self.config
    }

    /// Number of replicas on a subnet of the given type
    pub fn subnet_size(&self, subnet_type: SubnetType) -> u32 {
        match subnet_type {
            SubnetType::Fiduciary => self.config.fiduciary_subnet_nodes,
            SubnetType::Standard => self.config.standard_subnet_nodes,
        }
    }

    /// Estimated ingress message size for a request to `api`.
    ///
    /// `api` is measured in UTF-16 code units.
    pub fn ingress_bytes(&self, api: &str, payload_size_bytes: u64) -> Result<u128, CostError> {
        let api_len = api.encode_utf16().count() as u128;
        let api_bytes = api_len.max(u128::from(self.config.min_api_bytes));

        u128::from(payload_size_bytes)
            .checked_add(api_bytes)
            .and_then(|bytes| bytes.checked_add(u128::from(self.config.ingress_overhead_bytes)))
            .ok_or(CostError::Overflow("ingress bytes"))
    }

    /// HTTPS outcall cost charged by a single node
    pub fn http_cost_per_node(
        &self,
        api: &str,
        payload_size_bytes: u64,
        max_response_bytes: u64,
    ) -> Result<u128, CostError> {
        let ingress_bytes = self.ingress_bytes(api, payload_size_bytes)?;
        let request_cost = u128::from(self.config.request_byte_cycles)
            .checked_mul(ingress_bytes)
            .ok_or(CostError::Overflow("request byte cost"))?;
        let response_cost = u128::from(self.config.response_byte_cycles)
            .checked_mul(u128::from(max_response_bytes))
            .ok_or(CostError::Overflow("response byte cost"))?;

        u128::from(self.config.base_cycles)
            .checked_add(u128::from(self.config.per_node_request_cycles))
            .and_then(|cost| cost.checked_add(request_cost))
            .and_then(|cost| cost.checked_add(response_cost))
            .ok_or(CostError::Overflow("per-node HTTP cost"))
    }

    /// Itemized cost of a call to `service`
    pub fn breakdown(
        &self,
        service: &ServiceDescriptor,
        payload_size_bytes: u64,
        max_response_bytes: u64,
    ) -> Result<CostBreakdown, CostError> {
        let nodes = self.subnet_size(service.subnet_type);

        let (api, provider_cost_per_node) = match service.target() {
            Some(ServiceTarget::Api(api)) => (api, 0),
            Some(ServiceTarget::Provider(provider)) => {
                let message_cost = provider
                    .cycles_per_message_byte
                    .checked_mul(u128::from(payload_size_bytes))
                    .and_then(|cost| cost.checked_add(provider.cycles_per_call))
                    .ok_or(CostError::Overflow("provider cost"))?;
                ("", message_cost)
            }
            None => return Err(CostError::MissingTarget),
        };

        let http_cost_per_node =
            self.http_cost_per_node(api, payload_size_bytes, max_response_bytes)?;

        let total = http_cost_per_node
            .checked_add(provider_cost_per_node)
            .and_then(|cost| cost.checked_mul(u128::from(nodes)))
            .ok_or(CostError::Overflow("total cost"))?;

        tracing::trace!(
            subnet = service.subnet_type.as_str(),
            nodes,
            http_cost_per_node,
            provider_cost_per_node,
            total,
            "Estimated RPC cost"
        );

        Ok(CostBreakdown {
            subnet_type: service.subnet_type,
            nodes,
            http_cost_per_node,
            provider_cost_per_node,
            total,
        })
    }

    /// Total cycles cost of a call to `service`
    pub fn estimate(
        &self,
        service: &ServiceDescriptor,
        payload_size_bytes: u64,
        max_response_bytes: u64,
    ) -> Result<u128, CostError> {
        self.breakdown(service, payload_size_bytes, max_response_bytes)
            .map(|breakdown| breakdown.total)
    }
}

/// Estimate the cycles cost of an RPC call with the default cost model.
pub fn estimate_rpc_cost(
    service: &ServiceDescriptor,
    payload_size_bytes: u64,
    max_response_bytes: u64,
) -> Result<u128, CostError> {
    CostEstimator::default().estimate(service, payload_size_bytes, max_response_bytes)
}

// ================================================================================================
// Tests
// ================================================================================================
