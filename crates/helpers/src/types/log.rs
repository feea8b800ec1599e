use serde::Deserialize;

use super::{Nullable, Quantity, RpcError, ServiceTag};

/// Result of `eth_getLogs` fanned out to several providers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum LogQueryResult {
    /// Every provider returned the same outcome
    Consistent(QueryOutcome),
    /// Providers disagreed; one entry per provider, in response order
    Inconsistent(Vec<(ServiceTag, QueryOutcome)>),
}

/// Outcome of a single `eth_getLogs` call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum QueryOutcome {
    Ok(Vec<LogEntry>),
    Err(RpcError),
}

/// A log entry as returned by `eth_getLogs`.
///
/// Every field is optional on decode. A missing field stays missing in the
/// normalized output and an explicit `null` stays `null`. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogEntry {
    pub transaction_hash: Nullable<String>,
    pub block_number: Nullable<Quantity>,
    pub data: Nullable<String>,
    pub block_hash: Nullable<String>,
    pub transaction_index: Nullable<Quantity>,
    pub topics: Nullable<Vec<String>>,
    pub address: Nullable<String>,
    pub log_index: Nullable<Quantity>,
    pub removed: Nullable<bool>,
}
