// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Normalization of `eth_getLogs` multi-provider results.
//!
//! Turns the variant-tagged [`LogQueryResult`] into plain JSON for presentation:
//! - `Consistent` yields the normalized outcome directly
//! - `Inconsistent` yields `[{rpcService, getLogsResult}, ...]` in provider order
//!
//! Typed normalization is total. Shape mismatches are reported while decoding
//! JSON input, as a [`DecodeError`].

mod error;
mod logs;
mod rpc_error;
mod service_tag;

pub use error::DecodeError;
pub use logs::{normalize_log_entry, normalize_outcome};
pub use rpc_error::{
    normalize_error, normalize_http_outcall_error, normalize_provider_error,
    normalize_validation_error,
};
pub use service_tag::{normalize_rpc_api, normalize_service_tag};

use serde_json::{Value, json};

use crate::types::LogQueryResult;

pub fn normalize_multi_log_result(result: &LogQueryResult) -> Value {
    match result {
        LogQueryResult::Consistent(outcome) => normalize_outcome(outcome),
        LogQueryResult::Inconsistent(results) => {
            tracing::debug!(
                providers = results.len(),
                "Providers returned inconsistent log query results"
            );
            results
                .iter()
                .map(|(service, outcome)| {
                    json!({
                        "rpcService": normalize_service_tag(service),
                        "getLogsResult": normalize_outcome(outcome),
                    })
                })
                .collect()
        }
    }
}

/// Decode a JSON document into a [`LogQueryResult`].
///
/// Fails when a variant object has no recognized key, more than one key, or a
/// payload of the wrong shape.
pub fn decode_log_query_result(value: Value) -> Result<LogQueryResult, DecodeError> {
    serde_json::from_value(value).map_err(|source| {
        tracing::debug!(error = %source, "Rejected log query result");
        DecodeError::new("LogQueryResult", source)
    })
}

/// Decode and normalize in one step
pub fn normalize_multi_log_result_json(value: Value) -> Result<Value, DecodeError> {
    decode_log_query_result(value).map(|result| normalize_multi_log_result(&result))
}
