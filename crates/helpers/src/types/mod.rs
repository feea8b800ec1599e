// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire types for the EVM RPC canister's log query API
//!
//! Variants follow the single-key-object convention used by the canister's
//! JSON encoding: `{"Consistent": ...}`, `{"NoPermission": null}`. They are
//! decoded once into Rust enums and never re-inspected by key afterwards.

pub mod log;
pub mod nullable;
pub mod quantity;
pub mod rpc_error;
pub mod service;
pub mod service_tag;

pub use log::{LogEntry, LogQueryResult, QueryOutcome};
pub use nullable::Nullable;
pub use quantity::Quantity;
pub use rpc_error::{
    HttpOutcallError, JsonRpcError, ProviderError, RejectionCode, RpcError, ValidationError,
};
pub use service::{ProviderCost, ServiceDescriptor, ServiceTarget, SubnetType};
pub use service_tag::{HttpHeader, RpcApi, ServiceTag};
