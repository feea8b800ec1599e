// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod cost;
pub mod logging;
pub mod normalize;
pub mod types;
pub mod utils;

pub use cost::{CostBreakdown, CostError, CostEstimator, estimate_rpc_cost};
pub use normalize::{
    DecodeError, decode_log_query_result, normalize_multi_log_result,
    normalize_multi_log_result_json,
};
