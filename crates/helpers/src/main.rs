// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use config::{Args, Command, EstimateArgs, HelpersConfig, NormalizeArgs};
use evm_rpc_helpers::{
    CostEstimator,
    logging::{self, LoggingConfig},
    normalize_multi_log_result_json,
    types::{ProviderCost, ServiceDescriptor, SubnetType},
};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let env_file_loaded = config::load_env_file(&args.env_file)?;
    let config = HelpersConfig::from_env()?;
    let _log_guard = logging::init_with_config(LoggingConfig::from(&config.log))?;

    tracing::debug!(
        env_file = %args.env_file,
        loaded = env_file_loaded,
        "Configuration loaded"
    );

    match args.command {
        Command::Estimate(estimate) => run_estimate(&config, estimate),
        Command::Normalize(normalize) => run_normalize(normalize),
    }
}

fn run_estimate(config: &HelpersConfig, args: EstimateArgs) -> anyhow::Result<()> {
    let subnet_type = SubnetType::from_name(&args.subnet);
    let provider = match (args.cycles_per_call, args.cycles_per_message_byte) {
        (None, None) => None,
        (per_call, per_byte) => Some(ProviderCost {
            cycles_per_call: per_call.unwrap_or_default(),
            cycles_per_message_byte: per_byte.unwrap_or_default(),
        }),
    };
    let service = ServiceDescriptor {
        api: args.api,
        provider,
        subnet_type,
    };

    let estimator = CostEstimator::new(config.cost.clone());
    let breakdown = estimator.breakdown(&service, args.payload_size, args.max_response_size)?;

    if args.breakdown {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("{}", breakdown.total);
    }

    Ok(())
}

fn run_normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&input).context("Input is not valid JSON")?;
    let normalized = normalize_multi_log_result_json(value)?;

    if args.compact {
        println!("{}", serde_json::to_string(&normalized)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&normalized)?);
    }

    Ok(())
}
