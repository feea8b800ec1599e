use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.fiduciary)
    #[arg(short, long, default_value = ".env", global = true)]
    pub env_file: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate the cycles cost of a single RPC call
    Estimate(EstimateArgs),

    /// Normalize a MultiGetLogsResult JSON document
    Normalize(NormalizeArgs),
}

#[derive(clap::Args, Debug)]
pub struct EstimateArgs {
    /// Endpoint the call is sent to
    #[arg(long, conflicts_with_all = ["cycles_per_call", "cycles_per_message_byte"])]
    pub api: Option<String>,

    /// Provider charge per call, per node
    #[arg(long)]
    pub cycles_per_call: Option<u128>,

    /// Provider charge per request byte, per node
    #[arg(long)]
    pub cycles_per_message_byte: Option<u128>,

    /// Subnet type: standard or fiduciary
    #[arg(long, default_value = "standard")]
    pub subnet: String,

    /// Request payload size in bytes
    #[arg(long, default_value_t = 0)]
    pub payload_size: u64,

    /// Maximum response size in bytes
    #[arg(long, default_value_t = 0)]
    pub max_response_size: u64,

    /// Print the per-node breakdown as JSON instead of the bare total
    #[arg(long)]
    pub breakdown: bool,
}

#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
    /// JSON file to read; stdin when omitted
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_estimate_api() {
        let args = Args::try_parse_from([
            "evm-rpc-helpers",
            "estimate",
            "--api",
            "https://example.com/rpc",
            "--payload-size",
            "100",
            "--max-response-size",
            "1000",
        ])
        .unwrap();

        assert_eq!(args.env_file, ".env");
        match args.command {
            Command::Estimate(estimate) => {
                assert_eq!(estimate.api.as_deref(), Some("https://example.com/rpc"));
                assert_eq!(estimate.subnet, "standard");
                assert_eq!(estimate.payload_size, 100);
                assert_eq!(estimate.max_response_size, 1000);
                assert!(!estimate.breakdown);
            }
            other => panic!("Expected estimate command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_estimate_provider_prices_beyond_u64() {
        let args = Args::try_parse_from([
            "evm-rpc-helpers",
            "estimate",
            "--cycles-per-call",
            "100000000000000000000",
            "--cycles-per-message-byte",
            "340282366920938463463374607431768211455",
        ])
        .unwrap();

        match args.command {
            Command::Estimate(estimate) => {
                assert_eq!(estimate.cycles_per_call, Some(100_000_000_000_000_000_000));
                assert_eq!(estimate.cycles_per_message_byte, Some(u128::MAX));
            }
            other => panic!("Expected estimate command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_estimate_api_conflicts_with_provider() {
        let result = Args::try_parse_from([
            "evm-rpc-helpers",
            "estimate",
            "--api",
            "https://example.com/rpc",
            "--cycles-per-call",
            "1000",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_normalize_with_env_file() {
        let args = Args::try_parse_from([
            "evm-rpc-helpers",
            "normalize",
            "--env-file",
            ".env.test",
            "logs.json",
            "--compact",
        ])
        .unwrap();

        assert_eq!(args.env_file, ".env.test");
        match args.command {
            Command::Normalize(normalize) => {
                assert_eq!(normalize.input, Some(PathBuf::from("logs.json")));
                assert!(normalize.compact);
            }
            other => panic!("Expected normalize command, got {:?}", other),
        }
    }
}
