//! Command-line arguments and validated run configuration.

use std::time::Duration;

use clap::Args;
use soundpoint_core::{CheckpointError, WindowRequest};
use soundpoint_rpc::RpcConfig;

/// Endpoint used when neither `--rpc` nor `RPC_URL` is set.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
/// Default window size.
pub const DEFAULT_BLOCKS: i64 = 128;
/// Default stride.
pub const DEFAULT_STEP: i64 = 4;

#[derive(Args, Debug, Clone)]
pub struct CheckpointArgs {
    /// RPC URL
    #[arg(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc: String,
    /// How many recent blocks to include in the checkpoint
    #[arg(short, long, default_value_t = DEFAULT_BLOCKS, allow_negative_numbers = true)]
    pub blocks: i64,
    /// Sample every Nth block (trade-off between speed and security margin)
    #[arg(short, long, default_value_t = DEFAULT_STEP, allow_negative_numbers = true)]
    pub step: i64,
    /// Print JSON only (machine-readable output)
    #[arg(long)]
    pub json: bool,
    /// Per-request RPC timeout in seconds
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,
    /// Header requests kept in flight (1 = fetch inline, one block at a time)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=1024))]
    pub concurrency: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Arguments after validation; nothing here has touched the network.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub endpoint: String,
    pub window: WindowRequest,
    pub rpc: RpcConfig,
    pub output: OutputMode,
}

impl RunConfig {
    pub fn from_args(args: CheckpointArgs) -> Result<Self, CheckpointError> {
        let window = WindowRequest::new(args.blocks, args.step)?;
        Ok(Self {
            endpoint: args.rpc,
            window,
            rpc: RpcConfig {
                request_timeout: Duration::from_secs(args.timeout_secs),
                prefetch_concurrency: args.concurrency as usize,
            },
            output: if args.json {
                OutputMode::Json
            } else {
                OutputMode::Human
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CheckpointArgs,
    }

    fn parse(argv: &[&str]) -> CheckpointArgs {
        let mut full = vec!["soundpoint"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args
    }

    #[test]
    fn defaults_match_documented_values() {
        let args = parse(&["--rpc", "http://node:8545"]);
        assert_eq!(args.blocks, 128);
        assert_eq!(args.step, 4);
        assert!(!args.json);

        let config = RunConfig::from_args(args).unwrap();
        assert_eq!(config.endpoint, "http://node:8545");
        assert_eq!(config.window.requested_blocks(), 128);
        assert_eq!(config.window.stride(), 4);
        assert_eq!(config.rpc.request_timeout, Duration::from_secs(25));
        assert!(!config.rpc.prefetch_enabled());
        assert_eq!(config.output, OutputMode::Human);
    }

    #[test]
    fn negative_values_parse_but_fail_validation() {
        let args = parse(&["--rpc", "http://node", "-b", "-5", "-s", "2"]);
        assert_eq!(args.blocks, -5);
        assert!(matches!(
            RunConfig::from_args(args),
            Err(CheckpointError::InvalidParameters(_))
        ));

        let args = parse(&["--rpc", "http://node", "--step", "0"]);
        assert!(matches!(
            RunConfig::from_args(args),
            Err(CheckpointError::InvalidParameters(_))
        ));
    }

    #[test]
    fn zero_timeout_and_concurrency_are_usage_errors() {
        assert!(TestCli::try_parse_from(["soundpoint", "--timeout-secs", "0"]).is_err());
        assert!(TestCli::try_parse_from(["soundpoint", "--concurrency", "0"]).is_err());
    }

    #[test]
    fn concurrency_above_one_enables_prefetch() {
        let args = parse(&["--rpc", "http://node", "--concurrency", "8", "--json"]);
        let config = RunConfig::from_args(args).unwrap();
        assert!(config.rpc.prefetch_enabled());
        assert_eq!(config.rpc.prefetch_concurrency, 8);
        assert_eq!(config.output, OutputMode::Json);
    }
}
