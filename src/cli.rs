use alloy_primitives::Address;
use clap::Parser;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_GAS_MULTIPLIER_PCT, DEFAULT_RECEIPT_MAX_POLLS, DEFAULT_RECEIPT_POLL_MS,
    DEFAULT_RPC_URL,
};

/// CLI arguments for the proposal submission tool
#[derive(Parser, Debug)]
#[command(name = "propose", about = "Submit a treasury funding proposal to the governor")]
pub struct Cli {
    /// JSON-RPC endpoint of the target chain
    #[arg(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Per-request RPC timeout in seconds
    #[arg(long, default_value = "60")]
    pub rpc_timeout_secs: u64,

    /// Deployment config (JSON) with the multisig recipient and funding amount
    #[arg(long, env = "DEPLOYMENT_CONFIG")]
    pub config: PathBuf,

    /// IPFS digest of the proposal description (32-byte hex)
    #[arg(long)]
    pub ipfs_hash: String,

    /// Token transferred out of the treasury
    #[arg(long)]
    pub token: Address,

    /// Governor contract
    #[arg(long)]
    pub governor: Address,

    /// Timelock executing the proposal
    #[arg(long)]
    pub timelock: Address,

    /// Community treasury holding the funds
    #[arg(long)]
    pub treasury: Address,

    /// Proposer private key (hex). Defaults to the deployer key of the deployment config.
    #[arg(long, env = "PROPOSER_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Print the populated transaction without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Gas limit as a percentage of the node's estimate
    #[arg(long, default_value_t = DEFAULT_GAS_MULTIPLIER_PCT, value_parser = clap::value_parser!(u64).range(100..=1000))]
    pub gas_multiplier_pct: u64,

    /// Interval between receipt polls in milliseconds
    #[arg(long, default_value_t = DEFAULT_RECEIPT_POLL_MS)]
    pub receipt_poll_ms: u64,

    /// Receipt polls before giving up
    #[arg(long, default_value_t = DEFAULT_RECEIPT_MAX_POLLS)]
    pub receipt_max_polls: u32,

    /// Emit logs as newline-delimited JSON
    #[arg(long)]
    pub log_json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
