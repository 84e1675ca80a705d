/// Length of one safety-module reward epoch in seconds (28 days)
pub const EPOCH_LENGTH: u64 = 28 * 24 * 60 * 60;
/// Decimals of the governance token
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;
/// Default JSON-RPC endpoint of a local dev node
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
/// Gas limit headroom applied on top of `eth_estimateGas`, in percent
pub const DEFAULT_GAS_MULTIPLIER_PCT: u64 = 120;
/// Interval between `eth_getTransactionReceipt` polls
pub const DEFAULT_RECEIPT_POLL_MS: u64 = 500;
/// Maximum number of receipt polls before giving up on a transaction
pub const DEFAULT_RECEIPT_MAX_POLLS: u32 = 240;
