use tracing::debug;

use crate::chain::{ChainError, DevChain};

/// Shift the next block's timestamp forward without mining.
pub async fn increase_time(chain: &impl DevChain, seconds: u64) -> Result<(), ChainError> {
    debug!(seconds, "increasing chain time");
    chain.increase_time(seconds).await
}

/// Shift chain time forward and mine a block so the new timestamp is visible to calls.
pub async fn increase_time_and_mine(chain: &impl DevChain, seconds: u64) -> Result<(), ChainError> {
    increase_time(chain, seconds).await?;
    chain.mine().await
}

/// Mine a block at exactly `timestamp`.
pub async fn advance_to_timestamp(chain: &impl DevChain, timestamp: u64) -> Result<(), ChainError> {
    debug!(timestamp, "advancing chain to timestamp");
    chain.set_next_block_timestamp(timestamp).await?;
    chain.mine().await
}
