use tracing::info;

use super::time::increase_time;
use crate::chain::{ChainClient, ChainError, DevChain};
use crate::constants::EPOCH_LENGTH;
use crate::staking::SafetyModule;

/// Push chain time past the end of the safety module's current epoch.
///
/// At an exact epoch boundary the contract reports zero seconds remaining;
/// a full [`EPOCH_LENGTH`] is advanced instead. When `mine` is set a block is
/// mined so the new timestamp is committed.
///
/// Returns the number of seconds advanced.
pub async fn advance_to_next_epoch<C: ChainClient>(
    module: &SafetyModule<C>,
    chain: &impl DevChain,
    mine: bool,
) -> Result<u64, ChainError> {
    let remaining = module.time_remaining_in_current_epoch().await?;
    let seconds = if remaining == 0 { EPOCH_LENGTH } else { remaining };

    increase_time(chain, seconds).await?;
    if mine {
        chain.mine().await?;
    }

    info!(remaining, advanced = seconds, mined = mine, "advanced to next epoch");
    Ok(seconds)
}

/// [`advance_to_next_epoch`], mining a block afterwards.
pub async fn advance_epoch<C: ChainClient>(
    module: &SafetyModule<C>,
    chain: &impl DevChain,
) -> Result<u64, ChainError> {
    advance_to_next_epoch(module, chain, true).await
}
