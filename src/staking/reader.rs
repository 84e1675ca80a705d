use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use std::sync::Arc;

use crate::bindings::ISafetyModule;
use crate::chain::{read_contract, ChainClient, ChainError};

/// Read-only view of a deployed safety module.
#[derive(Debug)]
pub struct SafetyModule<C> {
    client: Arc<C>,
    address: Address,
}

impl<C> Clone for SafetyModule<C> {
    fn clone(&self) -> Self {
        Self { client: Arc::clone(&self.client), address: self.address }
    }
}

fn to_u64(value: U256, what: &str) -> Result<u64, ChainError> {
    u64::try_from(value).map_err(|_| ChainError::OutOfRange(format!("{what} = {value}")))
}

impl<C: ChainClient> SafetyModule<C> {
    pub fn new(client: Arc<C>, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    async fn read<T: SolCall + Send>(&self, call: T) -> Result<T::Return, ChainError> {
        read_contract(self.client.as_ref(), self.address, call).await
    }

    /// Epoch length and the timestamp epoch zero starts at.
    pub async fn epoch_parameters(&self) -> Result<ISafetyModule::EpochParameters, ChainError> {
        self.read(ISafetyModule::getEpochParametersCall {}).await
    }

    pub async fn current_epoch(&self) -> Result<U256, ChainError> {
        self.read(ISafetyModule::getCurrentEpochCall {}).await
    }

    /// Seconds until the current epoch ends; zero exactly at a boundary.
    pub async fn time_remaining_in_current_epoch(&self) -> Result<u64, ChainError> {
        let remaining = self.read(ISafetyModule::getTimeRemainingInCurrentEpochCall {}).await?;
        to_u64(remaining, "time remaining in epoch")
    }

    /// Trailing seconds of each epoch during which withdrawal requests are refused.
    pub async fn blackout_window(&self) -> Result<u64, ChainError> {
        let window = self.read(ISafetyModule::getBlackoutWindowCall {}).await?;
        to_u64(window, "blackout window")
    }

    /// Whether the current block falls inside the blackout window.
    pub async fn in_blackout_window(&self) -> Result<bool, ChainError> {
        let remaining = self.time_remaining_in_current_epoch().await?;
        let window = self.blackout_window().await?;
        Ok(remaining <= window)
    }

    pub async fn distribution_start(&self) -> Result<u64, ChainError> {
        let start = self.read(ISafetyModule::DISTRIBUTION_STARTCall {}).await?;
        to_u64(start, "distribution start")
    }

    pub async fn rewards_per_second(&self) -> Result<U256, ChainError> {
        self.read(ISafetyModule::getRewardsPerSecondCall {}).await
    }

    pub async fn total_active_balance_current_epoch(&self) -> Result<U256, ChainError> {
        self.read(ISafetyModule::getTotalActiveBalanceCurrentEpochCall {}).await
    }

    pub async fn active_balance_current_epoch(&self, staker: Address) -> Result<U256, ChainError> {
        self.read(ISafetyModule::getActiveBalanceCurrentEpochCall { staker }).await
    }

    pub async fn inactive_balance_current_epoch(
        &self,
        staker: Address,
    ) -> Result<U256, ChainError> {
        self.read(ISafetyModule::getInactiveBalanceCurrentEpochCall { staker }).await
    }

    pub async fn inactive_balance_next_epoch(&self, staker: Address) -> Result<U256, ChainError> {
        self.read(ISafetyModule::getInactiveBalanceNextEpochCall { staker }).await
    }

    /// Stake requested for withdrawal that becomes withdrawable next epoch.
    pub async fn pending_withdraw(&self, staker: Address) -> Result<U256, ChainError> {
        let next = self.inactive_balance_next_epoch(staker).await?;
        let current = self.inactive_balance_current_epoch(staker).await?;
        Ok(next.saturating_sub(current))
    }

    pub async fn stake_available_to_withdraw(&self, staker: Address) -> Result<U256, ChainError> {
        self.read(ISafetyModule::getStakeAvailableToWithdrawCall { staker }).await
    }

    /// Staked token balance of `account`.
    pub async fn staked_balance(&self, account: Address) -> Result<U256, ChainError> {
        self.read(ISafetyModule::balanceOfCall { account }).await
    }
}
