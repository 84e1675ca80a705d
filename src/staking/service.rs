use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use std::sync::Arc;
use tracing::info;

use super::reader::SafetyModule;
use crate::bindings::{ISafetyModule, IERC20};
use crate::chain::{read_contract, ChainClient, ChainError, TxSender};
use crate::rpc::TransactionReceipt;

/// Amount argument of a stake withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawAmount {
    /// Withdraw exactly this many base units
    Exact(U256),
    /// Withdraw everything currently eligible
    Max,
}

/// Builds and sends safety-module and staked-token transactions.
#[derive(Debug)]
pub struct StakingService<C> {
    sender: Arc<TxSender<C>>,
    module: Address,
    token: Address,
}

impl<C: ChainClient> StakingService<C> {
    pub fn new(sender: Arc<TxSender<C>>, module: Address, token: Address) -> Self {
        Self { sender, module, token }
    }

    /// Read-only view of the same module.
    pub fn module(&self) -> SafetyModule<C> {
        SafetyModule::new(Arc::clone(self.sender.client()), self.module)
    }

    /// Call data for a withdrawal to `recipient`.
    pub fn withdraw_calldata(recipient: Address, amount: WithdrawAmount) -> Bytes {
        match amount {
            WithdrawAmount::Exact(amount) => {
                ISafetyModule::withdrawStakeCall { recipient, stakeAmount: amount }
                    .abi_encode()
                    .into()
            }
            WithdrawAmount::Max => {
                ISafetyModule::withdrawMaxStakeCall { recipient }.abi_encode().into()
            }
        }
    }

    /// Allow the module to pull `amount` of the staked token from `owner`.
    pub async fn approve(
        &self,
        owner: Address,
        amount: U256,
    ) -> Result<TransactionReceipt, ChainError> {
        let call = IERC20::approveCall { spender: self.module, amount };
        self.sender.send_call(owner, self.token, &call).await
    }

    pub async fn stake(
        &self,
        staker: Address,
        amount: U256,
    ) -> Result<TransactionReceipt, ChainError> {
        info!(%staker, %amount, "stake");
        self.sender.send_call(staker, self.module, &ISafetyModule::stakeCall { amount }).await
    }

    /// Request `amount` of active stake to become withdrawable next epoch.
    pub async fn request_withdrawal(
        &self,
        staker: Address,
        amount: U256,
    ) -> Result<TransactionReceipt, ChainError> {
        info!(%staker, %amount, "request withdrawal");
        let call = ISafetyModule::requestWithdrawalCall { stakeAmount: amount };
        self.sender.send_call(staker, self.module, &call).await
    }

    pub async fn withdraw_stake(
        &self,
        staker: Address,
        recipient: Address,
        amount: WithdrawAmount,
    ) -> Result<TransactionReceipt, ChainError> {
        info!(%staker, %recipient, ?amount, "withdraw stake");
        let tx = self
            .sender
            .populate(staker, self.module, Self::withdraw_calldata(recipient, amount), U256::ZERO)
            .await?;
        self.sender.send(staker, tx).await
    }

    /// Claim accrued rewards of `staker` to `recipient`.
    pub async fn claim_rewards(
        &self,
        staker: Address,
        recipient: Address,
    ) -> Result<TransactionReceipt, ChainError> {
        info!(%staker, %recipient, "claim rewards");
        let call = ISafetyModule::claimRewardsCall { recipient };
        self.sender.send_call(staker, self.module, &call).await
    }

    /// Admin-only: change the reward emission rate.
    pub async fn set_rewards_per_second(
        &self,
        admin: Address,
        rate: U256,
    ) -> Result<TransactionReceipt, ChainError> {
        let call = ISafetyModule::setRewardsPerSecondCall { emissionPerSecond: rate };
        self.sender.send_call(admin, self.module, &call).await
    }

    /// Staked-token balance held outside the module.
    pub async fn token_balance(&self, account: Address) -> Result<U256, ChainError> {
        read_contract(self.sender.client().as_ref(), self.token, IERC20::balanceOfCall { account })
            .await
    }

    pub async fn allowance(&self, owner: Address) -> Result<U256, ChainError> {
        let call = IERC20::allowanceCall { owner, spender: self.module };
        read_contract(self.sender.client().as_ref(), self.token, call).await
    }

    pub async fn token_decimals(&self) -> Result<u8, ChainError> {
        read_contract(self.sender.client().as_ref(), self.token, IERC20::decimalsCall {}).await
    }
}
