//! Safety-module staking service
//!
//! [`SafetyModule`] wraps the module's view functions; [`StakingService`]
//! builds and sends the staking transactions (approve, stake, request
//! withdrawal, withdraw, claim). Staking math stays in the contract.

pub mod reader;
pub mod service;

pub use reader::SafetyModule;
pub use service::{StakingService, WithdrawAmount};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{ISafetyModule, IERC20};
    use crate::chain::{SendOptions, TxSender};
    use crate::devnet::mock::MockChain;
    use crate::signer::dev;
    use alloy_primitives::{address, Address, U256};
    use alloy_sol_types::{SolCall, SolValue};
    use std::sync::Arc;
    use std::time::Duration;

    const GOVERNOR: Address = address!("000000000000000000000000000000000000a001");
    const MODULE: Address = address!("000000000000000000000000000000000000a002");
    const TOKEN: Address = address!("000000000000000000000000000000000000a003");

    async fn service(chain: Arc<MockChain>) -> StakingService<MockChain> {
        let signers = Arc::new(dev::setup_dev_signers().await);
        let options = SendOptions { poll_interval: Duration::from_millis(1), ..Default::default() };
        let sender = Arc::new(TxSender::new(chain, signers, options));
        StakingService::new(sender, MODULE, TOKEN)
    }

    fn mock_chain() -> Arc<MockChain> {
        Arc::new(MockChain::new(GOVERNOR, MODULE, 1_000).with_epochs(1_000, 0))
    }

    #[tokio::test]
    async fn test_stake_targets_module() {
        let chain = mock_chain();
        let service = service(chain.clone()).await;
        let staker = dev::dev_accounts()[1];

        service.stake(staker, U256::from(1_000_000u64)).await.unwrap();

        let sent = chain.sent_transactions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, staker);
        assert_eq!(sent[0].to, Some(MODULE));
        let call = ISafetyModule::stakeCall::abi_decode(&sent[0].input).unwrap();
        assert_eq!(call.amount, U256::from(1_000_000u64));
    }

    #[tokio::test]
    async fn test_approve_targets_token() {
        let chain = mock_chain();
        let service = service(chain.clone()).await;
        let owner = dev::dev_accounts()[1];

        service.approve(owner, U256::MAX).await.unwrap();

        let sent = chain.sent_transactions();
        assert_eq!(sent[0].to, Some(TOKEN));
        let call = IERC20::approveCall::abi_decode(&sent[0].input).unwrap();
        assert_eq!(call.spender, MODULE);
        assert_eq!(call.amount, U256::MAX);
    }

    #[tokio::test]
    async fn test_sequential_sends_use_increasing_nonces() {
        let chain = mock_chain();
        let service = service(chain.clone()).await;
        let staker = dev::dev_accounts()[1];

        service.approve(staker, U256::from(10u64)).await.unwrap();
        service.stake(staker, U256::from(10u64)).await.unwrap();
        service.request_withdrawal(staker, U256::from(5u64)).await.unwrap();

        let nonces: Vec<u64> = chain.sent_transactions().iter().map(|tx| tx.nonce).collect();
        assert_eq!(nonces, vec![0, 1, 2]);
        assert_eq!(chain.block_number(), 3);
    }

    #[test]
    fn test_withdraw_calldata() {
        let recipient = dev::dev_accounts()[2];

        let max = StakingService::<MockChain>::withdraw_calldata(recipient, WithdrawAmount::Max);
        assert_eq!(&max[..4], ISafetyModule::withdrawMaxStakeCall::SELECTOR.as_slice());
        let decoded = ISafetyModule::withdrawMaxStakeCall::abi_decode(&max).unwrap();
        assert_eq!(decoded.recipient, recipient);

        let exact = StakingService::<MockChain>::withdraw_calldata(
            recipient,
            WithdrawAmount::Exact(U256::from(500_000u64)),
        );
        let decoded = ISafetyModule::withdrawStakeCall::abi_decode(&exact).unwrap();
        assert_eq!(decoded.recipient, recipient);
        assert_eq!(decoded.stakeAmount, U256::from(500_000u64));
    }

    #[tokio::test]
    async fn test_withdraw_max_sends_sentinel_call() {
        let chain = mock_chain();
        let service = service(chain.clone()).await;
        let staker = dev::dev_accounts()[1];

        service.withdraw_stake(staker, staker, WithdrawAmount::Max).await.unwrap();

        let input = &chain.sent_transactions()[0].input;
        assert_eq!(&input[..4], ISafetyModule::withdrawMaxStakeCall::SELECTOR.as_slice());
    }

    #[tokio::test]
    async fn test_pending_withdraw_is_next_minus_current() {
        let chain = mock_chain();
        let service = service(chain.clone()).await;
        let staker = dev::dev_accounts()[1];
        chain.set_call_response(
            MODULE,
            ISafetyModule::getInactiveBalanceNextEpochCall::SELECTOR,
            U256::from(1_000_000u64).abi_encode(),
        );
        chain.set_call_response(
            MODULE,
            ISafetyModule::getInactiveBalanceCurrentEpochCall::SELECTOR,
            U256::from(250_000u64).abi_encode(),
        );

        let pending = service.module().pending_withdraw(staker).await.unwrap();
        assert_eq!(pending, U256::from(750_000u64));
    }

    #[tokio::test]
    async fn test_blackout_window_check() {
        let chain = Arc::new(MockChain::new(GOVERNOR, MODULE, 950).with_epochs(1_000, 0));
        let module = SafetyModule::new(chain.clone(), MODULE);
        chain.set_call_response(
            MODULE,
            ISafetyModule::getBlackoutWindowCall::SELECTOR,
            U256::from(100u64).abi_encode(),
        );

        assert_eq!(module.time_remaining_in_current_epoch().await.unwrap(), 50);
        assert!(module.in_blackout_window().await.unwrap());
    }

    #[tokio::test]
    async fn test_token_reads() {
        let chain = mock_chain();
        let service = service(chain.clone()).await;
        chain.set_call_response(TOKEN, IERC20::decimalsCall::SELECTOR, U256::from(18u8).abi_encode());
        chain.set_call_response(
            TOKEN,
            IERC20::balanceOfCall::SELECTOR,
            U256::from(42u64).abi_encode(),
        );

        assert_eq!(service.token_decimals().await.unwrap(), 18);
        assert_eq!(service.token_balance(dev::dev_accounts()[1]).await.unwrap(), U256::from(42u64));
    }

    #[tokio::test]
    async fn test_unanswered_read_surfaces_error() {
        let chain = mock_chain();
        let module = SafetyModule::new(chain, MODULE);
        assert!(module.rewards_per_second().await.is_err());
    }
}
