use alloy_consensus::TxLegacy;
use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use alloy_sol_types::SolCall;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::{ChainClient, ChainError};
use crate::constants::{
    DEFAULT_GAS_MULTIPLIER_PCT, DEFAULT_RECEIPT_MAX_POLLS, DEFAULT_RECEIPT_POLL_MS,
};
use crate::rpc::{CallRequest, TransactionReceipt};
use crate::signer::SignerManager;

/// Tuning for transaction population and confirmation.
#[derive(Debug, Clone)]
pub struct SendOptions {
    /// Gas limit as a percentage of the node's estimate
    pub gas_multiplier_pct: u64,
    /// Delay between receipt polls
    pub poll_interval: Duration,
    /// Receipt polls before giving up
    pub max_polls: u32,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            gas_multiplier_pct: DEFAULT_GAS_MULTIPLIER_PCT,
            poll_interval: Duration::from_millis(DEFAULT_RECEIPT_POLL_MS),
            max_polls: DEFAULT_RECEIPT_MAX_POLLS,
        }
    }
}

/// Populates, signs and submits transactions on behalf of managed signers.
///
/// Sends are one-shot: a failed submission or a reverted receipt is
/// returned to the caller and never retried.
#[derive(Debug)]
pub struct TxSender<C> {
    client: Arc<C>,
    signers: Arc<SignerManager>,
    options: SendOptions,
}

impl<C: ChainClient> TxSender<C> {
    pub fn new(client: Arc<C>, signers: Arc<SignerManager>, options: SendOptions) -> Self {
        Self { client, signers, options }
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    pub fn signers(&self) -> &Arc<SignerManager> {
        &self.signers
    }

    /// Resolve nonce, gas price and gas limit for a call from `from`.
    pub async fn populate(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
        value: U256,
    ) -> Result<TxLegacy, ChainError> {
        let request = CallRequest::new(to, data.clone()).with_from(from).with_value(value);

        let chain_id = self.client.chain_id().await?;
        let nonce = self.client.transaction_count(from).await?;
        let gas_price = self.client.gas_price().await?;
        let estimate = self.client.estimate_gas(request).await?;
        let gas_limit = estimate.saturating_mul(self.options.gas_multiplier_pct) / 100;

        debug!(%from, %to, nonce, gas_price, estimate, gas_limit, "populated transaction");

        Ok(TxLegacy {
            chain_id: Some(chain_id),
            nonce,
            gas_price,
            gas_limit: gas_limit.max(estimate),
            to: TxKind::Call(to),
            value,
            input: data,
        })
    }

    /// Sign and submit a populated transaction, then wait for its receipt.
    pub async fn send(
        &self,
        from: Address,
        tx: TxLegacy,
    ) -> Result<TransactionReceipt, ChainError> {
        let signed = self.signers.sign_transaction(&from, tx).await?;
        let tx_hash = self.client.send_raw_transaction(signed.raw).await?;
        info!(%from, %tx_hash, "transaction submitted");

        let receipt = self.wait_for_receipt(tx_hash).await?;
        if !receipt.succeeded() {
            return Err(ChainError::Reverted { tx_hash, block: receipt.block() });
        }

        info!(%tx_hash, block = ?receipt.block(), gas_used = %receipt.gas_used, "transaction confirmed");
        Ok(receipt)
    }

    /// Populate and send a bound contract call.
    pub async fn send_call<T: SolCall>(
        &self,
        from: Address,
        to: Address,
        call: &T,
    ) -> Result<TransactionReceipt, ChainError> {
        let tx = self.populate(from, to, call.abi_encode().into(), U256::ZERO).await?;
        self.send(from, tx).await
    }

    /// Poll for a receipt at the configured interval.
    pub async fn wait_for_receipt(&self, tx_hash: B256) -> Result<TransactionReceipt, ChainError> {
        for _ in 0..self.options.max_polls {
            if let Some(receipt) = self.client.transaction_receipt(tx_hash).await? {
                return Ok(receipt);
            }
            tokio::time::sleep(self.options.poll_interval).await;
        }

        Err(ChainError::ReceiptTimeout { tx_hash, polls: self.options.max_polls })
    }
}
