//! In-memory dev chain for unit tests.
//!
//! Mines one block per accepted transaction, keeps chain time and snapshots
//! with local-node semantics (a revert consumes the target snapshot and every
//! later one), answers the safety module's epoch schedule and the governor's
//! proposal count, and records decoded `create` calls. Any other read is
//! served from responses registered with [`MockChain::set_call_response`].

use alloy_consensus::transaction::SignerRecoverable;
use alloy_consensus::{Transaction, TxEnvelope};
use alloy_eips::eip2718::Decodable2718;
use alloy_primitives::{Address, Bytes, B256, U256, U64};
use alloy_sol_types::{SolCall, SolValue};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::bindings::{IGovernor, ISafetyModule};
use crate::chain::{ChainClient, ChainError, DevChain};
use crate::rpc::{CallRequest, SnapshotId, TransactionReceipt};

pub const MOCK_CHAIN_ID: u64 = 31337;
pub const MOCK_GAS_ESTIMATE: u64 = 100_000;
pub const MOCK_GAS_PRICE: u128 = 1_000_000_000;

/// A transaction accepted by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentTx {
    pub from: Address,
    pub to: Option<Address>,
    pub nonce: u64,
    pub input: Bytes,
}

#[derive(Debug, Clone, Default)]
struct ChainState {
    block_number: u64,
    timestamp: u64,
    time_offset: u64,
    next_timestamp: Option<u64>,
    nonces: HashMap<Address, u64>,
    receipts: HashMap<B256, TransactionReceipt>,
    proposals: Vec<IGovernor::createCall>,
    sent: Vec<SentTx>,
}

impl ChainState {
    fn mine_block(&mut self) {
        self.timestamp = self.next_timestamp.take().unwrap_or(self.timestamp + self.time_offset);
        self.time_offset = 0;
        self.block_number += 1;
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: ChainState,
    snapshots: BTreeMap<u64, ChainState>,
    next_snapshot: u64,
    responses: HashMap<(Address, [u8; 4]), Bytes>,
    revert_next: bool,
    receipt_delay: u32,
    fail_reads_after_send: bool,
    reads_failing: bool,
}

#[derive(Debug)]
pub struct MockChain {
    inner: Mutex<Inner>,
    governor: Address,
    safety_module: Address,
    epoch_interval: u64,
    epoch_offset: u64,
}

impl MockChain {
    /// A chain whose latest block is at `timestamp`.
    pub fn new(governor: Address, safety_module: Address, timestamp: u64) -> Self {
        let inner = Inner {
            state: ChainState { timestamp, ..Default::default() },
            next_snapshot: 1,
            ..Default::default()
        };
        Self {
            inner: Mutex::new(inner),
            governor,
            safety_module,
            epoch_interval: crate::constants::EPOCH_LENGTH,
            epoch_offset: 0,
        }
    }

    /// Epoch schedule reported by the safety module.
    pub fn with_epochs(mut self, interval: u64, offset: u64) -> Self {
        self.epoch_interval = interval;
        self.epoch_offset = offset;
        self
    }

    pub fn set_call_response(&self, to: Address, selector: [u8; 4], data: impl Into<Bytes>) {
        self.inner.lock().unwrap().responses.insert((to, selector), data.into());
    }

    /// Mark the next accepted transaction as reverted.
    pub fn revert_next_transaction(&self) {
        self.inner.lock().unwrap().revert_next = true;
    }

    /// Make every `eth_call` fail once the next transaction has been accepted.
    pub fn fail_reads_after_next_send(&self) {
        self.inner.lock().unwrap().fail_reads_after_send = true;
    }

    /// Report receipts as missing for the next `polls` receipt queries.
    pub fn delay_receipts(&self, polls: u32) {
        self.inner.lock().unwrap().receipt_delay = polls;
    }

    pub fn timestamp(&self) -> u64 {
        self.inner.lock().unwrap().state.timestamp
    }

    pub fn block_number(&self) -> u64 {
        self.inner.lock().unwrap().state.block_number
    }

    pub fn proposals(&self) -> Vec<IGovernor::createCall> {
        self.inner.lock().unwrap().state.proposals.clone()
    }

    pub fn sent_transactions(&self) -> Vec<SentTx> {
        self.inner.lock().unwrap().state.sent.clone()
    }

    pub fn live_snapshots(&self) -> usize {
        self.inner.lock().unwrap().snapshots.len()
    }

    fn time_remaining(&self, timestamp: u64) -> u64 {
        let elapsed = timestamp.saturating_sub(self.epoch_offset);
        (self.epoch_interval - elapsed % self.epoch_interval) % self.epoch_interval
    }
}

#[async_trait::async_trait]
impl ChainClient for MockChain {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        Ok(MOCK_CHAIN_ID)
    }

    async fn block_timestamp(&self) -> Result<u64, ChainError> {
        Ok(self.timestamp())
    }

    async fn call(&self, request: CallRequest) -> Result<Bytes, ChainError> {
        let inner = self.inner.lock().unwrap();
        let selector: [u8; 4] = request
            .data
            .get(..4)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| ChainError::Rejected("call data shorter than a selector".into()))?;
        if inner.reads_failing {
            return Err(ChainError::Rejected("connection reset".into()));
        }

        if request.to == self.safety_module
            && selector == ISafetyModule::getTimeRemainingInCurrentEpochCall::SELECTOR
        {
            let remaining = U256::from(self.time_remaining(inner.state.timestamp));
            return Ok(remaining.abi_encode().into());
        }
        if request.to == self.safety_module
            && selector == ISafetyModule::getEpochParametersCall::SELECTOR
        {
            let params = ISafetyModule::EpochParameters {
                interval: u128::from(self.epoch_interval),
                offset: u128::from(self.epoch_offset),
            };
            return Ok(params.abi_encode().into());
        }
        if request.to == self.safety_module
            && selector == ISafetyModule::getCurrentEpochCall::SELECTOR
        {
            let elapsed = inner.state.timestamp.saturating_sub(self.epoch_offset);
            return Ok(U256::from(elapsed / self.epoch_interval).abi_encode().into());
        }
        if request.to == self.governor && selector == IGovernor::getProposalsCountCall::SELECTOR {
            return Ok(U256::from(inner.state.proposals.len()).abi_encode().into());
        }

        inner
            .responses
            .get(&(request.to, selector))
            .cloned()
            .ok_or_else(|| ChainError::Rejected("execution reverted".into()))
    }

    async fn estimate_gas(&self, _request: CallRequest) -> Result<u64, ChainError> {
        Ok(MOCK_GAS_ESTIMATE)
    }

    async fn gas_price(&self) -> Result<u128, ChainError> {
        Ok(MOCK_GAS_PRICE)
    }

    async fn transaction_count(&self, address: Address) -> Result<u64, ChainError> {
        Ok(self.inner.lock().unwrap().state.nonces.get(&address).copied().unwrap_or(0))
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<B256, ChainError> {
        let envelope = TxEnvelope::decode_2718(&mut raw.as_ref())
            .map_err(|e| ChainError::Rejected(format!("undecodable transaction: {e}")))?;
        let from = envelope
            .recover_signer()
            .map_err(|e| ChainError::Rejected(format!("bad signature: {e}")))?;
        if envelope.chain_id() != Some(MOCK_CHAIN_ID) {
            return Err(ChainError::Rejected("wrong chain id".into()));
        }

        let mut inner = self.inner.lock().unwrap();
        let revert = std::mem::take(&mut inner.revert_next);
        if std::mem::take(&mut inner.fail_reads_after_send) {
            inner.reads_failing = true;
        }
        let state = &mut inner.state;

        let expected_nonce = state.nonces.get(&from).copied().unwrap_or(0);
        if envelope.nonce() != expected_nonce {
            return Err(ChainError::Rejected(format!(
                "nonce {} does not match account nonce {expected_nonce}",
                envelope.nonce()
            )));
        }
        state.nonces.insert(from, expected_nonce + 1);

        let to = envelope.to();
        let input = envelope.input().clone();
        if !revert && to == Some(self.governor) {
            if let Ok(call) = IGovernor::createCall::abi_decode(&input) {
                state.proposals.push(call);
            }
        }
        state.sent.push(SentTx { from, to, nonce: envelope.nonce(), input });

        state.mine_block();
        let tx_hash = *envelope.tx_hash();
        state.receipts.insert(
            tx_hash,
            TransactionReceipt {
                transaction_hash: tx_hash,
                block_number: Some(U64::from(state.block_number)),
                gas_used: U64::from(MOCK_GAS_ESTIMATE / 2),
                status: Some(U64::from(if revert { 0 } else { 1 })),
            },
        );
        Ok(tx_hash)
    }

    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, ChainError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.receipt_delay > 0 {
            inner.receipt_delay -= 1;
            return Ok(None);
        }
        Ok(inner.state.receipts.get(&hash).cloned())
    }
}

#[async_trait::async_trait]
impl DevChain for MockChain {
    async fn snapshot(&self) -> Result<SnapshotId, ChainError> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_snapshot;
        inner.next_snapshot += 1;
        let state = inner.state.clone();
        inner.snapshots.insert(id, state);
        Ok(SnapshotId::from(id))
    }

    async fn revert(&self, id: SnapshotId) -> Result<bool, ChainError> {
        let mut inner = self.inner.lock().unwrap();
        let Ok(id) = u64::try_from(id.0) else {
            return Ok(false);
        };
        let Some(state) = inner.snapshots.get(&id).cloned() else {
            return Ok(false);
        };
        inner.state = state;
        inner.snapshots.retain(|&taken, _| taken < id);
        Ok(true)
    }

    async fn increase_time(&self, seconds: u64) -> Result<(), ChainError> {
        self.inner.lock().unwrap().state.time_offset += seconds;
        Ok(())
    }

    async fn mine(&self) -> Result<(), ChainError> {
        self.inner.lock().unwrap().state.mine_block();
        Ok(())
    }

    async fn set_next_block_timestamp(&self, timestamp: u64) -> Result<(), ChainError> {
        self.inner.lock().unwrap().state.next_timestamp = Some(timestamp);
        Ok(())
    }
}
