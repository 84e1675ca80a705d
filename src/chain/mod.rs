//! Chain collaborators
//!
//! Two seams separate this crate from the network:
//!
//! - [`ChainClient`] reads contracts and submits signed transactions
//!   (`eth_*` namespace).
//! - [`DevChain`] controls time and state on a local test node
//!   (`evm_*` debug namespace).
//!
//! In production both are implemented by [`crate::rpc::RpcClient`]; tests
//! use an in-memory double.

pub mod errors;
pub mod sender;

pub use errors::ChainError;
pub use sender::{SendOptions, TxSender};

use crate::rpc::{CallRequest, SnapshotId, TransactionReceipt};
use alloy_primitives::{Address, Bytes, B256};
use alloy_sol_types::SolCall;

/// Read access to contracts and raw transaction submission.
#[async_trait::async_trait]
pub trait ChainClient: Send + Sync {
    async fn chain_id(&self) -> Result<u64, ChainError>;

    /// Timestamp of the latest block.
    async fn block_timestamp(&self) -> Result<u64, ChainError>;

    /// Execute a read-only call against the latest block.
    async fn call(&self, request: CallRequest) -> Result<Bytes, ChainError>;

    async fn estimate_gas(&self, request: CallRequest) -> Result<u64, ChainError>;

    async fn gas_price(&self) -> Result<u128, ChainError>;

    /// Pending transaction count (next usable nonce) of `address`.
    async fn transaction_count(&self, address: Address) -> Result<u64, ChainError>;

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<B256, ChainError>;

    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, ChainError>;
}

/// Time and state control of a simulated chain.
#[async_trait::async_trait]
pub trait DevChain: Send + Sync {
    /// Capture the current chain state.
    async fn snapshot(&self) -> Result<SnapshotId, ChainError>;

    /// Restore a captured state. Returns `false` if the node does not know `id`.
    ///
    /// Local nodes consume the snapshot on revert, so `id` is unusable afterwards.
    async fn revert(&self, id: SnapshotId) -> Result<bool, ChainError>;

    /// Shift the timestamp of the next mined block forward by `seconds`.
    async fn increase_time(&self, seconds: u64) -> Result<(), ChainError>;

    /// Mine one block.
    async fn mine(&self) -> Result<(), ChainError>;

    /// Fix the timestamp of the next mined block.
    async fn set_next_block_timestamp(&self, timestamp: u64) -> Result<(), ChainError>;
}

/// Call a bound view function on `to` and decode its return value.
pub async fn read_contract<C, T>(client: &C, to: Address, call: T) -> Result<T::Return, ChainError>
where
    C: ChainClient + ?Sized,
    T: SolCall + Send,
{
    let data = client.call(CallRequest::new(to, call.abi_encode())).await?;
    Ok(T::abi_decode_returns(&data)?)
}
