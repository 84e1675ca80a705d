use alloy_primitives::{Address, Bytes, B256, U256, U64};
use jsonrpsee::{core::RpcResult, proc_macros::rpc};

use super::types::{BlockInfo, CallRequest, SnapshotId, TransactionReceipt};

/// The subset of the `eth_*` namespace used to read contracts and submit transactions.
#[rpc(client, namespace = "eth")]
pub trait EthApi {
    #[method(name = "chainId")]
    async fn chain_id(&self) -> RpcResult<U64>;

    /// Header fields of a block; transaction bodies are not requested.
    #[method(name = "getBlockByNumber")]
    async fn block_by_number(&self, tag: String, full: bool) -> RpcResult<Option<BlockInfo>>;

    #[method(name = "call")]
    async fn call(&self, request: CallRequest, tag: String) -> RpcResult<Bytes>;

    #[method(name = "estimateGas")]
    async fn estimate_gas(&self, request: CallRequest) -> RpcResult<U64>;

    #[method(name = "gasPrice")]
    async fn gas_price(&self) -> RpcResult<U256>;

    #[method(name = "getTransactionCount")]
    async fn transaction_count(&self, address: Address, tag: String) -> RpcResult<U64>;

    #[method(name = "sendRawTransaction")]
    async fn send_raw_transaction(&self, raw: Bytes) -> RpcResult<B256>;

    #[method(name = "getTransactionReceipt")]
    async fn transaction_receipt(&self, hash: B256) -> RpcResult<Option<TransactionReceipt>>;
}

/// Debug namespace exposed by local test nodes for chain-time and state control.
///
/// Return values differ between node implementations, so the ones this crate
/// does not interpret are taken as raw JSON.
#[rpc(client, namespace = "evm")]
pub trait EvmApi {
    #[method(name = "snapshot")]
    async fn snapshot(&self) -> RpcResult<SnapshotId>;

    #[method(name = "revert")]
    async fn revert(&self, id: SnapshotId) -> RpcResult<bool>;

    #[method(name = "increaseTime")]
    async fn increase_time(&self, seconds: u64) -> RpcResult<serde_json::Value>;

    #[method(name = "mine")]
    async fn mine(&self) -> RpcResult<serde_json::Value>;

    #[method(name = "setNextBlockTimestamp")]
    async fn set_next_block_timestamp(&self, timestamp: u64) -> RpcResult<serde_json::Value>;
}
