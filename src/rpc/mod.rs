//! JSON-RPC transport
//!
//! Client-side bindings for the `eth_*` and `evm_*` namespaces, and
//! [`RpcClient`], the HTTP implementation of the chain collaborator traits.

pub mod api;
pub mod types;

pub use api::{EthApiClient, EvmApiClient};
pub use types::{BlockInfo, CallRequest, SnapshotId, TransactionReceipt};

use crate::chain::{ChainClient, ChainError, DevChain};
use alloy_primitives::{Address, Bytes, B256};
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use std::time::Duration;
use tracing::debug;

const LATEST: &str = "latest";
const PENDING: &str = "pending";

/// HTTP JSON-RPC client for a chain endpoint.
#[derive(Debug)]
pub struct RpcClient {
    inner: HttpClient,
    url: String,
}

impl RpcClient {
    /// Connect to `url` with the transport's default request timeout.
    pub fn new(url: &str) -> Result<Self, ChainError> {
        Self::build(url, HttpClientBuilder::default())
    }

    /// Connect to `url`, failing requests that take longer than `timeout`.
    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, ChainError> {
        Self::build(url, HttpClientBuilder::default().request_timeout(timeout))
    }

    fn build(url: &str, builder: HttpClientBuilder) -> Result<Self, ChainError> {
        let inner = builder.build(url).map_err(|e| ChainError::InvalidEndpoint {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { inner, url: url.to_string() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl ChainClient for RpcClient {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        Ok(EthApiClient::chain_id(&self.inner).await?.to::<u64>())
    }

    async fn block_timestamp(&self) -> Result<u64, ChainError> {
        let block = EthApiClient::block_by_number(&self.inner, LATEST.to_string(), false)
            .await?
            .ok_or_else(|| ChainError::Rejected("latest block not available".into()))?;
        Ok(block.timestamp.to::<u64>())
    }

    async fn call(&self, request: CallRequest) -> Result<Bytes, ChainError> {
        Ok(EthApiClient::call(&self.inner, request, LATEST.to_string()).await?)
    }

    async fn estimate_gas(&self, request: CallRequest) -> Result<u64, ChainError> {
        Ok(EthApiClient::estimate_gas(&self.inner, request).await?.to::<u64>())
    }

    async fn gas_price(&self) -> Result<u128, ChainError> {
        let price = EthApiClient::gas_price(&self.inner).await?;
        u128::try_from(price).map_err(|_| ChainError::OutOfRange(format!("gas price {price}")))
    }

    async fn transaction_count(&self, address: Address) -> Result<u64, ChainError> {
        let count =
            EthApiClient::transaction_count(&self.inner, address, PENDING.to_string()).await?;
        Ok(count.to::<u64>())
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> Result<B256, ChainError> {
        Ok(EthApiClient::send_raw_transaction(&self.inner, raw).await?)
    }

    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, ChainError> {
        Ok(EthApiClient::transaction_receipt(&self.inner, hash).await?)
    }
}

#[async_trait::async_trait]
impl DevChain for RpcClient {
    async fn snapshot(&self) -> Result<SnapshotId, ChainError> {
        let id = EvmApiClient::snapshot(&self.inner).await?;
        debug!(%id, "evm_snapshot");
        Ok(id)
    }

    async fn revert(&self, id: SnapshotId) -> Result<bool, ChainError> {
        let reverted = EvmApiClient::revert(&self.inner, id).await?;
        debug!(%id, reverted, "evm_revert");
        Ok(reverted)
    }

    async fn increase_time(&self, seconds: u64) -> Result<(), ChainError> {
        EvmApiClient::increase_time(&self.inner, seconds).await?;
        Ok(())
    }

    async fn mine(&self) -> Result<(), ChainError> {
        EvmApiClient::mine(&self.inner).await?;
        Ok(())
    }

    async fn set_next_block_timestamp(&self, timestamp: u64) -> Result<(), ChainError> {
        EvmApiClient::set_next_block_timestamp(&self.inner, timestamp).await?;
        Ok(())
    }
}
