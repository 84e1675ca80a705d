use alloy_primitives::B256;
use thiserror::Error;

use crate::signer::SignerError;

/// Errors raised while talking to a chain endpoint
#[derive(Debug, Error)]
pub enum ChainError {
    /// JSON-RPC transport or node-side error
    #[error("RPC request failed: {0}")]
    Transport(#[from] jsonrpsee::core::client::Error),

    /// The endpoint URL could not be used to build a client
    #[error("Invalid RPC endpoint {url}: {reason}")]
    InvalidEndpoint {
        /// Offending URL
        url: String,
        /// Why the client could not be built
        reason: String,
    },

    /// Return data did not match the bound ABI
    #[error("ABI decoding failed: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    /// The node refused the request without a transport error
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Signing the transaction failed
    #[error(transparent)]
    Signer(#[from] SignerError),

    /// The transaction was mined but reverted
    #[error("Transaction {tx_hash} reverted in block {block:?}")]
    Reverted {
        /// Hash of the reverted transaction
        tx_hash: B256,
        /// Block it was included in, if reported
        block: Option<u64>,
    },

    /// No receipt appeared within the polling budget
    #[error("No receipt for transaction {tx_hash} after {polls} polls")]
    ReceiptTimeout {
        /// Hash of the pending transaction
        tx_hash: B256,
        /// Number of polls performed
        polls: u32,
    },

    /// A quantity returned by the node does not fit the local type
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}
