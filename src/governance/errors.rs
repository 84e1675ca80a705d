use alloy_primitives::Address;
use std::path::PathBuf;
use thiserror::Error;

use crate::chain::ChainError;
use crate::signer::SignerError;
use crate::units::AmountError;

/// Errors raised while building or submitting a governance proposal
#[derive(Debug, Error)]
pub enum GovernanceError {
    /// A proposal needs at least one action
    #[error("Proposal has no actions")]
    EmptyProposal,

    /// Per-action arrays of a proposal differ in length
    #[error("Proposal arrays differ in length: {targets} targets, {values} values, {signatures} signatures, {calldatas} calldatas, {delegatecalls} delegatecall flags")]
    MismatchedActions {
        targets: usize,
        values: usize,
        signatures: usize,
        calldatas: usize,
        delegatecalls: usize,
    },

    /// The IPFS reference is not a 32-byte hex digest
    #[error("Invalid IPFS hash {0:?}: expected 32 bytes of hex")]
    InvalidIpfsHash(String),

    /// The deployment config could not be read
    #[error("Failed to read deployment config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The deployment config is not valid JSON for this schema
    #[error("Invalid deployment config: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    /// The configured funding amount is not a non-negative decimal
    #[error(transparent)]
    Amount(#[from] AmountError),

    /// No explicit signer and no default identity in the deployment config
    #[error("No signing identity: pass a private key or set deployerPrivateKey in the deployment config")]
    NoSigningIdentity,

    /// The requested signer has no key loaded
    #[error("Signer {0} is not loaded")]
    SignerUnavailable(Address),

    #[error(transparent)]
    Signer(#[from] SignerError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}
