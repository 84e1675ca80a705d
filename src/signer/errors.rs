use alloy_primitives::Address;
use thiserror::Error;

/// Failures while importing keys or signing transactions
#[derive(Debug, Error)]
pub enum SignerError {
    /// No key was imported for the sending account
    #[error("No key loaded for account {0}")]
    UnknownAccount(Address),

    /// The key material could not be parsed; the key itself is never echoed
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Signing failed: {0}")]
    Signing(#[from] alloy_signer::Error),
}
