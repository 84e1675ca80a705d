use alloy_consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy_eips::eip2718::Encodable2718;
use alloy_primitives::{keccak256, Address, Bytes, B256};

use super::errors::SignerError;
use super::manager::SignerManager;

/// A signed transaction ready for `eth_sendRawTransaction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTx {
    /// Transaction hash (keccak256 of the raw encoding)
    pub hash: B256,
    /// EIP-2718 encoded envelope
    pub raw: Bytes,
}

impl SignerManager {
    /// Sign a legacy transaction with replay protection from its `chain_id`.
    pub async fn sign_transaction(
        &self,
        from: &Address,
        tx: TxLegacy,
    ) -> Result<SignedTx, SignerError> {
        let signature = self.sign_hash(from, tx.signature_hash()).await?;
        let envelope = TxEnvelope::from(tx.into_signed(signature));
        let raw = envelope.encoded_2718();

        Ok(SignedTx { hash: keccak256(&raw), raw: raw.into() })
    }
}
