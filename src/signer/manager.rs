use alloy_primitives::{Address, Signature, B256};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::errors::SignerError;

/// Keys of the accounts this process may send transactions from.
///
/// Keys enter through [`SignerManager::import_hex_key`] (CLI flag,
/// environment or deployment config) and never leave; callers only get
/// addresses and signatures back.
#[derive(Debug, Default)]
pub struct SignerManager {
    keys: RwLock<HashMap<Address, PrivateKeySigner>>,
}

impl SignerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a hex private key, `0x` optional. Re-importing a key is a no-op.
    pub async fn import_hex_key(&self, hex_key: &str) -> Result<Address, SignerError> {
        let key = hex_key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| SignerError::InvalidKey(e.to_string()))?;

        let account = key.address();
        self.keys.write().await.insert(account, key);
        Ok(account)
    }

    pub async fn can_sign(&self, account: &Address) -> bool {
        self.keys.read().await.contains_key(account)
    }

    /// Sign a 32-byte digest as `account`.
    pub async fn sign_hash(&self, account: &Address, hash: B256) -> Result<Signature, SignerError> {
        let keys = self.keys.read().await;
        let key = keys.get(account).ok_or(SignerError::UnknownAccount(*account))?;
        Ok(key.sign_hash(&hash).await?)
    }
}
