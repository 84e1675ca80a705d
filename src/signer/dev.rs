//! Well-known accounts of local test nodes.
//!
//! Derived from the mnemonic "test test test test test test test test test test test junk".
//! These keys are public knowledge and only ever hold value on a local chain.

use alloy_primitives::{address, Address};

use super::SignerManager;

/// Private keys of the first five prefunded accounts
pub const DEV_PRIVATE_KEYS: [&str; 5] = [
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
    "7c852118294e51e653712a81e05800f419141751be58f605c371e15141b007a6",
    "47e179ec197488593b187f80a00eb0da91f1b9d0b13f8733639f19c30a34926a",
];

/// Addresses matching [`DEV_PRIVATE_KEYS`], in the same order
pub fn dev_accounts() -> Vec<Address> {
    vec![
        address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
        address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
        address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"),
        address!("90F79bf6EB2c4f870365E785982E1f101E93b906"),
        address!("15d34AAf54267DB7D7c367839AAf71A00a2C6A65"),
    ]
}

/// A signer manager loaded with every dev key.
pub async fn setup_dev_signers() -> SignerManager {
    let manager = SignerManager::new();
    for key in DEV_PRIVATE_KEYS {
        manager.import_hex_key(key).await.expect("dev keys are valid");
    }
    manager
}
