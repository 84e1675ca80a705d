//! Proposer and staker keys, and legacy transaction signing.

pub mod dev;
pub mod errors;
pub mod manager;
pub mod tx;

pub use errors::SignerError;
pub use manager::SignerManager;
pub use tx::SignedTx;
