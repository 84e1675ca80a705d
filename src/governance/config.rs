use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use super::errors::GovernanceError;
use crate::constants::DEFAULT_TOKEN_DECIMALS;
use crate::units::to_base_units;

fn default_token_decimals() -> u8 {
    DEFAULT_TOKEN_DECIMALS
}

/// Deployment parameters consumed by proposal submission.
///
/// Read once per invocation from a JSON file:
/// ```json
/// {
///   "multisigAddress": "0x...",
///   "fundingAmount": "1500000",
///   "tokenDecimals": 18,
///   "deployerPrivateKey": "0x..."
/// }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Recipient of the treasury transfer
    pub multisig_address: Address,
    /// Amount to transfer, in whole tokens (decimal string)
    pub funding_amount: String,
    /// Decimals of the transferred token
    #[serde(default = "default_token_decimals")]
    pub token_decimals: u8,
    /// Default signing identity when none is given explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployer_private_key: Option<String>,
}

impl fmt::Debug for DeploymentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentConfig")
            .field("multisig_address", &self.multisig_address)
            .field("funding_amount", &self.funding_amount)
            .field("token_decimals", &self.token_decimals)
            .field("deployer_private_key", &self.deployer_private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl DeploymentConfig {
    /// Load the config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GovernanceError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|source| GovernanceError::ConfigIo { path: path.to_path_buf(), source })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, GovernanceError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Funding amount scaled to the token's base units.
    pub fn funding_amount_base_units(&self) -> Result<U256, GovernanceError> {
        Ok(to_base_units(&self.funding_amount, self.token_decimals)?)
    }
}
