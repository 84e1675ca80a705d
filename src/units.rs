//! Token amount conversion between decimal strings and base units.

use alloy_primitives::utils::{format_units, parse_units};
use alloy_primitives::U256;
use thiserror::Error;

/// A token amount that cannot be represented in base units
#[derive(Debug, Error)]
#[error("Invalid token amount {amount:?}: {reason}")]
pub struct AmountError {
    /// The rejected input
    pub amount: String,
    /// Parser diagnostic
    pub reason: String,
}

/// Convert a decimal token amount (e.g. `"1.5"`) to base units.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    let trimmed = amount.trim();
    let invalid = |reason: String| AmountError { amount: amount.to_string(), reason };

    if trimmed.starts_with('-') {
        return Err(invalid("amount must not be negative".into()));
    }
    let parsed = parse_units(trimmed, decimals).map_err(|e| invalid(e.to_string()))?;
    Ok(parsed.get_absolute())
}

/// Render base units as a decimal token amount.
pub fn from_base_units(amount: U256, decimals: u8) -> String {
    format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
}
