use alloy_primitives::keccak256;
use alloy_sol_types::SolCall;

/// Compute the Solidity function selector (first 4 bytes of keccak256(signature)).
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Canonical signature string of a bound call, e.g. `transfer(address,address,uint256)`.
///
/// Governance proposals carry the signature and the argument blob separately,
/// so the governor re-attaches the selector when the action executes.
pub fn call_signature<C: SolCall>() -> &'static str {
    C::SIGNATURE
}

/// Strip the 4-byte selector from ABI call data, leaving the encoded arguments.
pub fn strip_selector(calldata: &[u8]) -> Option<&[u8]> {
    calldata.get(4..)
}
