//! Typed contract bindings
//!
//! The governor, treasury, token and safety-module contracts are external
//! collaborators: only their compiled interface lives here. ABI encoding and
//! decoding is delegated to `alloy-sol-types`.

pub mod contracts;
pub mod selectors;

pub use contracts::{IGovernor, ISafetyModule, ITreasury, IERC20};
pub use selectors::{call_signature, function_selector, strip_selector};
