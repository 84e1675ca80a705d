//! # Safety-module governance tooling
//!
//! Submits treasury-funding proposals to an on-chain governor and provides a
//! dev-chain harness (time control, epoch advancement, named snapshots) for
//! exercising a staking safety module against a local test node.

pub mod bindings;
pub mod chain;
pub mod cli;
pub mod constants;
pub mod devnet;
pub mod governance;
pub mod logging;
pub mod output;
pub mod rpc;
pub mod signer;
pub mod staking;
pub mod units;
