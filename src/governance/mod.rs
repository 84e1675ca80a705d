//! Governance proposal construction and submission
//!
//! Builds a single-action proposal that releases tokens from the community
//! treasury to a configured multisig, and submits it to the governor:
//!
//! ```text
//!   getProposalsCount()            → proposal id (informational)
//!   Treasury.transfer(token, multisig, amount)
//!     ↓ signature + abi.encode(args)
//!   Governor.create(timelock, [treasury], [0], [sig], [args], [false], ipfsHash)
//!     ↓ populate → log call data → sign → send → wait for receipt
//! ```

pub mod config;
pub mod errors;
pub mod proposal;
pub mod submit;

pub use config::DeploymentConfig;
pub use errors::GovernanceError;
pub use proposal::{IpfsHash, Proposal, ProposalAction, ProposalBuilder};
pub use submit::{
    resolve_signer, submit_proposal, ProposalRequest, ProposalSubmission, SubmitOptions,
};
