//! Colored console output for the `propose` binary.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use alloy_primitives::{Address, U256};
use colored::Colorize;

use crate::governance::{Proposal, ProposalSubmission};
use crate::units::from_base_units;

// ── Banner & Identity ──────────────────────────────────────────────

/// Print the startup banner with the target endpoint.
pub fn print_banner(rpc_url: &str, chain_id: u64) {
    println!();
    println!("{}", "=== Governance Proposal ===".blue().bold());
    println!("  RPC:          {}", rpc_url.cyan());
    println!("  Chain ID:     {}", chain_id.to_string().cyan());
}

/// Print the proposer identity.
pub fn print_proposer(proposer: &Address) {
    println!("  Proposer:     {}", format!("{proposer}").cyan());
}

// ── Proposal ───────────────────────────────────────────────────────

/// Print the transfer the proposal requests.
pub fn print_funding(recipient: &Address, amount: U256, decimals: u8) {
    println!(
        "  Funding:      {} tokens → {}",
        from_base_units(amount, decimals).cyan(),
        format!("{recipient}").cyan()
    );
}

/// Print every action of a proposal.
pub fn print_proposal(proposal: &Proposal) {
    println!();
    println!("{}", "Proposal:".blue().bold());
    println!("  {} {}", "Executor: ".dimmed(), format!("{}", proposal.executor()).cyan());
    println!("  {} {}", "IPFS hash:".dimmed(), proposal.ipfs_hash().to_string().cyan());
    for (i, action) in proposal.actions().enumerate() {
        println!(
            "    {}. {} {} [{}]",
            (i + 1).to_string().dimmed(),
            format!("{}", action.target).cyan(),
            action.signature,
            format!("0x{}", hex::encode(action.selector())).dimmed()
        );
    }
}

/// Print the raw call data for manual inspection.
pub fn print_calldata(submission: &ProposalSubmission) {
    println!();
    println!("{}", "Call data:".blue().bold());
    println!("{}", submission.calldata.to_string().dimmed());
}

// ── Submission ─────────────────────────────────────────────────────

/// Print the outcome of the submission.
pub fn print_submission(submission: &ProposalSubmission) {
    println!();
    match submission.tx_hash {
        Some(tx_hash) => {
            println!(
                "  {} Proposal {} created in {}",
                "OK".green().bold(),
                submission.proposal_id.to_string().cyan(),
                format!("{tx_hash}").cyan()
            );
            match submission.proposals_after {
                Some(after) if after != submission.proposal_id + U256::from(1) => println!(
                    "  {} Proposal count is now {}; verify the proposal id before acting on it.",
                    "WARNING:".yellow().bold(),
                    after.to_string().cyan()
                ),
                Some(_) => {}
                None => println!(
                    "  {} Could not re-read the proposal count; verify the proposal id on-chain.",
                    "WARNING:".yellow().bold()
                ),
            }
        }
        None => {
            println!(
                "  {} Dry run: transaction not sent (next proposal id {}).",
                "NOTE:".yellow().bold(),
                submission.proposal_id.to_string().cyan()
            );
        }
    }
    println!(
        "  {}",
        "Re-running creates a duplicate proposal; check the governor first.".dimmed()
    );
}
