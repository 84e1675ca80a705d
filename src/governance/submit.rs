use alloy_primitives::{Address, Bytes, B256, U256};
use tracing::{info, warn};

use super::config::DeploymentConfig;
use super::errors::GovernanceError;
use super::proposal::{IpfsHash, Proposal};
use crate::bindings::IGovernor;
use crate::chain::{read_contract, ChainClient, TxSender};
use crate::signer::SignerManager;

/// Contracts and identity a proposal submission runs against.
#[derive(Debug, Clone)]
pub struct ProposalRequest {
    pub ipfs_hash: IpfsHash,
    /// Token moved out of the treasury
    pub token: Address,
    pub governor: Address,
    /// Executor of the proposal
    pub timelock: Address,
    /// Community treasury holding the funds
    pub treasury: Address,
    /// Proposer; falls back to the deployment config's default identity
    pub signer: Option<Address>,
}

#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Build and print the transaction without sending it
    pub dry_run: bool,
}

/// Outcome of [`submit_proposal`].
#[derive(Debug, Clone)]
pub struct ProposalSubmission {
    /// Proposal count read before submission; the governor assigns ids sequentially
    pub proposal_id: U256,
    pub proposer: Address,
    pub proposal: Proposal,
    /// Raw `create(...)` call data
    pub calldata: Bytes,
    /// `None` on a dry run
    pub tx_hash: Option<B256>,
    /// Proposal count read after confirmation; `None` on a dry run or if the recount failed
    pub proposals_after: Option<U256>,
}

/// Pick the proposer: the explicit signer if loaded, else the config's default key.
pub async fn resolve_signer(
    signers: &SignerManager,
    config: &DeploymentConfig,
    explicit: Option<Address>,
) -> Result<Address, GovernanceError> {
    if let Some(address) = explicit {
        if !signers.can_sign(&address).await {
            return Err(GovernanceError::SignerUnavailable(address));
        }
        return Ok(address);
    }

    match &config.deployer_private_key {
        Some(key) => Ok(signers.import_hex_key(key).await?),
        None => Err(GovernanceError::NoSigningIdentity),
    }
}

/// Submit a treasury-funding proposal to the governor and wait for confirmation.
///
/// The proposal count read up front is informational only; nothing guards
/// against another proposal landing concurrently, and re-running creates a
/// duplicate proposal.
pub async fn submit_proposal<C: ChainClient>(
    sender: &TxSender<C>,
    config: &DeploymentConfig,
    request: &ProposalRequest,
    options: &SubmitOptions,
) -> Result<ProposalSubmission, GovernanceError> {
    let proposer = resolve_signer(sender.signers(), config, request.signer).await?;

    let proposal_id = read_contract(
        sender.client().as_ref(),
        request.governor,
        IGovernor::getProposalsCountCall {},
    )
    .await?;
    info!(governor = %request.governor, %proposal_id, "read proposal count");

    let amount = config.funding_amount_base_units()?;
    let proposal = Proposal::treasury_transfer(
        request.timelock,
        request.treasury,
        request.token,
        config.multisig_address,
        amount,
        request.ipfs_hash,
    )?;

    let calldata = proposal.encode();
    let tx = sender.populate(proposer, request.governor, calldata.clone(), U256::ZERO).await?;
    info!(
        %proposer,
        governor = %request.governor,
        nonce = tx.nonce,
        gas_limit = tx.gas_limit,
        calldata = %calldata,
        "populated create-proposal transaction"
    );

    let mut submission = ProposalSubmission {
        proposal_id,
        proposer,
        proposal,
        calldata,
        tx_hash: None,
        proposals_after: None,
    };
    if options.dry_run {
        info!("dry run, transaction not sent");
        return Ok(submission);
    }

    let receipt = sender.send(proposer, tx).await?;
    submission.tx_hash = Some(receipt.transaction_hash);

    // The proposal exists once the receipt is in; the recount only informs.
    match read_contract(
        sender.client().as_ref(),
        request.governor,
        IGovernor::getProposalsCountCall {},
    )
    .await
    {
        Ok(proposals_after) => {
            if proposals_after != proposal_id + U256::from(1) {
                warn!(
                    expected = %(proposal_id + U256::from(1)),
                    actual = %proposals_after,
                    "proposal count moved unexpectedly; verify the proposal id on-chain"
                );
            }
            submission.proposals_after = Some(proposals_after);
        }
        Err(err) => {
            warn!(tx_hash = ?submission.tx_hash, %err, "proposal created but recount failed");
        }
    }

    Ok(submission)
}
