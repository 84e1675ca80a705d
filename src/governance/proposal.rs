use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;
use std::fmt;
use std::str::FromStr;

use super::errors::GovernanceError;
use crate::bindings::{call_signature, function_selector, strip_selector, IGovernor, ITreasury};

/// Digest of the proposal description pinned on IPFS, stored on-chain as `bytes32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpfsHash(pub B256);

impl FromStr for IpfsHash {
    type Err = GovernanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes =
            hex::decode(digits).map_err(|_| GovernanceError::InvalidIpfsHash(s.to_string()))?;
        if bytes.len() != 32 {
            return Err(GovernanceError::InvalidIpfsHash(s.to_string()));
        }
        Ok(Self(B256::from_slice(&bytes)))
    }
}

impl fmt::Display for IpfsHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One call the executor performs if the proposal passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalAction {
    pub target: Address,
    pub value: U256,
    /// Function signature, e.g. `transfer(address,address,uint256)`
    pub signature: String,
    /// ABI-encoded arguments, without selector
    pub calldata: Bytes,
    pub with_delegatecall: bool,
}

impl ProposalAction {
    /// An action invoking a bound call on `target` with no value attached.
    ///
    /// The governor re-attaches the selector at execution time, so only the
    /// encoded arguments are kept.
    pub fn call<T: SolCall>(target: Address, call: &T) -> Self {
        let encoded = call.abi_encode();
        Self {
            target,
            value: U256::ZERO,
            signature: call_signature::<T>().to_string(),
            calldata: Bytes::copy_from_slice(strip_selector(&encoded).unwrap_or_default()),
            with_delegatecall: false,
        }
    }

    /// Selector the governor derives from [`Self::signature`] at execution time.
    pub fn selector(&self) -> [u8; 4] {
        function_selector(&self.signature)
    }
}

/// A governance proposal in the governor's `create` argument layout.
///
/// Immutable once built: the per-action arrays are guaranteed to have equal,
/// non-zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    call: IGovernor::createCall,
}

impl Proposal {
    /// Start a proposal executed by `executor` (the timelock).
    pub fn builder(executor: Address, ipfs_hash: IpfsHash) -> ProposalBuilder {
        ProposalBuilder { executor, ipfs_hash, actions: Vec::new() }
    }

    /// A single-action proposal moving `amount` of `token` out of the treasury to `recipient`.
    pub fn treasury_transfer(
        executor: Address,
        treasury: Address,
        token: Address,
        recipient: Address,
        amount: U256,
        ipfs_hash: IpfsHash,
    ) -> Result<Self, GovernanceError> {
        Self::builder(executor, ipfs_hash)
            .action(ProposalAction::call(
                treasury,
                &ITreasury::transferCall { token, recipient, amount },
            ))
            .build()
    }

    /// Validate a decoded `create` call.
    pub fn from_create_call(call: IGovernor::createCall) -> Result<Self, GovernanceError> {
        let n = call.targets.len();
        if n == 0 {
            return Err(GovernanceError::EmptyProposal);
        }
        if call.values.len() != n
            || call.signatures.len() != n
            || call.calldatas.len() != n
            || call.withDelegatecalls.len() != n
        {
            return Err(GovernanceError::MismatchedActions {
                targets: n,
                values: call.values.len(),
                signatures: call.signatures.len(),
                calldatas: call.calldatas.len(),
                delegatecalls: call.withDelegatecalls.len(),
            });
        }
        Ok(Self { call })
    }

    pub fn executor(&self) -> Address {
        self.call.executor
    }

    pub fn ipfs_hash(&self) -> IpfsHash {
        IpfsHash(self.call.ipfsHash)
    }

    pub fn len(&self) -> usize {
        self.call.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.call.targets.is_empty()
    }

    /// Actions in execution order.
    pub fn actions(&self) -> impl Iterator<Item = ProposalAction> + '_ {
        (0..self.len()).map(|i| ProposalAction {
            target: self.call.targets[i],
            value: self.call.values[i],
            signature: self.call.signatures[i].clone(),
            calldata: self.call.calldatas[i].clone(),
            with_delegatecall: self.call.withDelegatecalls[i],
        })
    }

    /// The typed governor call.
    pub fn create_call(&self) -> &IGovernor::createCall {
        &self.call
    }

    /// Raw call data for `create(...)`.
    pub fn encode(&self) -> Bytes {
        self.call.abi_encode().into()
    }
}

/// Accumulates actions for a [`Proposal`].
#[derive(Debug, Clone)]
pub struct ProposalBuilder {
    executor: Address,
    ipfs_hash: IpfsHash,
    actions: Vec<ProposalAction>,
}

impl ProposalBuilder {
    pub fn action(mut self, action: ProposalAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn build(self) -> Result<Proposal, GovernanceError> {
        if self.actions.is_empty() {
            return Err(GovernanceError::EmptyProposal);
        }

        let mut call = IGovernor::createCall {
            executor: self.executor,
            targets: Vec::with_capacity(self.actions.len()),
            values: Vec::with_capacity(self.actions.len()),
            signatures: Vec::with_capacity(self.actions.len()),
            calldatas: Vec::with_capacity(self.actions.len()),
            withDelegatecalls: Vec::with_capacity(self.actions.len()),
            ipfsHash: self.ipfs_hash.0,
        };
        for action in self.actions {
            call.targets.push(action.target);
            call.values.push(action.value);
            call.signatures.push(action.signature);
            call.calldatas.push(action.calldata);
            call.withDelegatecalls.push(action.with_delegatecall);
        }

        Ok(Proposal { call })
    }
}
