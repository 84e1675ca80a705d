use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::chain::{ChainError, DevChain};
use crate::rpc::SnapshotId;

/// Errors returned by [`SnapshotStore`]
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// No snapshot was saved under this label
    #[error("No snapshot saved under label {label:?}")]
    NotFound {
        /// The requested label
        label: String,
    },

    /// The node no longer knows the stored handle
    #[error("Node rejected revert to snapshot {id} (label {label:?})")]
    RevertRejected {
        /// The requested label
        label: String,
        /// Handle the node refused
        id: SnapshotId,
    },

    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Named chain-state snapshots for resetting tests to a known point.
///
/// Loading a label reverts to its handle and immediately saves a fresh handle
/// under the same label, because nodes consume a snapshot on revert. The label
/// therefore tracks "the state as of the last load" rather than the original
/// capture; repeated loads without intervening writes are still equivalent.
///
/// A revert also discards every snapshot taken after the target, so loading a
/// label forgets the labels saved after it. A label whose handle the node
/// rejects is forgotten as well. Callers that need those states again check
/// [`SnapshotStore::contains`] and rebuild them.
///
/// Not synchronized: callers serialize access.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    handles: HashMap<String, Saved>,
    saves: u64,
}

#[derive(Debug, Clone, Copy)]
struct Saved {
    id: SnapshotId,
    /// Position in save order
    seq: u64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current state under `label`, replacing any previous handle.
    pub async fn save(
        &mut self,
        chain: &impl DevChain,
        label: &str,
    ) -> Result<SnapshotId, SnapshotError> {
        let id = chain.snapshot().await?;
        debug!(label, %id, "saved snapshot");
        self.saves += 1;
        self.handles.insert(label.to_string(), Saved { id, seq: self.saves });
        Ok(id)
    }

    /// Restore the state saved under `label`, then re-save it.
    pub async fn load(
        &mut self,
        chain: &impl DevChain,
        label: &str,
    ) -> Result<SnapshotId, SnapshotError> {
        let Saved { id, seq } = *self
            .handles
            .get(label)
            .ok_or_else(|| SnapshotError::NotFound { label: label.to_string() })?;

        if !chain.revert(id).await? {
            self.handles.remove(label);
            return Err(SnapshotError::RevertRejected { label: label.to_string(), id });
        }
        self.handles.retain(|_, saved| saved.seq < seq);
        debug!(label, %id, "reverted to snapshot");

        self.save(chain, label).await
    }

    pub fn contains(&self, label: &str) -> bool {
        self.handles.contains_key(label)
    }

    /// Current handle for `label`, if any.
    pub fn handle(&self, label: &str) -> Option<SnapshotId> {
        self.handles.get(label).map(|saved| saved.id)
    }
}
