//! Persistence gateway: load and save full board snapshots.

use crate::board::{
    domain::{Board, BoardLayout, BoardSnapshot, decode_board},
    ports::{SnapshotKey, SnapshotStore, SnapshotStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while reading or writing board snapshots.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] SnapshotStoreError),

    /// The board could not be encoded.
    #[error("failed to encode board snapshot: {0}")]
    Encode(Arc<serde_json::Error>),

    /// The write-behind worker could not be started outside a Tokio runtime.
    #[error("snapshot writer needs a Tokio runtime: {0}")]
    Runtime(Arc<tokio::runtime::TryCurrentError>),

    /// The write-behind worker has stopped and accepts no more snapshots.
    #[error("snapshot writer has stopped")]
    WriterStopped,
}

/// Result type for persistence gateway operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Reads and writes board snapshots through a [`SnapshotStore`].
#[derive(Debug, Clone)]
pub struct PersistenceGateway<S>
where
    S: SnapshotStore,
{
    store: Arc<S>,
    key: SnapshotKey,
}

impl<S> PersistenceGateway<S>
where
    S: SnapshotStore,
{
    /// Creates a gateway storing snapshots under `key`.
    #[must_use]
    pub const fn new(store: Arc<S>, key: SnapshotKey) -> Self {
        Self { store, key }
    }

    /// Returns the key snapshots are stored under.
    #[must_use]
    pub const fn key(&self) -> &SnapshotKey {
        &self.key
    }

    /// Loads the stored board.
    ///
    /// Returns `Ok(None)` when no snapshot is stored, or when the stored
    /// snapshot does not fit the layout. A rejected snapshot is removed from
    /// the store; it is never partially adopted.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Store`] when the store cannot be read.
    pub async fn load(&self, layout: &BoardLayout) -> PersistenceResult<Option<Board>> {
        let Some(bytes) = self.store.get(&self.key).await? else {
            return Ok(None);
        };
        match decode_board(&bytes, layout) {
            Ok(board) => Ok(Some(board)),
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding invalid board snapshot");
                if let Err(remove_err) = self.store.remove(&self.key).await {
                    warn!(
                        key = %self.key,
                        error = %remove_err,
                        "failed to remove invalid board snapshot"
                    );
                }
                Ok(None)
            }
        }
    }

    /// Writes the full board, replacing any stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when encoding or the store write fails.
    pub async fn save(&self, board: &Board) -> PersistenceResult<()> {
        let bytes = serde_json::to_vec(&BoardSnapshot::from(board))
            .map_err(|err| PersistenceError::Encode(Arc::new(err)))?;
        self.store.put(&self.key, &bytes).await?;
        debug!(key = %self.key, tasks = board.len(), "saved board snapshot");
        Ok(())
    }
}
