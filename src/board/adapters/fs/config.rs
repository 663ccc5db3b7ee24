//! Host configuration for the filesystem snapshot store.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use super::FsSnapshotStore;
use crate::board::ports::{SnapshotKey, SnapshotStoreResult};

/// Where board snapshots live on disk.
///
/// Deserializes from host configuration as
/// `{ "root": "/var/lib/kanban", "key": "team-board" }`; `key` defaults to
/// [`SnapshotKey::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FsStoreConfig {
    root: Utf8PathBuf,
    #[serde(default)]
    key: SnapshotKey,
}

impl FsStoreConfig {
    /// Creates a configuration using the default snapshot key.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            key: SnapshotKey::default(),
        }
    }

    /// Replaces the snapshot key.
    #[must_use]
    pub fn with_key(mut self, key: SnapshotKey) -> Self {
        self.key = key;
        self
    }

    /// Returns the snapshot directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the key the board is stored under.
    #[must_use]
    pub const fn key(&self) -> &SnapshotKey {
        &self.key
    }

    /// Opens the store, creating the snapshot directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::ports::SnapshotStoreError::Persistence`] when
    /// the directory cannot be created or opened.
    pub fn open_store(&self) -> SnapshotStoreResult<FsSnapshotStore> {
        FsSnapshotStore::open(&self.root)
    }
}
