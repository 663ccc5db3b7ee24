//! In-memory snapshot store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{SnapshotKey, SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Thread-safe in-memory snapshot store.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    entries: Arc<RwLock<HashMap<SnapshotKey, Vec<u8>>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a raw value.
    #[must_use]
    pub fn with_entry(key: SnapshotKey, value: impl Into<Vec<u8>>) -> Self {
        let entries = HashMap::from([(key, value.into())]);
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn get(&self, key: &SnapshotKey) -> SnapshotStoreResult<Option<Vec<u8>>> {
        let entries = self.entries.read().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &SnapshotKey, value: &[u8]) -> SnapshotStoreResult<()> {
        let mut entries = self.entries.write().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        entries.insert(key.clone(), value.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &SnapshotKey) -> SnapshotStoreResult<()> {
        let mut entries = self.entries.write().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        entries.remove(key);
        Ok(())
    }
}
