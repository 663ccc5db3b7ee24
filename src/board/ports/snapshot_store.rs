//! Key-value storage port for board snapshots.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Durable key-value store holding serialized board snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing is stored.
    async fn get(&self, key: &SnapshotKey) -> SnapshotStoreResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, overwriting any prior value.
    async fn put(&self, key: &SnapshotKey, value: &[u8]) -> SnapshotStoreResult<()>;

    /// Removes the value stored under `key`.
    ///
    /// Removing a missing key succeeds.
    async fn remove(&self, key: &SnapshotKey) -> SnapshotStoreResult<()>;
}

/// Storage key of a board snapshot.
///
/// Keys are limited to ASCII letters, digits, `-`, `_` and `.`, and may not
/// start with `.`, so every key is also a plain file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SnapshotKey(String);

impl SnapshotKey {
    /// Key used when the host does not configure one.
    pub const DEFAULT: &'static str = "kanban-board";

    /// Creates a validated snapshot key.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::InvalidKey`] when the key is empty,
    /// starts with `.`, or contains other characters than ASCII letters,
    /// digits, `-`, `_` and `.`.
    pub fn new(value: impl Into<String>) -> SnapshotStoreResult<Self> {
        let raw = value.into();
        let is_valid = !raw.is_empty()
            && !raw.starts_with('.')
            && raw
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
        if !is_valid {
            return Err(SnapshotStoreError::InvalidKey(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SnapshotKey {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl TryFrom<String> for SnapshotKey {
    type Error = SnapshotStoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SnapshotKey> for String {
    fn from(value: SnapshotKey) -> Self {
        value.0
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The key is not a valid snapshot key.
    #[error("invalid snapshot key '{0}'")]
    InvalidKey(String),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
