//! Snapshot store keeping one JSON file per key inside a directory.
//!
//! Access is scoped to a single capability directory. Writes go to a
//! temporary sibling file that is synced and then renamed over the target,
//! so a crash leaves either the old or the new snapshot in place.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{ErrorKind, Write};
use std::sync::Arc;
use tracing::warn;

use crate::board::ports::{SnapshotKey, SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

const SNAPSHOT_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// Snapshot store backed by files in one directory.
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    dir: Arc<Dir>,
}

impl FsSnapshotStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the directory cannot
    /// be created or opened.
    pub fn open(root: &Utf8Path) -> SnapshotStoreResult<Self> {
        Dir::create_ambient_dir_all(root, ambient_authority())
            .map_err(SnapshotStoreError::persistence)?;
        let dir =
            Dir::open_ambient_dir(root, ambient_authority()).map_err(SnapshotStoreError::persistence)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    async fn run_blocking<T, F>(&self, operation: F) -> SnapshotStoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Dir) -> std::io::Result<T> + Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || operation(&dir))
            .await
            .map_err(SnapshotStoreError::persistence)?
            .map_err(SnapshotStoreError::persistence)
    }
}

fn file_name(key: &SnapshotKey, extension: &str) -> String {
    format!("{key}.{extension}")
}

fn write_atomically(dir: &Dir, target: &str, temp: &str, value: &[u8]) -> std::io::Result<()> {
    let written = write_synced(dir, temp, value).and_then(|()| dir.rename(temp, dir, target));
    if written.is_err() {
        discard_temp(dir, temp);
    }
    written
}

fn write_synced(dir: &Dir, temp: &str, value: &[u8]) -> std::io::Result<()> {
    let mut file = dir.create(temp)?;
    file.write_all(value)?;
    file.sync_all()
}

fn discard_temp(dir: &Dir, temp: &str) {
    match dir.remove_file(temp) {
        Err(err) if err.kind() != ErrorKind::NotFound => {
            warn!(file = temp, error = %err, "failed to remove temporary snapshot file");
        }
        _ => {}
    }
}

#[async_trait]
impl SnapshotStore for FsSnapshotStore {
    async fn get(&self, key: &SnapshotKey) -> SnapshotStoreResult<Option<Vec<u8>>> {
        let target = file_name(key, SNAPSHOT_EXTENSION);
        self.run_blocking(move |dir| match dir.read(&target) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        })
        .await
    }

    async fn put(&self, key: &SnapshotKey, value: &[u8]) -> SnapshotStoreResult<()> {
        let target = file_name(key, SNAPSHOT_EXTENSION);
        let temp = file_name(key, TEMP_EXTENSION);
        let bytes = value.to_vec();
        self.run_blocking(move |dir| write_atomically(dir, &target, &temp, &bytes))
            .await
    }

    async fn remove(&self, key: &SnapshotKey) -> SnapshotStoreResult<()> {
        let target = file_name(key, SNAPSHOT_EXTENSION);
        self.run_blocking(move |dir| match dir.remove_file(&target) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        })
        .await
    }
}
