//! Filesystem adapters for snapshot storage.

mod config;
mod store;

pub use config::FsStoreConfig;
pub use store::FsSnapshotStore;
