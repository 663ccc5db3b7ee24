//! Port contracts for the board engine.
//!
//! Ports define infrastructure-agnostic interfaces used by board services:
//! snapshot storage, board transition observers, and completion subscribers.

pub mod observer;
pub mod snapshot_store;

pub use observer::{
    BoardObserver, BoardObserverError, BoardTransition, CompletionSubscriber, TransitionCause,
};
pub use snapshot_store::{SnapshotKey, SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

#[cfg(test)]
pub use observer::MockCompletionSubscriber;
#[cfg(test)]
pub use snapshot_store::MockSnapshotStore;
