//! In-memory adapters for snapshot storage and completion delivery.

mod store;
mod subscriber;

pub use store::InMemorySnapshotStore;
pub use subscriber::RecordingSubscriber;
