//! Application services for the board engine.

mod completion;
mod persistence;
mod session;
mod writer;

pub use completion::CompletionEmitter;
pub use persistence::{PersistenceError, PersistenceGateway, PersistenceResult};
pub use session::{BoardSession, BoardSessionError, BoardSessionResult, SessionReport};
pub use writer::SnapshotWriter;
