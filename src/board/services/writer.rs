//! Write-behind snapshot persistence.
//!
//! Committed boards are handed to a background worker over a channel, so
//! board operations never wait on storage. The worker saves only the newest
//! board queued since its last write; intermediate boards are superseded.

use crate::board::{
    domain::Board,
    ports::{BoardObserver, BoardObserverError, BoardTransition, SnapshotStore},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::{PersistenceError, PersistenceGateway, PersistenceResult};

#[derive(Debug)]
enum WriteCommand {
    Save(Board),
    Flush(oneshot::Sender<()>),
}

type FailureLog = Arc<Mutex<Vec<PersistenceError>>>;

/// Board observer that persists committed boards in the background.
///
/// Save failures are logged and kept until [`SnapshotWriter::take_failures`]
/// collects them. Dropping the writer lets the worker finish the queued
/// saves and stop.
#[derive(Debug)]
pub struct SnapshotWriter {
    sender: mpsc::UnboundedSender<WriteCommand>,
    failures: FailureLog,
}

impl SnapshotWriter {
    /// Starts the background worker on the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Runtime`] when called outside a Tokio
    /// runtime.
    pub fn spawn<S>(gateway: Arc<PersistenceGateway<S>>) -> PersistenceResult<Self>
    where
        S: SnapshotStore + 'static,
    {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|err| PersistenceError::Runtime(Arc::new(err)))?;
        let (sender, receiver) = mpsc::unbounded_channel();
        let failures = FailureLog::default();
        handle.spawn(run_worker(gateway, receiver, Arc::clone(&failures)));
        Ok(Self { sender, failures })
    }

    /// Queues a board for saving and returns immediately.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::WriterStopped`] when the worker is gone.
    pub fn submit(&self, board: Board) -> PersistenceResult<()> {
        self.sender
            .send(WriteCommand::Save(board))
            .map_err(|_| PersistenceError::WriterStopped)
    }

    /// Waits until every board queued before this call has been written or
    /// has failed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::WriterStopped`] when the worker is gone.
    pub async fn flush(&self) -> PersistenceResult<()> {
        let (ack, done) = oneshot::channel();
        self.sender
            .send(WriteCommand::Flush(ack))
            .map_err(|_| PersistenceError::WriterStopped)?;
        done.await.map_err(|_| PersistenceError::WriterStopped)
    }

    /// Removes and returns the save failures seen so far, oldest first.
    #[must_use]
    pub fn take_failures(&self) -> Vec<PersistenceError> {
        std::mem::take(&mut *self.failures.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[async_trait]
impl BoardObserver for SnapshotWriter {
    async fn on_transition(&self, transition: &BoardTransition) -> Result<(), BoardObserverError> {
        self.submit(transition.next().clone())
            .map_err(|err| BoardObserverError::new("persistence", err))
    }
}

async fn run_worker<S>(
    gateway: Arc<PersistenceGateway<S>>,
    mut receiver: mpsc::UnboundedReceiver<WriteCommand>,
    failures: FailureLog,
) where
    S: SnapshotStore,
{
    while let Some(first) = receiver.recv().await {
        let mut latest = None;
        let mut waiters = Vec::new();
        let mut superseded = 0_usize;
        let mut queued = Some(first);
        while let Some(command) = queued {
            match command {
                WriteCommand::Save(board) => {
                    if latest.replace(board).is_some() {
                        superseded += 1;
                    }
                }
                WriteCommand::Flush(ack) => waiters.push(ack),
            }
            queued = receiver.try_recv().ok();
        }

        if let Some(board) = latest {
            if superseded > 0 {
                debug!(superseded, "coalesced queued board snapshots");
            }
            if let Err(err) = gateway.save(&board).await {
                warn!(key = %gateway.key(), error = %err, "write-behind snapshot save failed");
                failures
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(err);
            }
        }
        for ack in waiters {
            if ack.send(()).is_err() {
                debug!("flush requester stopped waiting");
            }
        }
    }
    debug!(key = %gateway.key(), "snapshot writer stopped");
}
