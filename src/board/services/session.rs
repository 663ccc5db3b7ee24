//! Board session: the single owner and mutation surface of the live board.

use crate::board::{
    domain::{
        Board, BoardDomainError, BoardLayout, DragEnd, DragEndPayload, DragOutcome, Task, TaskId,
        TaskPatch, resolve,
    },
    ports::{BoardObserver, BoardObserverError, BoardTransition, SnapshotStore, TransitionCause},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::PersistenceGateway;

/// Service-level errors for board session operations.
#[derive(Debug, Error)]
pub enum BoardSessionError {
    /// Domain validation failed; the board is unchanged.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}

/// Result type for board session operations.
pub type BoardSessionResult<T> = Result<T, BoardSessionError>;

/// Outcome of a session operation.
///
/// The board transition has already been committed when a report exists.
/// Observer failures, such as a stopped snapshot writer, are reported here
/// and never undo the transition.
#[derive(Debug)]
#[must_use]
pub struct SessionReport<T> {
    output: T,
    changed: bool,
    observer_failures: Vec<BoardObserverError>,
}

impl<T> SessionReport<T> {
    const fn unchanged(output: T) -> Self {
        Self {
            output,
            changed: false,
            observer_failures: Vec::new(),
        }
    }

    /// Returns the operation output.
    pub const fn output(&self) -> &T {
        &self.output
    }

    /// Consumes the report and returns the operation output.
    pub fn into_output(self) -> T {
        self.output
    }

    /// Returns `true` when the operation changed the board.
    pub const fn is_changed(&self) -> bool {
        self.changed
    }

    /// Returns the failures reported by observers.
    pub fn observer_failures(&self) -> &[BoardObserverError] {
        &self.observer_failures
    }
}

/// Explicit state container for the live board.
///
/// Every operation is applied to a copy of the board and committed in one
/// step, so readers only ever see complete, valid boards. `&mut self`
/// receivers keep a single writer. After a commit each registered observer
/// is notified in registration order.
pub struct BoardSession {
    board: Board,
    observers: Vec<Arc<dyn BoardObserver>>,
}

impl BoardSession {
    /// Creates a session around an existing board.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self {
            board,
            observers: Vec::new(),
        }
    }

    /// Opens a session from the stored snapshot, falling back to the seed
    /// board when none is stored, the stored one is invalid, or the store
    /// cannot be read.
    pub async fn open<S>(layout: &BoardLayout, gateway: &PersistenceGateway<S>) -> Self
    where
        S: SnapshotStore,
    {
        let board = match gateway.load(layout).await {
            Ok(Some(board)) => {
                info!(key = %gateway.key(), tasks = board.len(), "restored board from snapshot");
                board
            }
            Ok(None) => {
                info!(key = %gateway.key(), "starting from seed board");
                Board::seed(layout)
            }
            Err(err) => {
                warn!(
                    key = %gateway.key(),
                    error = %err,
                    "failed to read board snapshot, starting from seed board"
                );
                Board::seed(layout)
            }
        };
        Self::new(board)
    }

    /// Registers an observer of committed transitions.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn BoardObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Creates a task in the first column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the name is empty after
    /// trimming.
    pub async fn create_task(&mut self, name: &str) -> BoardSessionResult<SessionReport<Task>> {
        let mut next = self.board.clone();
        let task = next.create_task(name)?;
        let cause = TransitionCause::Created(task.id().clone());
        Ok(self.commit(next, cause, task).await)
    }

    /// Applies a partial update to a task, relocating it when the patch
    /// names a different column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the task does not exist or
    /// the patch is invalid.
    pub async fn update_task(
        &mut self,
        task_id: &TaskId,
        patch: &TaskPatch,
    ) -> BoardSessionResult<SessionReport<Task>> {
        let mut next = self.board.clone();
        let task = next.update_task(task_id, patch)?;
        if next == self.board {
            return Ok(SessionReport::unchanged(task));
        }
        Ok(self
            .commit(next, TransitionCause::Updated(task_id.clone()), task)
            .await)
    }

    /// Deletes a task. Deleting an unknown task is a no-op.
    pub async fn delete_task(&mut self, task_id: &TaskId) -> SessionReport<Option<Task>> {
        let mut next = self.board.clone();
        let Some(task) = next.delete_task(task_id) else {
            debug!(%task_id, "ignoring delete of unknown task");
            return SessionReport::unchanged(None);
        };
        self.commit(next, TransitionCause::Deleted(task_id.clone()), Some(task))
            .await
    }

    /// Applies a completed drag. Drags that resolve to nothing leave the
    /// board unchanged and notify no observer.
    pub async fn move_task(&mut self, drag: &DragEnd) -> SessionReport<DragOutcome> {
        let resolution = resolve(&self.board, drag);
        if !resolution.outcome.is_change() {
            debug!(task_id = %drag.active(), outcome = ?resolution.outcome, "drag ignored");
            return SessionReport::unchanged(resolution.outcome);
        }
        self.commit(
            resolution.board,
            TransitionCause::Dragged(drag.active().clone()),
            resolution.outcome,
        )
        .await
    }

    /// Narrows a raw drag payload and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Domain`] when the payload carries a blank
    /// task or column identifier.
    pub async fn apply_drag_payload(
        &mut self,
        payload: DragEndPayload,
    ) -> BoardSessionResult<SessionReport<DragOutcome>> {
        let drag = DragEnd::from_payload(payload)?;
        Ok(self.move_task(&drag).await)
    }

    async fn commit<T>(&mut self, next: Board, cause: TransitionCause, output: T) -> SessionReport<T> {
        let previous = std::mem::replace(&mut self.board, next);
        debug!(cause = %cause, tasks = self.board.len(), "committed board transition");
        let transition = BoardTransition::new(previous, self.board.clone(), cause);

        let mut observer_failures = Vec::new();
        for observer in &self.observers {
            if let Err(err) = observer.on_transition(&transition).await {
                warn!(cause = %transition.cause(), error = %err, "board observer failed");
                observer_failures.push(err);
            }
        }

        SessionReport {
            output,
            changed: true,
            observer_failures,
        }
    }
}
