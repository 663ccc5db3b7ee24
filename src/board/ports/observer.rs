//! Observer ports for committed board transitions.

use crate::board::domain::{Board, TaskCompleted, TaskId};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The session operation that produced a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionCause {
    /// A task was created.
    Created(TaskId),
    /// A task's fields or column were edited.
    Updated(TaskId),
    /// A task was deleted.
    Deleted(TaskId),
    /// A task was dragged to a new position.
    Dragged(TaskId),
}

impl TransitionCause {
    /// Returns the task the operation targeted.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        match self {
            Self::Created(task_id)
            | Self::Updated(task_id)
            | Self::Deleted(task_id)
            | Self::Dragged(task_id) => task_id,
        }
    }

    /// Returns a short operation label for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
            Self::Deleted(_) => "deleted",
            Self::Dragged(_) => "dragged",
        }
    }
}

impl fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_str(), self.task_id())
    }
}

/// A committed change from one board state to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTransition {
    previous: Board,
    next: Board,
    cause: TransitionCause,
}

impl BoardTransition {
    /// Creates a transition record.
    #[must_use]
    pub const fn new(previous: Board, next: Board, cause: TransitionCause) -> Self {
        Self {
            previous,
            next,
            cause,
        }
    }

    /// Returns the board before the operation.
    #[must_use]
    pub const fn previous(&self) -> &Board {
        &self.previous
    }

    /// Returns the board after the operation.
    #[must_use]
    pub const fn next(&self) -> &Board {
        &self.next
    }

    /// Returns the operation that produced the transition.
    #[must_use]
    pub const fn cause(&self) -> &TransitionCause {
        &self.cause
    }
}

/// Side-effect handler invoked after every committed transition.
///
/// Observers run once the new board is already in place; a failing observer
/// never rolls the transition back.
#[async_trait]
pub trait BoardObserver: Send + Sync {
    /// Reacts to a committed transition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardObserverError`] when the side effect could not be
    /// carried out.
    async fn on_transition(&self, transition: &BoardTransition) -> Result<(), BoardObserverError>;
}

/// Failure reported by a board observer.
#[derive(Debug, Clone, Error)]
#[error("{observer} observer failed: {cause}")]
pub struct BoardObserverError {
    observer: &'static str,
    cause: Arc<dyn std::error::Error + Send + Sync>,
}

impl BoardObserverError {
    /// Wraps a failure raised by the named observer.
    pub fn new(observer: &'static str, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            observer,
            cause: Arc::new(err),
        }
    }

    /// Returns the name of the failing observer.
    #[must_use]
    pub const fn observer(&self) -> &'static str {
        self.observer
    }
}

/// Consumer of completion signals, typically the presentation layer.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionSubscriber: Send + Sync {
    /// Receives a task completion signal.
    fn on_task_completed(&self, event: &TaskCompleted);
}
